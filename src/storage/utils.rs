use anyhow::{Result, bail};
use aws_config::BehaviorVersion;
use aws_sdk_s3::{
    Client,
    config::{Builder, Region},
};
use url::Url;

/// Credentials come from the default provider chain of the execution environment. An endpoint
/// override switches to path-style addressing so S3-compatible stores work.
pub async fn create_s3_client(region_id: &str, endpoint: Option<&Url>) -> Result<Client> {
    if region_id.trim().is_empty() {
        bail!("S3 region must not be empty.");
    }

    let region = Region::new(region_id.to_owned());
    let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region.clone());
    if let Some(endpoint) = endpoint {
        loader = loader.endpoint_url(endpoint.as_str());
    }
    let base_config = loader.load().await;

    let config = Builder::from(&base_config)
        .force_path_style(endpoint.is_some())
        .region(region)
        .build();
    Ok(Client::from_conf(config))
}
