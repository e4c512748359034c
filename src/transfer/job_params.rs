use std::time::Duration;

use anyhow::{Context, Result, bail};
use url::Url;

/// The IMDb dataset files mirrored by every invocation, in transfer order.
pub const IMDB_FILE_NAMES: [&str; 7] = [
    "name.basics.tsv.gz",
    "title.akas.tsv.gz",
    "title.basics.tsv.gz",
    "title.crew.tsv.gz",
    "title.episode.tsv.gz",
    "title.principals.tsv.gz",
    "title.ratings.tsv.gz",
];

pub const DEFAULT_BASE_URL: &str = "https://datasets.imdbws.com/";
pub const DEFAULT_BUCKET: &str = "lambda-move-fetch-dir";
pub const DEFAULT_KEY_PREFIX: &str = "imdb/";
pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const ENV_BASE_URL: &str = "IMDB_MIRROR_BASE_URL";
const ENV_BUCKET: &str = "IMDB_MIRROR_BUCKET";
const ENV_KEY_PREFIX: &str = "IMDB_MIRROR_KEY_PREFIX";
const ENV_REGION: &str = "IMDB_MIRROR_REGION";
const ENV_ENDPOINT_URL: &str = "IMDB_MIRROR_ENDPOINT_URL";
const ENV_TIMEOUT_SECS: &str = "IMDB_MIRROR_TIMEOUT_SECS";

/// Parameters for a transfer job: the source base URL and file list, plus the S3 region, bucket,
/// and key prefix the files are written under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferJobParams {
    base_url: Url,
    file_names: Vec<String>,
    bucket: String,
    key_prefix: String,
    region: String,
    endpoint_url: Option<Url>,
    request_timeout: Duration,
}

impl Default for TransferJobParams {
    fn default() -> Self {
        Self {
            // DEFAULT_BASE_URL is a constant absolute URL; parsing it cannot fail.
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            file_names: IMDB_FILE_NAMES.iter().map(ToString::to_string).collect(),
            bucket: DEFAULT_BUCKET.to_owned(),
            key_prefix: DEFAULT_KEY_PREFIX.to_owned(),
            region: DEFAULT_REGION.to_owned(),
            endpoint_url: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl TransferJobParams {
    /// Loads the defaults and applies any `IMDB_MIRROR_*` overrides set in the process
    /// environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading variables through `lookup`. Unset and blank variables
    /// leave the default in place.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut params = Self::default();

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            params.base_url = Url::parse(&base_url)
                .with_context(|| format!("Invalid {ENV_BASE_URL}: {base_url}"))?;
        }
        if let Some(bucket) = lookup(ENV_BUCKET) {
            params.bucket = bucket;
        }
        if let Some(key_prefix) = lookup(ENV_KEY_PREFIX) {
            params.key_prefix = key_prefix;
        }
        if let Some(region) = lookup(ENV_REGION) {
            params.region = region;
        }
        if let Some(endpoint_url) = lookup(ENV_ENDPOINT_URL) {
            params.endpoint_url = Some(
                Url::parse(&endpoint_url)
                    .with_context(|| format!("Invalid {ENV_ENDPOINT_URL}: {endpoint_url}"))?,
            );
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = timeout
                .trim()
                .parse()
                .with_context(|| format!("Invalid {ENV_TIMEOUT_SECS}: {timeout}"))?;
            params.request_timeout = Duration::from_secs(secs);
        }

        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if self.bucket.trim().is_empty() {
            bail!("Destination bucket must not be empty.");
        }
        if self.region.trim().is_empty() {
            bail!("S3 region must not be empty.");
        }
        if self.file_names.is_empty() {
            bail!("No source files configured.");
        }
        if self.request_timeout.is_zero() {
            bail!("Request timeout must be greater than zero.");
        }
        Ok(())
    }

    pub fn get_base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn get_file_names(&self) -> &[String] {
        &self.file_names
    }

    pub fn get_bucket(&self) -> &str {
        &self.bucket
    }

    pub fn get_key_prefix(&self) -> &str {
        &self.key_prefix
    }

    pub fn get_region(&self) -> &str {
        &self.region
    }

    pub fn get_endpoint_url(&self) -> Option<&Url> {
        self.endpoint_url.as_ref()
    }

    pub const fn get_request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Base URL concatenated with the file name.
    pub fn source_url(&self, file_name: &str) -> String {
        format!("{}{file_name}", self.base_url)
    }

    /// Key prefix concatenated with the file name.
    pub fn destination_key(&self, file_name: &str) -> String {
        format!("{}{file_name}", self.key_prefix)
    }
}

#[cfg(test)]
impl TransferJobParams {
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_file_names<I, S>(mut self, file_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_names = file_names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}
