use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;

use crate::source::{DatasetSource, HttpSource};
use crate::storage::{ObjectSink, S3Sink, create_s3_client};
use crate::transfer::{InvocationSummary, TransferJob, TransferJobParams, TransferObserver};

pub struct Clients {
    pub source: Box<dyn DatasetSource>,
    pub sink: Box<dyn ObjectSink>,
}

/// Builds what an invocation needs before the first transfer. A failure here aborts the
/// invocation with a 500.
#[async_trait]
pub trait Initializer: Send + Sync {
    fn load_params(&self) -> Result<TransferJobParams>;
    async fn create_clients(&self, params: &TransferJobParams) -> Result<Clients>;
}

/// Reads params from the process environment and connects to the real HTTP source and S3.
pub struct EnvInitializer;

#[async_trait]
impl Initializer for EnvInitializer {
    fn load_params(&self) -> Result<TransferJobParams> {
        TransferJobParams::from_env().context("Failed to load transfer configuration")
    }

    async fn create_clients(&self, params: &TransferJobParams) -> Result<Clients> {
        let source = HttpSource::new(params.get_request_timeout())?;
        let client = create_s3_client(params.get_region(), params.get_endpoint_url())
            .await
            .context("Failed to create S3 client")?;
        Ok(Clients {
            source: Box::new(source),
            sink: Box::new(S3Sink::new(client)),
        })
    }
}

/// Runs one invocation end to end. The payload is only logged.
pub async fn handle_invocation(
    payload: &Value,
    initializer: &dyn Initializer,
    observer: &dyn TransferObserver,
) -> InvocationSummary {
    observer.on_event_received(payload);

    let (params, clients) = match initialize(initializer).await {
        Ok(initialized) => initialized,
        Err(e) => {
            observer.on_initialization_failure(&e);
            return InvocationSummary::initialization_failure(&e);
        }
    };

    TransferJob::new(params)
        .execute(clients.source.as_ref(), clients.sink.as_ref(), observer)
        .await
}

async fn initialize(initializer: &dyn Initializer) -> Result<(TransferJobParams, Clients)> {
    let params = initializer.load_params()?;
    params.validate()?;
    let clients = initializer.create_clients(&params).await?;
    Ok((params, clients))
}
