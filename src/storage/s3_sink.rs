use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_s3::{Client, primitives::ByteStream};
use bytes::Bytes;

use super::traits::ObjectSink;

pub struct S3Sink {
    client: Client,
}

impl S3Sink {
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectSink for S3Sink {
    async fn put_object(&self, bucket: &str, key: &str, body: Bytes) -> Result<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
            .with_context(|| format!("s3::PutObject failed for s3://{bucket}/{key}"))?;
        Ok(())
    }

    fn location(&self, bucket: &str, key: &str) -> String {
        format!("s3://{bucket}/{key}")
    }
}
