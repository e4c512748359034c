use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;

/// Where transferred files are written. A put to an existing key replaces the object.
#[async_trait]
pub trait ObjectSink: Send + Sync {
    async fn put_object(&self, bucket: &str, key: &str, body: Bytes) -> Result<()>;

    /// Location of `bucket`/`key` as reported back to the caller.
    fn location(&self, bucket: &str, key: &str) -> String;
}
