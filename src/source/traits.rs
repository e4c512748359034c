use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;

/// Status and body of a completed GET. The body is left empty for non-200 responses.
#[derive(Debug, Clone)]
pub struct FetchedFile {
    status: u16,
    body: Bytes,
}

impl FetchedFile {
    pub const fn new(status: u16, body: Bytes) -> Self {
        Self { status, body }
    }

    pub const fn get_status(&self) -> u16 {
        self.status
    }

    pub const fn is_ok(&self) -> bool {
        self.status == 200
    }

    pub fn into_body(self) -> Bytes {
        self.body
    }
}

/// Where dataset files are read from.
///
/// An `Err` from [`DatasetSource::fetch`] is a transport failure (connect, timeout, body read).
/// Any response the server actually produced, whatever its status, comes back as `Ok`.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedFile>;
}
