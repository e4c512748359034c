use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;

use super::traits::{DatasetSource, FetchedFile};

pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    /// `timeout` bounds connecting and every single read. A body that keeps arriving may take
    /// longer than `timeout` in total.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(timeout)
            .read_timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<FetchedFile> {
        let resp = self.client.get(url).send().await?;

        let status = resp.status().as_u16();
        log::debug!("GET {url} returned HTTP {status}.");
        if status != 200 {
            return Ok(FetchedFile::new(status, Bytes::new()));
        }

        let body = resp
            .bytes()
            .await
            .with_context(|| format!("Failed to read response body from {url}"))?;
        Ok(FetchedFile::new(status, body))
    }
}
