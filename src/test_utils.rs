//! In-memory stand-ins for the HTTP source, the object store, and the log observer.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Mutex;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use bytes::Bytes;

use crate::source::{DatasetSource, FetchedFile};
use crate::storage::ObjectSink;
use crate::transfer::{
    InvocationSummary, TransferJob, TransferObserver, TransferOutcome, TransferResult,
};

#[derive(Clone)]
pub enum FakeResponse {
    Ok(Bytes),
    Status(u16),
    TransportError(String),
}

pub struct FakeSource {
    responses: HashMap<String, FakeResponse>,
    default: FakeResponse,
    requests: Mutex<Vec<String>>,
}

impl FakeSource {
    /// Unknown URLs answer 404 until [`FakeSource::with_default`] says otherwise.
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            default: FakeResponse::Status(404),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with(mut self, url: &str, response: FakeResponse) -> Self {
        self.responses.insert(url.to_owned(), response);
        self
    }

    pub fn with_default(mut self, response: FakeResponse) -> Self {
        self.default = response;
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl DatasetSource for FakeSource {
    async fn fetch(&self, url: &str) -> Result<FetchedFile> {
        self.requests.lock().unwrap().push(url.to_owned());
        match self.responses.get(url).unwrap_or(&self.default).clone() {
            FakeResponse::Ok(body) => Ok(FetchedFile::new(200, body)),
            FakeResponse::Status(status) => Ok(FetchedFile::new(status, Bytes::new())),
            FakeResponse::TransportError(reason) => Err(anyhow!(reason)),
        }
    }
}

/// Object store keyed by `(bucket, key)`. Puts to the same key overwrite.
pub struct MemorySink {
    objects: Mutex<BTreeMap<(String, String), Bytes>>,
    failing_keys: HashSet<String>,
    put_count: Mutex<usize>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            objects: Mutex::new(BTreeMap::new()),
            failing_keys: HashSet::new(),
            put_count: Mutex::new(0),
        }
    }

    pub fn failing_on(mut self, key: &str) -> Self {
        self.failing_keys.insert(key.to_owned());
        self
    }

    pub fn get(&self, bucket: &str, key: &str) -> Option<Bytes> {
        self.objects
            .lock()
            .unwrap()
            .get(&(bucket.to_owned(), key.to_owned()))
            .cloned()
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn put_count(&self) -> usize {
        *self.put_count.lock().unwrap()
    }
}

#[async_trait]
impl ObjectSink for MemorySink {
    async fn put_object(&self, bucket: &str, key: &str, body: Bytes) -> Result<()> {
        *self.put_count.lock().unwrap() += 1;
        if self.failing_keys.contains(key) {
            return Err(anyhow!("AccessDenied: writes to {key} are not allowed"));
        }
        self.objects
            .lock()
            .unwrap()
            .insert((bucket.to_owned(), key.to_owned()), body);
        Ok(())
    }

    fn location(&self, bucket: &str, key: &str) -> String {
        format!("s3://{bucket}/{key}")
    }
}

/// Flattens every event into a short line so tests can assert on the sequence.
pub struct RecordingObserver {
    events: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl TransferObserver for RecordingObserver {
    fn on_event_received(&self, _payload: &serde_json::Value) {
        self.record("event".to_owned());
    }

    fn on_initialization_failure(&self, error: &anyhow::Error) {
        self.record(format!("init failed {error}"));
    }

    fn on_start(&self, job: &TransferJob) {
        self.record(format!("start {}", job.get_params().get_file_names().len()));
    }

    fn on_download(&self, file_name: &str, _source_url: &str) {
        self.record(format!("download {file_name}"));
    }

    fn on_upload(&self, file_name: &str, size: usize, _location: &str) {
        self.record(format!("upload {file_name} {size}"));
    }

    fn on_outcome(&self, result: &TransferResult) {
        let outcome = match result.get_outcome() {
            TransferOutcome::Succeeded { .. } => "succeeded".to_owned(),
            TransferOutcome::HttpFailure { status } => format!("http {status}"),
            TransferOutcome::TransportError { .. } => "transport".to_owned(),
            TransferOutcome::StorageError { .. } => "storage".to_owned(),
        };
        self.record(format!("outcome {} {outcome}", result.get_file_name()));
    }

    fn on_summary(&self, summary: &InvocationSummary) {
        self.record(format!("summary {}", summary.get_status_code()));
    }
}
