use serde_json::Value;
use uuid::Uuid;

use super::{InvocationSummary, TransferJob, TransferOutcome, TransferResult};

/// Receives the diagnostic events of one invocation. Every hook defaults to a no-op.
pub trait TransferObserver: Send + Sync {
    fn on_event_received(&self, _payload: &Value) {}
    fn on_initialization_failure(&self, _error: &anyhow::Error) {}
    fn on_start(&self, _job: &TransferJob) {}
    fn on_download(&self, _file_name: &str, _source_url: &str) {}
    fn on_upload(&self, _file_name: &str, _size: usize, _location: &str) {}
    fn on_outcome(&self, _result: &TransferResult) {}
    fn on_summary(&self, _summary: &InvocationSummary) {}
}

/// Writes invocation events through the `log` facade, every line tagged with the invocation id.
pub struct LogObserver {
    invocation_tag: String,
}

impl LogObserver {
    pub fn new(invocation_id: Uuid) -> Self {
        Self {
            invocation_tag: invocation_id.to_string(),
        }
    }
}

impl TransferObserver for LogObserver {
    fn on_event_received(&self, payload: &Value) {
        log::info!("[{}] Invocation started.", self.invocation_tag);
        log::debug!("[{}] Event received: {payload}", self.invocation_tag);
    }

    fn on_initialization_failure(&self, error: &anyhow::Error) {
        log::error!(
            "[{}] Error initializing clients: {error:?}",
            self.invocation_tag
        );
    }

    fn on_start(&self, job: &TransferJob) {
        let params = job.get_params();
        log::info!(
            "[{}] Transferring {} files from {} to s3://{}/{} in region {}.",
            self.invocation_tag,
            params.get_file_names().len(),
            params.get_base_url(),
            params.get_bucket(),
            params.get_key_prefix(),
            params.get_region()
        );
    }

    fn on_download(&self, _file_name: &str, source_url: &str) {
        log::info!("[{}] Downloading file: {source_url}", self.invocation_tag);
    }

    fn on_upload(&self, file_name: &str, size: usize, location: &str) {
        log::info!(
            "[{}] Downloaded {file_name} successfully ({size} bytes). Uploading to {location}",
            self.invocation_tag
        );
    }

    fn on_outcome(&self, result: &TransferResult) {
        let file_name = result.get_file_name();
        match result.get_outcome() {
            TransferOutcome::Succeeded { size, location } => {
                log::info!(
                    "[{}] Uploaded {file_name} ({size} bytes) to {location} successfully.",
                    self.invocation_tag
                );
            }
            TransferOutcome::HttpFailure { status } => {
                log::warn!(
                    "[{}] Failed to download {file_name}: HTTP {status}",
                    self.invocation_tag
                );
            }
            TransferOutcome::TransportError { reason } => {
                log::error!(
                    "[{}] Error downloading {file_name} from {}: {reason}",
                    self.invocation_tag,
                    result.get_source_url()
                );
            }
            TransferOutcome::StorageError { reason } => {
                log::error!(
                    "[{}] Error uploading {file_name} to key {}: {reason}",
                    self.invocation_tag,
                    result.get_destination_key()
                );
            }
        }
    }

    fn on_summary(&self, summary: &InvocationSummary) {
        if summary.is_success() {
            log::info!(
                "[{}] Download and upload process completed: {} of {} files transferred under {}.",
                self.invocation_tag,
                summary.get_downloaded_files().len(),
                summary.get_results().len(),
                summary.get_key_prefix()
            );
        } else {
            log::error!(
                "[{}] {} Exiting.",
                self.invocation_tag,
                summary.get_message()
            );
        }
    }
}
