use anyhow::Result;
use serde::Serialize;
use serde_json::{Value, json};

use super::TransferResult;

pub const SUCCESS_MESSAGE: &str = "IMDb data downloaded and uploaded to S3 successfully.";
pub const NO_FILES_MESSAGE: &str = "No files were downloaded.";

const STATUS_OK: u16 = 200;
const STATUS_FAILED: u16 = 500;

/// The aggregate outcome of one invocation. This is the only thing a caller gets back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationSummary {
    status_code: u16,
    message: String,
    downloaded_files: Vec<String>,
    key_prefix: String,
    results: Vec<TransferResult>,
}

#[derive(Serialize)]
struct SuccessBody<'a> {
    message: &'a str,
    #[serde(rename = "downloadedFiles")]
    downloaded_files: &'a [String],
    #[serde(rename = "s3Prefix")]
    s3_prefix: &'a str,
}

impl InvocationSummary {
    /// Partial success is still a success: one stored file is enough for a 200.
    pub fn from_results(results: Vec<TransferResult>, key_prefix: &str) -> Self {
        let downloaded_files: Vec<String> = results
            .iter()
            .filter_map(|result| result.get_location().map(str::to_owned))
            .collect();

        let (status_code, message) = if downloaded_files.is_empty() {
            (STATUS_FAILED, NO_FILES_MESSAGE)
        } else {
            (STATUS_OK, SUCCESS_MESSAGE)
        };

        Self {
            status_code,
            message: message.to_owned(),
            downloaded_files,
            key_prefix: key_prefix.to_owned(),
            results,
        }
    }

    pub fn initialization_failure(error: &anyhow::Error) -> Self {
        Self {
            status_code: STATUS_FAILED,
            message: format!("{error:#}"),
            downloaded_files: Vec::new(),
            key_prefix: String::new(),
            results: Vec::new(),
        }
    }

    pub const fn get_status_code(&self) -> u16 {
        self.status_code
    }

    pub const fn is_success(&self) -> bool {
        self.status_code == STATUS_OK
    }

    pub fn get_message(&self) -> &str {
        &self.message
    }

    pub fn get_downloaded_files(&self) -> &[String] {
        &self.downloaded_files
    }

    pub fn get_key_prefix(&self) -> &str {
        &self.key_prefix
    }

    pub fn get_results(&self) -> &[TransferResult] {
        &self.results
    }

    /// Renders the Lambda-style response: `statusCode` plus a string `body`, which holds a JSON
    /// document on success and the bare error message otherwise.
    pub fn to_response(&self) -> Result<Value> {
        let body = if self.is_success() {
            serde_json::to_string(&SuccessBody {
                message: &self.message,
                downloaded_files: &self.downloaded_files,
                s3_prefix: &self.key_prefix,
            })?
        } else {
            self.message.clone()
        };
        Ok(json!({
            "statusCode": self.status_code,
            "body": body,
        }))
    }
}
