mod job;
mod job_params;
mod observer;
mod summary;
mod transfer_result;

pub use job::TransferJob;
#[cfg(test)]
pub use job_params::IMDB_FILE_NAMES;
pub use job_params::TransferJobParams;
pub use observer::{LogObserver, TransferObserver};
pub use summary::InvocationSummary;
#[cfg(test)]
pub use summary::NO_FILES_MESSAGE;
pub use transfer_result::{TransferOutcome, TransferResult};
