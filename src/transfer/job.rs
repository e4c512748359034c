use super::{
    InvocationSummary, TransferJobParams, TransferObserver, TransferOutcome, TransferResult,
};
use crate::source::DatasetSource;
use crate::storage::ObjectSink;

/// One pass over the configured file list. Files are transferred one at a time, in list order.
pub struct TransferJob {
    params: TransferJobParams,
}

impl TransferJob {
    pub const fn new(params: TransferJobParams) -> Self {
        Self { params }
    }

    pub const fn get_params(&self) -> &TransferJobParams {
        &self.params
    }

    /// Every failure is recorded against its file and the loop moves on, so the summary always
    /// has one result per configured file.
    pub async fn execute(
        &self,
        source: &dyn DatasetSource,
        sink: &dyn ObjectSink,
        observer: &dyn TransferObserver,
    ) -> InvocationSummary {
        observer.on_start(self);

        let mut results = Vec::with_capacity(self.params.get_file_names().len());
        for file_name in self.params.get_file_names() {
            let result = self.transfer_file(file_name, source, sink, observer).await;
            observer.on_outcome(&result);
            results.push(result);
        }

        let summary = InvocationSummary::from_results(results, self.params.get_key_prefix());
        observer.on_summary(&summary);
        summary
    }

    async fn transfer_file(
        &self,
        file_name: &str,
        source: &dyn DatasetSource,
        sink: &dyn ObjectSink,
        observer: &dyn TransferObserver,
    ) -> TransferResult {
        let source_url = self.params.source_url(file_name);
        let destination_key = self.params.destination_key(file_name);
        observer.on_download(file_name, &source_url);

        let outcome = match source.fetch(&source_url).await {
            Err(e) => TransferOutcome::TransportError {
                reason: format!("{e:#}"),
            },
            Ok(fetched) if !fetched.is_ok() => TransferOutcome::HttpFailure {
                status: fetched.get_status(),
            },
            Ok(fetched) => {
                let location = sink.location(self.params.get_bucket(), &destination_key);
                let body = fetched.into_body();
                let size = body.len();
                observer.on_upload(file_name, size, &location);

                match sink
                    .put_object(self.params.get_bucket(), &destination_key, body)
                    .await
                {
                    Ok(()) => TransferOutcome::Succeeded { size, location },
                    Err(e) => TransferOutcome::StorageError {
                        reason: format!("{e:#}"),
                    },
                }
            }
        };

        TransferResult::new(file_name.to_owned(), source_url, destination_key, outcome)
    }
}
