/// What happened to one source file during an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    Succeeded { size: usize, location: String },
    HttpFailure { status: u16 },
    TransportError { reason: String },
    StorageError { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferResult {
    file_name: String,
    source_url: String,
    destination_key: String,
    outcome: TransferOutcome,
}

impl TransferResult {
    pub const fn new(
        file_name: String,
        source_url: String,
        destination_key: String,
        outcome: TransferOutcome,
    ) -> Self {
        Self {
            file_name,
            source_url,
            destination_key,
            outcome,
        }
    }

    pub fn get_file_name(&self) -> &str {
        &self.file_name
    }

    pub fn get_source_url(&self) -> &str {
        &self.source_url
    }

    pub fn get_destination_key(&self) -> &str {
        &self.destination_key
    }

    pub const fn get_outcome(&self) -> &TransferOutcome {
        &self.outcome
    }

    /// Destination location of the stored object, if the transfer succeeded.
    pub fn get_location(&self) -> Option<&str> {
        match &self.outcome {
            TransferOutcome::Succeeded { location, .. } => Some(location.as_str()),
            _ => None,
        }
    }
}
