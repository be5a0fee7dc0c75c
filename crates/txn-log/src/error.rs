use common::StudentId;
use thiserror::Error;

use crate::SequenceNumber;

/// Errors that can occur when interacting with the transaction log.
#[derive(Debug, Error)]
pub enum LogError {
    /// The expected sequence did not match the log's current tail; another
    /// writer appended first. Callers retry after reloading.
    #[error(
        "concurrency conflict on log for student {student_id}: expected sequence {expected}, found {actual}"
    )]
    ConcurrencyConflict {
        student_id: StudentId,
        expected: SequenceNumber,
        actual: SequenceNumber,
    },

    /// The entries handed to `append` were malformed as a batch.
    #[error("invalid append batch: {0}")]
    InvalidBatch(String),

    /// A serialization/deserialization error occurred.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for transaction log operations.
pub type Result<T> = std::result::Result<T, LogError>;
