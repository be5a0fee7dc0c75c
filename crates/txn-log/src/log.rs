use std::pin::Pin;

use async_trait::async_trait;
use common::StudentId;
use futures_core::Stream;

use crate::{Result, SequenceNumber, Transaction, TransactionQuery};

/// Options for appending transactions to the log.
#[derive(Debug, Clone, Default)]
pub struct AppendOptions {
    /// Expected tail sequence of the student's log for optimistic
    /// concurrency control. If None, no check is performed (use with
    /// caution).
    pub expected_sequence: Option<SequenceNumber>,
}

impl AppendOptions {
    /// Creates options with no sequence check.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options expecting the student's log tail to be at a specific
    /// sequence.
    pub fn expect_sequence(sequence: SequenceNumber) -> Self {
        Self {
            expected_sequence: Some(sequence),
        }
    }

    /// Creates options expecting the student's log to be empty.
    pub fn expect_new() -> Self {
        Self {
            expected_sequence: Some(SequenceNumber::initial()),
        }
    }
}

/// A stream of transactions.
pub type TransactionStream = Pin<Box<dyn Stream<Item = Result<Transaction>> + Send>>;

/// Core trait for transaction log implementations.
///
/// The log is append-only: entries are never mutated or removed once
/// written. All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait TransactionLog: Send + Sync {
    /// Appends transactions to the log.
    ///
    /// Entries are appended atomically, either all succeed or none do.
    /// If `options.expected_sequence` is set, the operation fails with
    /// `ConcurrencyConflict` when the student's current tail sequence
    /// doesn't match.
    ///
    /// Returns the student's new tail sequence after appending.
    async fn append(
        &self,
        entries: Vec<Transaction>,
        options: AppendOptions,
    ) -> Result<SequenceNumber>;

    /// Retrieves all transactions for a student in sequence order
    /// (oldest first).
    async fn get_for_student(&self, student_id: StudentId) -> Result<Vec<Transaction>>;

    /// Retrieves transactions matching a query.
    async fn query(&self, query: TransactionQuery) -> Result<Vec<Transaction>>;

    /// Gets the tail sequence of a student's log.
    ///
    /// Returns None if the student has no entries.
    async fn latest_sequence(&self, student_id: StudentId) -> Result<Option<SequenceNumber>>;

    /// Streams every transaction in the log, in insertion order.
    async fn stream_all(&self) -> Result<TransactionStream>;
}

/// Extension trait providing convenience methods for transaction logs.
#[async_trait]
pub trait TransactionLogExt: TransactionLog {
    /// Appends a single transaction to the log.
    async fn append_one(
        &self,
        entry: Transaction,
        options: AppendOptions,
    ) -> Result<SequenceNumber> {
        self.append(vec![entry], options).await
    }

    /// Checks whether a student has any log entries.
    async fn has_entries(&self, student_id: StudentId) -> Result<bool> {
        Ok(self.latest_sequence(student_id).await?.is_some())
    }
}

// Blanket implementation for all TransactionLog implementations
impl<T: TransactionLog + ?Sized> TransactionLogExt for T {}

/// Error returned when an append batch is malformed.
#[derive(Debug, Clone)]
pub struct AppendValidationError {
    pub message: String,
}

impl std::fmt::Display for AppendValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Append validation error: {}", self.message)
    }
}

impl std::error::Error for AppendValidationError {}

/// Validates a batch of transactions before appending.
pub fn validate_entries_for_append(
    entries: &[Transaction],
) -> std::result::Result<(), AppendValidationError> {
    if entries.is_empty() {
        return Err(AppendValidationError {
            message: "Cannot append empty transaction list".to_string(),
        });
    }

    // All entries must be for the same student
    let first = &entries[0];
    for entry in entries.iter().skip(1) {
        if entry.student_id != first.student_id {
            return Err(AppendValidationError {
                message: "All transactions must be for the same student".to_string(),
            });
        }
    }

    // Sequences must be sequential
    let mut expected_sequence = first.sequence;
    for entry in entries.iter().skip(1) {
        expected_sequence = expected_sequence.next();
        if entry.sequence != expected_sequence {
            return Err(AppendValidationError {
                message: format!(
                    "Transaction sequences must be sequential. Expected {}, got {}",
                    expected_sequence, entry.sequence
                ),
            });
        }
    }

    Ok(())
}
