use std::sync::Arc;

use async_trait::async_trait;
use common::StudentId;
use tokio::sync::RwLock;

use crate::{
    LogError, Result, SequenceNumber, Transaction, TransactionQuery,
    log::{AppendOptions, TransactionLog, TransactionStream, validate_entries_for_append},
};

/// In-memory transaction log implementation.
///
/// Stores all entries in memory behind a single write lock, which makes
/// the append-with-sequence-check atomic. Suitable for tests and
/// single-process deployments.
#[derive(Clone, Default)]
pub struct InMemoryTransactionLog {
    entries: Arc<RwLock<Vec<Transaction>>>,
}

impl InMemoryTransactionLog {
    /// Creates a new empty in-memory log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of entries stored, across all students.
    pub async fn entry_count(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Clears all entries.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

#[async_trait]
impl TransactionLog for InMemoryTransactionLog {
    async fn append(
        &self,
        entries: Vec<Transaction>,
        options: AppendOptions,
    ) -> Result<SequenceNumber> {
        validate_entries_for_append(&entries)
            .map_err(|e| LogError::InvalidBatch(e.message))?;

        let student_id = entries[0].student_id;

        let mut log = self.entries.write().await;

        let current_sequence = log
            .iter()
            .filter(|t| t.student_id == student_id)
            .map(|t| t.sequence)
            .max()
            .unwrap_or(SequenceNumber::initial());

        if let Some(expected) = options.expected_sequence
            && current_sequence != expected
        {
            return Err(LogError::ConcurrencyConflict {
                student_id,
                expected,
                actual: current_sequence,
            });
        }

        // Reject stale sequences even without an explicit expectation
        let first_new_sequence = entries[0].sequence;
        if first_new_sequence <= current_sequence && current_sequence != SequenceNumber::initial() {
            return Err(LogError::ConcurrencyConflict {
                student_id,
                expected: options.expected_sequence.unwrap_or(current_sequence),
                actual: current_sequence,
            });
        }

        let last_sequence = entries
            .last()
            .map(|t| t.sequence)
            .unwrap_or(SequenceNumber::initial());
        let appended = entries.len();
        log.extend(entries);

        tracing::debug!(%student_id, appended, %last_sequence, "appended transactions");

        Ok(last_sequence)
    }

    async fn get_for_student(&self, student_id: StudentId) -> Result<Vec<Transaction>> {
        let log = self.entries.read().await;
        let mut entries: Vec<_> = log
            .iter()
            .filter(|t| t.student_id == student_id)
            .cloned()
            .collect();
        entries.sort_by_key(|t| t.sequence);
        Ok(entries)
    }

    async fn query(&self, query: TransactionQuery) -> Result<Vec<Transaction>> {
        let log = self.entries.read().await;
        let mut entries: Vec<_> = log
            .iter()
            .filter(|t| {
                if let Some(id) = query.student_id
                    && t.student_id != id
                {
                    return false;
                }
                if let Some(ref actions) = query.actions
                    && !actions.contains(&t.action)
                {
                    return false;
                }
                if let Some(from) = query.from_timestamp
                    && t.timestamp < from
                {
                    return false;
                }
                if let Some(to) = query.to_timestamp
                    && t.timestamp > to
                {
                    return false;
                }
                true
            })
            .cloned()
            .collect();

        // Sort by timestamp then sequence
        entries.sort_by(|a, b| {
            a.timestamp
                .cmp(&b.timestamp)
                .then(a.sequence.cmp(&b.sequence))
        });

        let offset = query.offset.unwrap_or(0);
        let entries: Vec<_> = entries.into_iter().skip(offset).collect();

        let entries = if let Some(limit) = query.limit {
            entries.into_iter().take(limit).collect()
        } else {
            entries
        };

        Ok(entries)
    }

    async fn latest_sequence(&self, student_id: StudentId) -> Result<Option<SequenceNumber>> {
        let log = self.entries.read().await;
        let sequence = log
            .iter()
            .filter(|t| t.student_id == student_id)
            .map(|t| t.sequence)
            .max();
        Ok(sequence)
    }

    async fn stream_all(&self) -> Result<TransactionStream> {
        use futures_util::stream;

        let log = self.entries.read().await;
        let mut entries = log.clone();
        entries.sort_by(|a, b| {
            a.timestamp
                .cmp(&b.timestamp)
                .then(a.transaction_id.as_uuid().cmp(&b.transaction_id.as_uuid()))
        });

        let stream = stream::iter(entries.into_iter().map(Ok));
        Ok(Box::pin(stream))
    }
}
