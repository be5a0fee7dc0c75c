use chrono::{DateTime, Utc};
use common::StudentId;

use crate::TransactionAction;

/// Builder for filtering reads of the transaction log.
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    /// Filter by student.
    pub student_id: Option<StudentId>,

    /// Filter by stored action (any of these).
    pub actions: Option<Vec<TransactionAction>>,

    /// Filter to entries at or after this timestamp.
    pub from_timestamp: Option<DateTime<Utc>>,

    /// Filter to entries at or before this timestamp.
    pub to_timestamp: Option<DateTime<Utc>>,

    /// Maximum number of entries to return.
    pub limit: Option<usize>,

    /// Number of entries to skip.
    pub offset: Option<usize>,
}

impl TransactionQuery {
    /// Creates a new empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a query for one student's log.
    pub fn for_student(student_id: StudentId) -> Self {
        Self {
            student_id: Some(student_id),
            ..Default::default()
        }
    }

    /// Filters by student.
    pub fn student(mut self, student_id: StudentId) -> Self {
        self.student_id = Some(student_id);
        self
    }

    /// Filters by a single stored action.
    pub fn action(mut self, action: TransactionAction) -> Self {
        self.actions = Some(vec![action]);
        self
    }

    /// Filters by multiple stored actions (any of these).
    pub fn actions(mut self, actions: Vec<TransactionAction>) -> Self {
        self.actions = Some(actions);
        self
    }

    /// Filters to entries at or after this timestamp.
    pub fn from_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.from_timestamp = Some(timestamp);
        self
    }

    /// Filters to entries at or before this timestamp.
    pub fn to_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.to_timestamp = Some(timestamp);
        self
    }

    /// Limits the number of entries returned.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Skips this many entries before returning results.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }
}
