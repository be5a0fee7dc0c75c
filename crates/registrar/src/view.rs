//! Read-side views over the transaction log.

use catalog::SemesterStatus;
use chrono::{DateTime, Utc};
use common::{CourseId, SectionId, SemesterName};
use serde::Serialize;
use txn_log::{SequenceNumber, Transaction, TransactionAction, TransactionId};

/// One transaction as displayed to a student.
///
/// `action` is the derived display action, which can differ from what was
/// stored: a registration whose semester has since ended reads as
/// `Complete`. The stored action is kept alongside for audit surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionView {
    pub transaction_id: TransactionId,
    pub course_id: CourseId,
    pub section_id: SectionId,
    pub semester: SemesterName,
    pub action: TransactionAction,
    pub recorded_action: TransactionAction,
    pub sequence: SequenceNumber,
    pub timestamp: DateTime<Utc>,
}

impl TransactionView {
    /// Builds a view from a stored transaction and the current status of
    /// its semester.
    pub fn from_transaction(txn: &Transaction, semester_status: SemesterStatus) -> Self {
        Self {
            transaction_id: txn.transaction_id,
            course_id: txn.course_id.clone(),
            section_id: txn.section_id,
            semester: txn.semester.clone(),
            action: display_action(txn.action, semester_status),
            recorded_action: txn.action,
            sequence: txn.sequence,
            timestamp: txn.timestamp,
        }
    }
}

/// Derives the display action for a stored action given the semester's
/// current status. Recomputed on every read; never written back.
pub fn display_action(stored: TransactionAction, status: SemesterStatus) -> TransactionAction {
    match (stored, status) {
        (TransactionAction::Register, SemesterStatus::Ended) => TransactionAction::Complete,
        (action, _) => action,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_in_ended_semester_displays_complete() {
        assert_eq!(
            display_action(TransactionAction::Register, SemesterStatus::Ended),
            TransactionAction::Complete
        );
    }

    #[test]
    fn register_before_end_displays_register() {
        assert_eq!(
            display_action(TransactionAction::Register, SemesterStatus::Upcoming),
            TransactionAction::Register
        );
        assert_eq!(
            display_action(TransactionAction::Register, SemesterStatus::InSession),
            TransactionAction::Register
        );
    }

    #[test]
    fn drop_and_withdraw_never_flip() {
        assert_eq!(
            display_action(TransactionAction::Drop, SemesterStatus::Ended),
            TransactionAction::Drop
        );
        assert_eq!(
            display_action(TransactionAction::Withdraw, SemesterStatus::Ended),
            TransactionAction::Withdraw
        );
    }
}
