use chrono::{DateTime, Utc};
use common::{CourseId, SectionId, SemesterName, StudentId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a transaction record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Creates a new random transaction ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a transaction ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of a transaction within one student's log, used for optimistic
/// concurrency control on append.
///
/// Sequence numbers start at 1 for the first entry and increment by 1.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SequenceNumber(i64);

impl SequenceNumber {
    /// Creates a sequence number from a raw value.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the initial sequence (0) for an empty log.
    pub fn initial() -> Self {
        Self(0)
    }

    /// Returns the first sequence (1) for the first entry.
    pub fn first() -> Self {
        Self(1)
    }

    /// Returns the next sequence number.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns the raw value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SequenceNumber {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// The enrollment action a transaction records.
///
/// `Complete` is never appended by the registration flow: it exists only as
/// the derived display reading of a `Register` entry whose semester has
/// ended. It remains representable so views and filters can name it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionAction {
    Register,
    Drop,
    Withdraw,
    Complete,
}

impl TransactionAction {
    /// Returns the lower-case action name used in views and filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionAction::Register => "register",
            TransactionAction::Drop => "drop",
            TransactionAction::Withdraw => "withdraw",
            TransactionAction::Complete => "complete",
        }
    }
}

impl std::fmt::Display for TransactionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One immutable entry in a student's enrollment log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier for this entry.
    pub transaction_id: TransactionId,

    /// The student whose log this entry belongs to.
    pub student_id: StudentId,

    /// Course of the affected section.
    pub course_id: CourseId,

    /// The affected section.
    pub section_id: SectionId,

    /// Semester of the affected section.
    pub semester: SemesterName,

    /// The action recorded.
    pub action: TransactionAction,

    /// Position within the student's log.
    pub sequence: SequenceNumber,

    /// When the entry was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Creates a new transaction builder.
    pub fn builder() -> TransactionBuilder {
        TransactionBuilder::default()
    }
}

/// Builder for constructing transaction records.
#[derive(Debug, Default)]
pub struct TransactionBuilder {
    transaction_id: Option<TransactionId>,
    student_id: Option<StudentId>,
    course_id: Option<CourseId>,
    section_id: Option<SectionId>,
    semester: Option<SemesterName>,
    action: Option<TransactionAction>,
    sequence: Option<SequenceNumber>,
    timestamp: Option<DateTime<Utc>>,
}

impl TransactionBuilder {
    /// Sets the transaction ID. If not set, a new ID is generated.
    pub fn transaction_id(mut self, id: TransactionId) -> Self {
        self.transaction_id = Some(id);
        self
    }

    /// Sets the student ID.
    pub fn student_id(mut self, id: StudentId) -> Self {
        self.student_id = Some(id);
        self
    }

    /// Sets the course ID.
    pub fn course_id(mut self, id: CourseId) -> Self {
        self.course_id = Some(id);
        self
    }

    /// Sets the section ID.
    pub fn section_id(mut self, id: SectionId) -> Self {
        self.section_id = Some(id);
        self
    }

    /// Sets the semester name.
    pub fn semester(mut self, semester: SemesterName) -> Self {
        self.semester = Some(semester);
        self
    }

    /// Sets the recorded action.
    pub fn action(mut self, action: TransactionAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Sets the sequence number.
    pub fn sequence(mut self, sequence: SequenceNumber) -> Self {
        self.sequence = Some(sequence);
        self
    }

    /// Sets the timestamp. If not set, the current time is used.
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Builds the transaction, returning None if a required field is missing.
    pub fn try_build(self) -> Option<Transaction> {
        Some(Transaction {
            transaction_id: self.transaction_id.unwrap_or_default(),
            student_id: self.student_id?,
            course_id: self.course_id?,
            section_id: self.section_id?,
            semester: self.semester?,
            action: self.action?,
            sequence: self.sequence?,
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
        })
    }

    /// Builds the transaction.
    ///
    /// # Panics
    ///
    /// Panics if a required field (student, course, section, semester,
    /// action, sequence) is not set.
    pub fn build(self) -> Transaction {
        Transaction {
            transaction_id: self.transaction_id.unwrap_or_default(),
            student_id: self.student_id.expect("student_id is required"),
            course_id: self.course_id.expect("course_id is required"),
            section_id: self.section_id.expect("section_id is required"),
            semester: self.semester.expect("semester is required"),
            action: self.action.expect("action is required"),
            sequence: self.sequence.expect("sequence is required"),
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_transaction() -> Transaction {
        Transaction::builder()
            .student_id(StudentId::new())
            .course_id(CourseId::new("CMSC", 101).unwrap())
            .section_id(SectionId::new(1))
            .semester(SemesterName::new("Fall2025"))
            .action(TransactionAction::Register)
            .sequence(SequenceNumber::first())
            .build()
    }

    #[test]
    fn transaction_id_new_creates_unique_ids() {
        assert_ne!(TransactionId::new(), TransactionId::new());
    }

    #[test]
    fn sequence_initial_and_first() {
        assert_eq!(SequenceNumber::initial().as_i64(), 0);
        assert_eq!(SequenceNumber::first().as_i64(), 1);
        assert_eq!(SequenceNumber::initial().next(), SequenceNumber::first());
    }

    #[test]
    fn builder_fills_generated_fields() {
        let txn = build_transaction();
        assert_eq!(txn.action, TransactionAction::Register);
        assert_eq!(txn.sequence, SequenceNumber::first());
        assert!(txn.timestamp <= Utc::now());
    }

    #[test]
    fn try_build_returns_none_on_missing_fields() {
        assert!(Transaction::builder().try_build().is_none());
    }

    #[test]
    fn action_names_are_lower_case() {
        assert_eq!(TransactionAction::Register.as_str(), "register");
        assert_eq!(TransactionAction::Drop.as_str(), "drop");
        assert_eq!(TransactionAction::Withdraw.as_str(), "withdraw");
        assert_eq!(TransactionAction::Complete.as_str(), "complete");
    }

    #[test]
    fn serialization_roundtrip() {
        let txn = build_transaction();
        let json = serde_json::to_string(&txn).unwrap();
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, deserialized);
    }
}
