//! Storage seam for student records.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::StudentId;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::student::Student;

/// Repository of student enrollment records.
///
/// Reads return owned snapshots; the service mutates a snapshot under its
/// per-student lock and writes it back with `save`. All implementations
/// must be thread-safe.
#[async_trait]
pub trait StudentDirectory: Send + Sync {
    /// Looks up a student, returning None if unknown.
    async fn get(&self, student_id: StudentId) -> Result<Option<Student>>;

    /// Inserts or replaces a student record.
    async fn save(&self, student: Student) -> Result<()>;
}

/// In-memory student directory.
#[derive(Clone, Default)]
pub struct InMemoryStudentDirectory {
    students: Arc<RwLock<HashMap<StudentId, Student>>>,
}

impl InMemoryStudentDirectory {
    /// Creates a new empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of student records.
    pub async fn student_count(&self) -> usize {
        self.students.read().await.len()
    }
}

#[async_trait]
impl StudentDirectory for InMemoryStudentDirectory {
    async fn get(&self, student_id: StudentId) -> Result<Option<Student>> {
        Ok(self.students.read().await.get(&student_id).cloned())
    }

    async fn save(&self, student: Student) -> Result<()> {
        self.students.write().await.insert(student.id(), student);
        Ok(())
    }
}
