use async_trait::async_trait;
use common::{CourseId, SectionId, SemesterName};

use crate::{Course, Result, Section, Semester};

/// Repository of catalog reference data.
///
/// Lookups return owned clones, giving callers a stable snapshot for the
/// duration of one operation. All implementations must be thread-safe.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Looks up a course by ID.
    async fn course(&self, id: &CourseId) -> Result<Course>;

    /// Looks up a section by ID.
    async fn section(&self, id: SectionId) -> Result<Section>;

    /// Looks up a semester by name.
    async fn semester(&self, name: &SemesterName) -> Result<Semester>;

    /// Returns all sections of a course, ordered by section ID.
    async fn sections_by_course(&self, id: &CourseId) -> Result<Vec<Section>>;
}
