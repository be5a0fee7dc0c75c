use chrono::NaiveDate;
use common::{CourseId, SectionId, SemesterName};
use thiserror::Error;

/// Errors that can occur when reading or building catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No course with the given ID exists.
    #[error("course not found: {0}")]
    CourseNotFound(CourseId),

    /// No section with the given ID exists.
    #[error("section not found: {0}")]
    SectionNotFound(SectionId),

    /// No semester with the given name exists.
    #[error("semester not found: {0}")]
    SemesterNotFound(SemesterName),

    /// Semester bounds are inverted.
    #[error("semester {name} has end date {end} before start date {start}")]
    InvalidSemesterBounds {
        name: SemesterName,
        start: NaiveDate,
        end: NaiveDate,
    },
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
