pub mod types;

pub use types::{Credits, CourseId, CourseIdError, SectionId, SemesterName, StudentId};
