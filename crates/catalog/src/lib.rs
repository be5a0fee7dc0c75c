//! Read-mostly reference data for the enrollment engine.
//!
//! This crate provides:
//! - `Course`, `Section`, and `Semester` records
//! - Bulk section generation from a course's offering cross-product
//! - The semester clock: pure status/ordering derivation from an injected date
//! - The `Catalog` repository trait with an in-memory implementation

pub mod course;
pub mod error;
pub mod memory;
pub mod section;
pub mod semester;
pub mod store;

pub use course::Course;
pub use error::{CatalogError, Result};
pub use memory::InMemoryCatalog;
pub use section::Section;
pub use semester::{Semester, SemesterOrder, SemesterStatus};
pub use store::Catalog;
