//! Course records.

use std::collections::BTreeSet;

use common::{CourseId, Credits, SemesterName};
use serde::{Deserialize, Serialize};

/// A course in the catalog.
///
/// Courses are read-only reference data: once sections have been generated
/// from a course, the record is never mutated. The identity is derived from
/// the catalog code and course number at construction (see
/// [`common::CourseId::new`]), so it can never drift from `catalog+number`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Derived identity, `catalog+number`.
    pub id: CourseId,

    /// Human-readable course name.
    pub name: String,

    /// Catalog description.
    pub description: String,

    /// Credit value awarded; copied onto each generated section.
    pub credits: Credits,

    /// Seat capacity of every section of this course.
    pub max_seats: u32,

    /// Semesters in which the course is offered.
    pub semesters_offered: BTreeSet<SemesterName>,

    /// Locations at which the course is offered.
    pub locations_offered: BTreeSet<String>,

    /// Faculty who teach the course.
    pub faculty: BTreeSet<String>,

    /// Identities of prerequisite courses (possibly empty).
    pub prereqs: BTreeSet<CourseId>,
}

impl Course {
    /// Creates a course record.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: CourseId,
        name: impl Into<String>,
        description: impl Into<String>,
        credits: Credits,
        max_seats: u32,
        semesters_offered: impl IntoIterator<Item = SemesterName>,
        locations_offered: impl IntoIterator<Item = String>,
        faculty: impl IntoIterator<Item = String>,
        prereqs: impl IntoIterator<Item = CourseId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            credits,
            max_seats,
            semesters_offered: semesters_offered.into_iter().collect(),
            locations_offered: locations_offered.into_iter().collect(),
            faculty: faculty.into_iter().collect(),
            prereqs: prereqs.into_iter().collect(),
        }
    }

    /// Returns true if the course has prerequisites.
    pub fn has_prereqs(&self) -> bool {
        !self.prereqs.is_empty()
    }

    /// Number of sections a full offering cross-product generates.
    pub fn offering_count(&self) -> usize {
        self.semesters_offered.len() * self.locations_offered.len() * self.faculty.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course() -> Course {
        Course::new(
            CourseId::new("CMSC", 101).unwrap(),
            "Intro to Computing",
            "First programming course",
            Credits::new(3),
            25,
            [SemesterName::new("Spring2025"), SemesterName::new("Fall2025")],
            ["Online".to_string(), "Campus".to_string()],
            ["Rivera".to_string()],
            [],
        )
    }

    #[test]
    fn identity_equals_catalog_plus_number() {
        let c = course();
        assert_eq!(c.id.as_str(), "CMSC101");
    }

    #[test]
    fn offering_count_is_cross_product_size() {
        // 2 semesters x 2 locations x 1 instructor
        assert_eq!(course().offering_count(), 4);
    }

    #[test]
    fn prereq_presence() {
        let mut c = course();
        assert!(!c.has_prereqs());
        c.prereqs.insert(CourseId::new("MATH", 140).unwrap());
        assert!(c.has_prereqs());
    }
}
