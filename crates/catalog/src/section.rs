//! Section records and bulk generation.

use common::{CourseId, Credits, SectionId, SemesterName};
use serde::{Deserialize, Serialize};

use crate::course::Course;

/// A scheduled offering of a course: one semester/location/instructor
/// combination.
///
/// The seat counter is deliberately not part of this record; seat state is
/// owned by the seat inventory so that the catalog stays read-only once
/// sections exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Unique section identifier.
    pub id: SectionId,

    /// Owning course.
    pub course_id: CourseId,

    /// Course name, denormalized for display.
    pub course_name: String,

    /// Semester in which the section runs.
    pub semester: SemesterName,

    /// Location of the section.
    pub location: String,

    /// Instructor teaching the section.
    pub instructor: String,

    /// Credits awarded, copied from the course at generation time.
    pub credits: Credits,
}

/// Generates sections for a course as the cross-product of its offered
/// locations, semesters, and faculty.
///
/// IDs are assigned sequentially starting at `first_id`. The iteration order
/// is deterministic (the course's sets are ordered), so repeated generation
/// from the same course yields the same sections.
pub fn generate_sections(course: &Course, first_id: i32) -> Vec<Section> {
    let mut sections = Vec::with_capacity(course.offering_count());
    let mut next_id = first_id;
    for location in &course.locations_offered {
        for semester in &course.semesters_offered {
            for instructor in &course.faculty {
                sections.push(Section {
                    id: SectionId::new(next_id),
                    course_id: course.id.clone(),
                    course_name: course.name.clone(),
                    semester: semester.clone(),
                    location: location.clone(),
                    instructor: instructor.clone(),
                    credits: course.credits,
                });
                next_id += 1;
            }
        }
    }
    sections
}
