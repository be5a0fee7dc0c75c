use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::{CourseId, SectionId, SemesterName};
use tokio::sync::RwLock;

use crate::{
    Catalog, CatalogError, Course, Result, Section, Semester, section::generate_sections,
};

struct CatalogState {
    courses: HashMap<CourseId, Course>,
    sections: HashMap<SectionId, Section>,
    semesters: HashMap<SemesterName, Semester>,
    next_section_id: i32,
}

/// In-memory catalog implementation.
///
/// Serves as the repository for tests and single-process deployments; other
/// storage backends implement the same [`Catalog`] trait.
#[derive(Clone)]
pub struct InMemoryCatalog {
    state: Arc<RwLock<CatalogState>>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(CatalogState {
                courses: HashMap::new(),
                sections: HashMap::new(),
                semesters: HashMap::new(),
                next_section_id: 1,
            })),
        }
    }

    /// Inserts a semester record.
    pub async fn insert_semester(&self, semester: Semester) {
        let mut state = self.state.write().await;
        state.semesters.insert(semester.name.clone(), semester);
    }

    /// Inserts a course and generates its sections from the offering
    /// cross-product. Returns the generated sections.
    pub async fn insert_course(&self, course: Course) -> Vec<Section> {
        let mut state = self.state.write().await;
        let sections = generate_sections(&course, state.next_section_id);
        state.next_section_id += sections.len() as i32;
        for section in &sections {
            state.sections.insert(section.id, section.clone());
        }
        state.courses.insert(course.id.clone(), course);
        sections
    }

    /// Inserts a standalone section, for wiring up fixtures directly.
    pub async fn insert_section(&self, section: Section) {
        let mut state = self.state.write().await;
        let id = section.id.as_i32();
        if id >= state.next_section_id {
            state.next_section_id = id + 1;
        }
        state.sections.insert(section.id, section);
    }

    /// Returns the number of sections in the catalog.
    pub async fn section_count(&self) -> usize {
        self.state.read().await.sections.len()
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Catalog for InMemoryCatalog {
    async fn course(&self, id: &CourseId) -> Result<Course> {
        self.state
            .read()
            .await
            .courses
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::CourseNotFound(id.clone()))
    }

    async fn section(&self, id: SectionId) -> Result<Section> {
        self.state
            .read()
            .await
            .sections
            .get(&id)
            .cloned()
            .ok_or(CatalogError::SectionNotFound(id))
    }

    async fn semester(&self, name: &SemesterName) -> Result<Semester> {
        self.state
            .read()
            .await
            .semesters
            .get(name)
            .cloned()
            .ok_or_else(|| CatalogError::SemesterNotFound(name.clone()))
    }

    async fn sections_by_course(&self, id: &CourseId) -> Result<Vec<Section>> {
        let state = self.state.read().await;
        if !state.courses.contains_key(id) {
            return Err(CatalogError::CourseNotFound(id.clone()));
        }
        let mut sections: Vec<_> = state
            .sections
            .values()
            .filter(|s| &s.course_id == id)
            .cloned()
            .collect();
        sections.sort_by_key(|s| s.id);
        Ok(sections)
    }
}
