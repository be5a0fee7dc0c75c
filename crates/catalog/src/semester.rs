//! Semester records and the semester clock.

use chrono::NaiveDate;
use common::SemesterName;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Temporal status of a semester relative to an injected "today".
///
/// The date is always an explicit parameter; nothing in the core reads the
/// wall clock, which keeps every status derivation deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SemesterStatus {
    /// Today is strictly before the start date.
    Upcoming,

    /// Today falls within the start..=end range.
    InSession,

    /// Today is strictly after the end date.
    Ended,
}

impl SemesterStatus {
    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SemesterStatus::Upcoming => "Upcoming",
            SemesterStatus::InSession => "InSession",
            SemesterStatus::Ended => "Ended",
        }
    }
}

impl std::fmt::Display for SemesterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Relative ordering of two semesters, by start date only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SemesterOrder {
    Earlier,
    Same,
    Later,
}

impl std::fmt::Display for SemesterOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SemesterOrder::Earlier => "Earlier",
            SemesterOrder::Same => "Same",
            SemesterOrder::Later => "Later",
        };
        write!(f, "{s}")
    }
}

/// A semester with its date bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    /// The semester's identity.
    pub name: SemesterName,

    /// First day of the semester.
    pub start: NaiveDate,

    /// Last day of the semester (inclusive).
    pub end: NaiveDate,
}

impl Semester {
    /// Creates a semester, enforcing `start <= end`.
    pub fn new(name: impl Into<SemesterName>, start: NaiveDate, end: NaiveDate) -> Result<Self> {
        let name = name.into();
        if end < start {
            return Err(CatalogError::InvalidSemesterBounds { name, start, end });
        }
        Ok(Self { name, start, end })
    }

    /// Derives the semester's status relative to `today`.
    pub fn status(&self, today: NaiveDate) -> SemesterStatus {
        if today < self.start {
            SemesterStatus::Upcoming
        } else if today <= self.end {
            SemesterStatus::InSession
        } else {
            SemesterStatus::Ended
        }
    }

    /// Compares this semester to another by start date only.
    pub fn compare_to(&self, other: &Semester) -> SemesterOrder {
        match self.start.cmp(&other.start) {
            std::cmp::Ordering::Less => SemesterOrder::Earlier,
            std::cmp::Ordering::Equal => SemesterOrder::Same,
            std::cmp::Ordering::Greater => SemesterOrder::Later,
        }
    }
}
