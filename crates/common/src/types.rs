use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a student.
///
/// Wraps a UUID to provide type safety and prevent mixing up
/// student IDs with other UUID-based identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(Uuid);

impl StudentId {
    /// Creates a new random student ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a student ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for StudentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for StudentId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<StudentId> for Uuid {
    fn from(id: StudentId) -> Self {
        id.0
    }
}

/// Identifier for a scheduled section of a course.
///
/// Sections are generated in bulk from a course's offering cross-product
/// and carry small sequential integer IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(i32);

impl SectionId {
    /// Creates a section ID from a raw value.
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw ID value.
    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for SectionId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<SectionId> for i32 {
    fn from(id: SectionId) -> Self {
        id.0
    }
}

/// Errors produced when constructing or parsing a [`CourseId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CourseIdError {
    /// Catalog code is not exactly four ASCII letters.
    #[error("catalog code must be exactly 4 ASCII letters, got {0:?}")]
    InvalidCatalog(String),

    /// Course number is outside the three-digit range.
    #[error("course number must be a 3-digit integer (100-999), got {0}")]
    InvalidNumber(u16),

    /// Raw string is not a catalog code followed by a course number.
    #[error("malformed course id {0:?}")]
    Malformed(String),
}

/// Identity of a course: a 4-letter catalog code plus a 3-digit number.
///
/// The stored form is always the normalized concatenation, e.g. `CMSC101`.
/// Construction validates both parts, so a `CourseId` in hand is known
/// well-formed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    /// Creates a course ID from a catalog code and course number.
    ///
    /// The catalog code is normalized to upper-case.
    pub fn new(catalog: &str, number: u16) -> Result<Self, CourseIdError> {
        if catalog.len() != 4 || !catalog.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CourseIdError::InvalidCatalog(catalog.to_string()));
        }
        if !(100..=999).contains(&number) {
            return Err(CourseIdError::InvalidNumber(number));
        }
        Ok(Self(format!("{}{}", catalog.to_ascii_uppercase(), number)))
    }

    /// Parses a course ID from its concatenated form (e.g. `"CMSC101"`).
    pub fn parse(raw: &str) -> Result<Self, CourseIdError> {
        if raw.len() != 7 {
            return Err(CourseIdError::Malformed(raw.to_string()));
        }
        let (catalog, number) = raw.split_at(4);
        let number: u16 = number
            .parse()
            .map_err(|_| CourseIdError::Malformed(raw.to_string()))?;
        Self::new(catalog, number)
    }

    /// Returns the 4-letter catalog code.
    pub fn catalog(&self) -> &str {
        &self.0[..4]
    }

    /// Returns the 3-digit course number.
    pub fn number(&self) -> u16 {
        self.0[4..].parse().unwrap_or(0)
    }

    /// Returns the course ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CourseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Name of a semester (e.g. `"Fall2025"`), the semester's identity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SemesterName(String);

impl SemesterName {
    /// Creates a semester name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SemesterName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SemesterName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SemesterName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for SemesterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Credit value of a course or section, and sums thereof.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Credits(u32);

impl Credits {
    /// Creates a credit value.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns zero credits.
    pub fn zero() -> Self {
        Self(0)
    }

    /// Returns the raw credit count.
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Returns true if the value is greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Saturating addition of two credit values.
    pub fn saturating_add(&self, other: Credits) -> Credits {
        Credits(self.0.saturating_add(other.0))
    }
}

impl std::fmt::Display for Credits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Add for Credits {
    type Output = Credits;

    fn add(self, rhs: Self) -> Self::Output {
        Credits(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Credits {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::iter::Sum for Credits {
    fn sum<I: Iterator<Item = Credits>>(iter: I) -> Self {
        iter.fold(Credits::zero(), |acc, c| acc + c)
    }
}

impl From<u32> for Credits {
    fn from(value: u32) -> Self {
        Self(value)
    }
}
