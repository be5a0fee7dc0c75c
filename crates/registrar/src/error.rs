//! Enrollment error types.

use catalog::CatalogError;
use common::{CourseId, SectionId, SemesterName, StudentId};
use seats::SeatError;
use thiserror::Error;
use txn_log::LogError;

/// A user-facing rejection of an enrollment request.
///
/// Rejections are expected outcomes, not faults: the request was understood
/// and refused, and no state was changed on the rejected path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The section is already in the student's cart.
    #[error("section {0} is already in the cart")]
    AlreadyInCart(SectionId),

    /// Another section of the same course is already in the cart.
    #[error("another section of course {0} is already in the cart")]
    CourseAlreadyInCart(CourseId),

    /// The course is already registered (and is not an eligible retake).
    #[error("course {0} is already registered")]
    CourseAlreadyRegistered(CourseId),

    /// The course's prerequisites are not satisfied.
    #[error("prerequisites for course {0} are not met")]
    PrereqNotMet(CourseId),

    /// The section's semester is no longer upcoming.
    #[error("section {0} has already started")]
    SectionStarted(SectionId),

    /// No seats remain in the section.
    #[error("no seats available in section {0}")]
    NoSeats(SectionId),

    /// Registering the cart would exceed the per-semester credit cap.
    #[error("credit cap exceeded for semester {0}")]
    CreditOverload(SemesterName),

    /// The cart is empty; there is nothing to register.
    #[error("cart is empty")]
    EmptyCart,

    /// The section is not in the student's cart.
    #[error("section {0} is not in the cart")]
    NotInCart(SectionId),

    /// The section is not registered (or its semester has ended).
    #[error("section {0} is not an active registration")]
    NotRegistered(SectionId),
}

/// Errors that can occur during enrollment operations.
#[derive(Debug, Error)]
pub enum EnrollmentError {
    /// The request was refused by an enrollment rule.
    #[error("rejected: {0}")]
    Rejected(#[from] Rejection),

    /// An error occurred in the catalog store.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// An error occurred in the seat inventory.
    #[error("seat inventory error: {0}")]
    Seats(#[from] SeatError),

    /// An error occurred in the transaction log.
    #[error("transaction log error: {0}")]
    Log(#[from] LogError),

    /// No student record exists for the given ID.
    #[error("student not found: {0}")]
    StudentNotFound(StudentId),
}

impl EnrollmentError {
    /// Returns the inner rejection, if this error is one.
    pub fn as_rejection(&self) -> Option<&Rejection> {
        match self {
            EnrollmentError::Rejected(r) => Some(r),
            _ => None,
        }
    }
}

/// Result type for enrollment operations.
pub type Result<T> = std::result::Result<T, EnrollmentError>;
