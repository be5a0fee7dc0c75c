use common::SectionId;
use thiserror::Error;

/// Errors that can occur when mutating seat counters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatError {
    /// No seats remain; the allocation performed no mutation.
    #[error("section {0} is at capacity")]
    AtCapacity(SectionId),

    /// The counter is already at the section's maximum. Freeing a seat that
    /// was never allocated indicates an accounting bug upstream; the free
    /// performed no mutation.
    #[error("section {0} already has all seats free")]
    AlreadyFull(SectionId),

    /// No counter has been opened for this section.
    #[error("no seat counter for section {0}")]
    UnknownSection(SectionId),

    /// A concurrent writer invalidated this update. Lock-based stores never
    /// return this; compare-and-swap backends do, and callers are expected
    /// to retry with backoff.
    #[error("lost update on seat counter for section {0}")]
    Conflict(SectionId),
}

/// Result type for seat inventory operations.
pub type Result<T> = std::result::Result<T, SeatError>;
