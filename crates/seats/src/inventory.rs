use async_trait::async_trait;
use common::SectionId;

use crate::Result;

/// Storage seam for per-section seat counters.
///
/// Implementations must make `allocate` and `free` linearizable per section:
/// each call is one atomic read-modify-write, and two concurrent `allocate`
/// calls against a single remaining seat must yield exactly one success and
/// one `AtCapacity`.
#[async_trait]
pub trait SeatInventory: Send + Sync {
    /// Registers a counter for a section with `max_seats` capacity, all
    /// seats initially available. Re-opening an existing section is a no-op.
    async fn open_section(&self, section_id: SectionId, max_seats: u32) -> Result<()>;

    /// Takes one seat. Fails with `AtCapacity` (no mutation) when none
    /// remain. Returns the seats remaining after the allocation.
    async fn allocate(&self, section_id: SectionId) -> Result<u32>;

    /// Returns one seat. Fails with `AlreadyFull` (no mutation) when the
    /// counter is already at capacity. Returns the seats available after
    /// the free.
    async fn free(&self, section_id: SectionId) -> Result<u32>;

    /// Current available-seat count.
    async fn available(&self, section_id: SectionId) -> Result<u32>;
}
