//! Seat inventory: the one finite resource in the enrollment engine.
//!
//! Each section owns an available-seat counter bounded by the course's
//! capacity. `allocate` and `free` are single atomic read-modify-writes per
//! section, so concurrent allocations against one remaining seat resolve to
//! exactly one success.

pub mod error;
pub mod inventory;
pub mod memory;

pub use error::{Result, SeatError};
pub use inventory::SeatInventory;
pub use memory::InMemorySeatInventory;
