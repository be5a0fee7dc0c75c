use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::SectionId;
use tokio::sync::RwLock;

use crate::{Result, SeatError, SeatInventory};

#[derive(Debug, Clone, Copy)]
struct SeatCounter {
    available: u32,
    max: u32,
}

/// In-memory seat inventory.
///
/// All mutations happen under the map's write lock, so each allocate/free is
/// a single atomic read-modify-write and the per-section linearizability
/// contract holds without any compare-and-swap loop.
#[derive(Clone, Default)]
pub struct InMemorySeatInventory {
    counters: Arc<RwLock<HashMap<SectionId, SeatCounter>>>,
}

impl InMemorySeatInventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of sections with counters.
    pub async fn section_count(&self) -> usize {
        self.counters.read().await.len()
    }
}

#[async_trait]
impl SeatInventory for InMemorySeatInventory {
    async fn open_section(&self, section_id: SectionId, max_seats: u32) -> Result<()> {
        let mut counters = self.counters.write().await;
        counters.entry(section_id).or_insert(SeatCounter {
            available: max_seats,
            max: max_seats,
        });
        Ok(())
    }

    async fn allocate(&self, section_id: SectionId) -> Result<u32> {
        let mut counters = self.counters.write().await;
        let counter = counters
            .get_mut(&section_id)
            .ok_or(SeatError::UnknownSection(section_id))?;
        if counter.available == 0 {
            return Err(SeatError::AtCapacity(section_id));
        }
        counter.available -= 1;
        tracing::debug!(%section_id, remaining = counter.available, "seat allocated");
        Ok(counter.available)
    }

    async fn free(&self, section_id: SectionId) -> Result<u32> {
        let mut counters = self.counters.write().await;
        let counter = counters
            .get_mut(&section_id)
            .ok_or(SeatError::UnknownSection(section_id))?;
        if counter.available >= counter.max {
            return Err(SeatError::AlreadyFull(section_id));
        }
        counter.available += 1;
        tracing::debug!(%section_id, available = counter.available, "seat freed");
        Ok(counter.available)
    }

    async fn available(&self, section_id: SectionId) -> Result<u32> {
        let counters = self.counters.read().await;
        counters
            .get(&section_id)
            .map(|c| c.available)
            .ok_or(SeatError::UnknownSection(section_id))
    }
}
