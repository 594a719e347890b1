use crate::domain::EntityId;

/// Hands out identifiers for one table.
///
/// The next id is one past the largest live id, but never at or below an id
/// that was issued before, so deleting the newest row does not free its id.
#[derive(Debug, Default, Clone)]
pub struct IdAllocator {
    high_water: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id<I>(&mut self, existing: I) -> EntityId
    where
        I: IntoIterator<Item = EntityId>,
    {
        let max_live = existing.into_iter().map(EntityId::get).max().unwrap_or(0);
        let next = max_live.max(self.high_water) + 1;
        self.high_water = next;
        EntityId::from_raw(next)
    }

    /// Largest id issued so far, or 0.
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}
