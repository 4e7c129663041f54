//! `HouseTable` — the world's `HouseId` → location mapping.

use courier_core::{HouseId, Point};
use rustc_hash::FxHashMap;

/// Read-only (from the scheduler's side) table of house locations.
///
/// Backed by `FxHashMap`: keys are small integers, exactly the case the Fx
/// hasher is built for.  The table is owned by the host; the scheduler only
/// reaches it through [`WorldQuery::house_location`][crate::WorldQuery].
#[derive(Default, Clone, Debug)]
pub struct HouseTable {
    inner: FxHashMap<HouseId, Point>,
}

impl HouseTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(house, location)` pairs.  Later duplicates win.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (HouseId, Point)>) -> Self {
        Self {
            inner: pairs.into_iter().collect(),
        }
    }

    /// Register (or move) a house.
    pub fn insert(&mut self, house: HouseId, location: Point) {
        self.inner.insert(house, location);
    }

    /// Location of `house`, if known.
    #[inline]
    pub fn location(&self, house: HouseId) -> Option<Point> {
        self.inner.get(&house).copied()
    }

    pub fn contains(&self, house: HouseId) -> bool {
        self.inner.contains_key(&house)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate all `(house, location)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (HouseId, Point)> + '_ {
        self.inner.iter().map(|(&h, &p)| (h, p))
    }

    /// All house IDs, sorted ascending.  Used where deterministic iteration
    /// matters (e.g. seeding an order spawner).
    pub fn sorted_ids(&self) -> Vec<HouseId> {
        let mut ids: Vec<HouseId> = self.inner.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
