//! The `Order` value entity.

use std::fmt;

use crate::{HouseId, OrderId};

/// A pending delivery job: an identity plus the house it must reach.
///
/// Orders are immutable once issued by the world.  The scheduler never
/// creates or destroys them — the world removes an order from its pending
/// set when delivery succeeds (or the deadline expires).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    pub id:    OrderId,
    pub house: HouseId,
}

impl Order {
    #[inline]
    pub fn new(id: OrderId, house: HouseId) -> Self {
        Self { id, house }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "order {} → house {}", self.id.0, self.house.0)
    }
}
