//! `OrderSpawner` — deterministic random order stream.

use courier_core::{HouseId, Order, OrderId, SimRng, Tick};
use courier_world::HouseTable;

use crate::SimWorld;

/// Issues an order to a random house on a fixed tick interval.
///
/// House choice is drawn from the table's IDs in sorted order via [`SimRng`],
/// so a given seed always produces the same order stream.  Order IDs count up
/// from zero.
#[derive(Debug)]
pub struct OrderSpawner {
    rng:            SimRng,
    houses:         Vec<HouseId>,
    interval_ticks: u64,
    deadline_secs:  f32,
    next_id:        u32,
}

impl OrderSpawner {
    pub fn new(houses: &HouseTable, seed: u64, interval_ticks: u64, deadline_secs: f32) -> Self {
        Self {
            rng: SimRng::new(seed),
            houses: houses.sorted_ids(),
            interval_ticks,
            deadline_secs,
            next_id: 0,
        }
    }

    /// Maybe issue an order for this tick.
    ///
    /// Spawns on every tick that is a multiple of the interval (including
    /// tick 0).  Returns the issued order so the driver can report it.
    pub fn poll(&mut self, tick: Tick, world: &mut SimWorld) -> Option<Order> {
        if self.houses.is_empty() || self.interval_ticks == 0 {
            return None;
        }
        if !tick.0.is_multiple_of(self.interval_ticks) {
            return None;
        }

        let house = *self.rng.choose(&self.houses)?;
        let order = Order::new(OrderId(self.next_id), house);
        self.next_id += 1;
        world.push_order(order, self.deadline_secs);
        Some(order)
    }

    /// How many orders have been issued so far.
    pub fn issued(&self) -> u32 {
        self.next_id
    }
}
