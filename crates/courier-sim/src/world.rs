//! `SimWorld` — the in-memory delivery world.

use courier_core::{HouseId, Order, Point};
use courier_world::{AgentActions, HouseTable, WorldQuery};
use rustc_hash::FxHashMap;

/// An in-memory world implementing both scheduler facades.
///
/// Holds the agent (position, speed, cargo), the depot, the house table, the
/// pending order set, and the per-house deadline countdowns.  The scheduler
/// sees it through [`WorldQuery`] / [`AgentActions`]; the driver additionally
/// calls [`step`][Self::step] once per tick to integrate time.
///
/// Pickup succeeds only within `pickup_radius` of the depot and refills cargo
/// to capacity.  Delivery succeeds only within `delivery_radius` of the
/// order's house with cargo on board — the radius is deliberately tighter
/// than the scheduler's arrival radius, so the approach ends in a few
/// steer-and-retry ticks just like the engine original.
#[derive(Debug)]
pub struct SimWorld {
    houses:          HouseTable,
    deadlines:       FxHashMap<HouseId, f32>,
    pending:         Vec<Order>,
    depot:           Point,
    agent_pos:       Point,
    max_speed:       f32,
    cargo:           u32,
    cargo_capacity:  u32,
    pickup_radius:   f32,
    delivery_radius: f32,
    move_target:     Option<Point>,
    delivered_count: u32,
    expired_count:   u32,
}

impl SimWorld {
    /// A world with the agent parked at the depot, empty-handed.
    pub fn new(houses: HouseTable, depot: Point) -> Self {
        Self {
            houses,
            deadlines:       FxHashMap::default(),
            pending:         Vec::new(),
            depot,
            agent_pos:       depot,
            max_speed:       600.0,
            cargo:           0,
            cargo_capacity:  3,
            pickup_radius:   150.0,
            delivery_radius: 50.0,
            move_target:     None,
            delivered_count: 0,
            expired_count:   0,
        }
    }

    pub fn with_max_speed(mut self, units_per_sec: f32) -> Self {
        self.max_speed = units_per_sec;
        self
    }

    pub fn with_cargo_capacity(mut self, units: u32) -> Self {
        self.cargo_capacity = units;
        self
    }

    pub fn with_pickup_radius(mut self, radius: f32) -> Self {
        self.pickup_radius = radius;
        self
    }

    pub fn with_delivery_radius(mut self, radius: f32) -> Self {
        self.delivery_radius = radius;
        self
    }

    // ── Driver API ────────────────────────────────────────────────────────

    /// Issue `order` and (re)arm its house deadline.
    ///
    /// A second order to an already-armed house resets that house's
    /// countdown, matching a fresh-from-the-oven issue time.
    pub fn push_order(&mut self, order: Order, deadline_secs: f32) {
        self.pending.push(order);
        self.deadlines.insert(order.house, deadline_secs);
    }

    /// Integrate one timestep: move the agent toward its target, decay house
    /// deadlines, and drop spoiled orders.
    ///
    /// Returns the orders that expired this step, in issue order.
    pub fn step(&mut self, dt_secs: f32) -> Vec<Order> {
        // Movement first so this tick's travel counts against the countdown.
        if let Some(target) = self.move_target {
            self.agent_pos = self
                .agent_pos
                .step_toward(target, self.max_speed * dt_secs);
            if self.agent_pos == target {
                self.move_target = None;
            }
        }

        let mut spoiled: Vec<HouseId> = Vec::new();
        for (house, left) in self.deadlines.iter_mut() {
            *left -= dt_secs;
            if *left <= 0.0 {
                spoiled.push(*house);
            }
        }

        let mut expired: Vec<Order> = Vec::new();
        for house in spoiled {
            self.deadlines.remove(&house);
            self.pending.retain(|o| {
                if o.house == house {
                    expired.push(*o);
                    false
                } else {
                    true
                }
            });
        }
        self.expired_count += expired.len() as u32;
        expired
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn agent_position(&self) -> Point {
        self.agent_pos
    }

    pub fn depot(&self) -> Point {
        self.depot
    }

    pub fn houses(&self) -> &HouseTable {
        &self.houses
    }

    /// Orders successfully handed over since the world was created.
    pub fn delivered_count(&self) -> u32 {
        self.delivered_count
    }

    /// Orders dropped because their house deadline ran out.
    pub fn expired_count(&self) -> u32 {
        self.expired_count
    }
}

// ── Facade implementations ────────────────────────────────────────────────────

impl WorldQuery for SimWorld {
    fn pending_orders(&self) -> &[Order] {
        &self.pending
    }

    fn house_location(&self, house: HouseId) -> Option<Point> {
        self.houses.location(house)
    }

    fn house_deadline(&self, house: HouseId) -> Option<f32> {
        self.deadlines.get(&house).copied()
    }

    fn distance_to(&self, point: Point) -> f32 {
        self.agent_pos.distance_to(point)
    }

    fn max_speed(&self) -> f32 {
        self.max_speed
    }

    fn cargo_count(&self) -> u32 {
        self.cargo
    }
}

impl AgentActions for SimWorld {
    fn move_toward(&mut self, point: Point) {
        self.move_target = Some(point);
    }

    fn try_pickup_cargo(&mut self) -> bool {
        if self.agent_pos.distance_to(self.depot) > self.pickup_radius {
            return false;
        }
        self.cargo = self.cargo_capacity;
        true
    }

    fn try_deliver(&mut self, order: Order) -> bool {
        if self.cargo == 0 {
            return false;
        }
        let Some(idx) = self.pending.iter().position(|o| o.id == order.id) else {
            return false;
        };
        let Some(house_pos) = self.houses.location(order.house) else {
            return false;
        };
        if self.agent_pos.distance_to(house_pos) > self.delivery_radius {
            return false;
        }

        self.pending.remove(idx);
        self.cargo -= 1;
        self.delivered_count += 1;

        // Disarm the countdown once the last order for this house is gone.
        if !self.pending.iter().any(|o| o.house == order.house) {
            self.deadlines.remove(&order.house);
        }
        true
    }
}
