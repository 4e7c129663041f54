//! Unit and end-to-end tests for the driver crate.

use courier_core::{HouseId, Order, OrderId, Point, Tick};
use courier_world::{AgentActions, HouseTable, WorldQuery};

use crate::{OrderSpawner, SimBuilder, SimConfig, SimError, SimWorld};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn table(pairs: &[(u32, f32, f32)]) -> HouseTable {
    HouseTable::from_pairs(
        pairs
            .iter()
            .map(|&(id, x, y)| (HouseId(id), Point::new(x, y))),
    )
}

fn depot() -> Point {
    Point::new(0.0, 0.0)
}

// ── SimWorld ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod world {
    use super::*;

    #[test]
    fn movement_integrates_toward_target() {
        let mut w = SimWorld::new(table(&[]), depot()).with_max_speed(100.0);
        w.move_toward(Point::new(1000.0, 0.0));

        w.step(1.0);
        assert_eq!(w.agent_position(), Point::new(100.0, 0.0));

        w.step(1.0);
        assert_eq!(w.agent_position(), Point::new(200.0, 0.0));
    }

    #[test]
    fn movement_clamps_at_target() {
        let mut w = SimWorld::new(table(&[]), depot()).with_max_speed(100.0);
        let target = Point::new(30.0, 0.0);
        w.move_toward(target);

        w.step(1.0);
        assert_eq!(w.agent_position(), target);

        // Arrived: further steps stay put.
        w.step(1.0);
        assert_eq!(w.agent_position(), target);
    }

    #[test]
    fn pickup_requires_depot_proximity() {
        let mut w = SimWorld::new(table(&[]), depot()).with_max_speed(600.0);

        // At the depot: pickup loads to capacity.
        assert!(w.try_pickup_cargo());
        assert_eq!(w.cargo_count(), 3);

        // Drive 600 units away: out of pickup range.
        w.move_toward(Point::new(1000.0, 0.0));
        w.step(1.0);
        assert!(!w.try_pickup_cargo());
    }

    #[test]
    fn delivery_requires_proximity_and_cargo() {
        let house = Point::new(100.0, 0.0);
        let mut w = SimWorld::new(table(&[(10, 100.0, 0.0)]), depot());
        let order = Order::new(OrderId(0), HouseId(10));
        w.push_order(order, 30.0);

        // Too far, even with cargo.
        assert!(w.try_pickup_cargo());
        assert!(!w.try_deliver(order));

        // In position: succeeds, consumes cargo, clears the countdown.
        w.move_toward(house);
        w.step(1.0);
        assert!(w.try_deliver(order));
        assert_eq!(w.cargo_count(), 2);
        assert_eq!(w.delivered_count(), 1);
        assert!(w.pending_orders().is_empty());
        assert_eq!(w.house_deadline(HouseId(10)), None);
    }

    #[test]
    fn delivery_without_cargo_fails() {
        let mut w = SimWorld::new(table(&[(10, 0.0, 0.0)]), depot());
        let order = Order::new(OrderId(0), HouseId(10));
        w.push_order(order, 30.0);

        // House is at the depot, so only the empty hands block it.
        assert!(!w.try_deliver(order));
        assert_eq!(w.delivered_count(), 0);
    }

    #[test]
    fn colocated_sibling_keeps_the_countdown_armed() {
        let mut w = SimWorld::new(table(&[(10, 0.0, 0.0)]), depot());
        let first = Order::new(OrderId(0), HouseId(10));
        let second = Order::new(OrderId(1), HouseId(10));
        w.push_order(first, 30.0);
        w.push_order(second, 30.0);

        assert!(w.try_pickup_cargo());
        assert!(w.try_deliver(first));

        // The sibling order still needs its deadline.
        assert!(w.house_deadline(HouseId(10)).is_some());
        assert_eq!(w.pending_orders(), &[second]);
    }

    #[test]
    fn deadline_decay_expires_orders() {
        let mut w = SimWorld::new(table(&[(10, 500.0, 0.0)]), depot());
        let order = Order::new(OrderId(0), HouseId(10));
        w.push_order(order, 1.0);

        assert!(w.step(0.6).is_empty());
        let expired = w.step(0.6);

        assert_eq!(expired, vec![order]);
        assert!(w.pending_orders().is_empty());
        assert_eq!(w.expired_count(), 1);
        assert_eq!(w.house_deadline(HouseId(10)), None);
    }
}

// ── OrderSpawner ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod spawner {
    use super::*;

    fn drive(spawner: &mut OrderSpawner, world: &mut SimWorld, ticks: u64) -> Vec<Order> {
        (0..ticks)
            .filter_map(|t| spawner.poll(Tick(t), world))
            .collect()
    }

    #[test]
    fn same_seed_same_stream() {
        let houses = table(&[(0, 1.0, 0.0), (1, 2.0, 0.0), (2, 3.0, 0.0)]);
        let mut w1 = SimWorld::new(houses.clone(), depot());
        let mut w2 = SimWorld::new(houses.clone(), depot());
        let mut s1 = OrderSpawner::new(&houses, 42, 3, 30.0);
        let mut s2 = OrderSpawner::new(&houses, 42, 3, 30.0);

        assert_eq!(drive(&mut s1, &mut w1, 30), drive(&mut s2, &mut w2, 30));
    }

    #[test]
    fn spawns_only_on_interval_multiples() {
        let houses = table(&[(0, 1.0, 0.0)]);
        let mut w = SimWorld::new(houses.clone(), depot());
        let mut s = OrderSpawner::new(&houses, 0, 5, 30.0);

        let issued = drive(&mut s, &mut w, 11); // ticks 0..=10
        assert_eq!(issued.len(), 3); // ticks 0, 5, 10
        assert_eq!(s.issued(), 3);
        assert_eq!(w.pending_orders().len(), 3);
    }

    #[test]
    fn zero_interval_disables_spawning() {
        let houses = table(&[(0, 1.0, 0.0)]);
        let mut w = SimWorld::new(houses.clone(), depot());
        let mut s = OrderSpawner::new(&houses, 0, 0, 30.0);

        assert!(drive(&mut s, &mut w, 10).is_empty());
    }

    #[test]
    fn order_ids_count_up() {
        let houses = table(&[(0, 1.0, 0.0)]);
        let mut w = SimWorld::new(houses.clone(), depot());
        let mut s = OrderSpawner::new(&houses, 7, 1, 30.0);

        let issued = drive(&mut s, &mut w, 3);
        let ids: Vec<OrderId> = issued.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![OrderId(0), OrderId(1), OrderId(2)]);
    }
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn rejects_non_positive_timestep() {
        let config = SimConfig {
            dt_secs: 0.0,
            ..SimConfig::default()
        };
        let err = SimBuilder::new(config, table(&[(0, 1.0, 0.0)]), depot())
            .build()
            .unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn rejects_empty_house_table() {
        let err = SimBuilder::new(SimConfig::default(), table(&[]), depot())
            .build()
            .unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn builds_with_defaults() {
        let sim = SimBuilder::new(SimConfig::default(), table(&[(0, 100.0, 0.0)]), depot())
            .build()
            .unwrap();
        assert_eq!(sim.tick, Tick::ZERO);
        assert_eq!(sim.world.delivered_count(), 0);
    }
}

// ── End-to-end ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod end_to_end {
    use super::*;
    use courier_scheduler::{SchedulerObserver, UrgencyLevel};
    use crate::SimObserver;

    #[derive(Default)]
    struct RunLog {
        spawned:   Vec<OrderId>,
        delivered: Vec<OrderId>,
        expired:   Vec<OrderId>,
        ended_at:  Option<Tick>,
    }

    impl SchedulerObserver for RunLog {
        fn on_order_taken(&mut self, _order: Order, _urgency: UrgencyLevel) {}
        fn on_delivered(&mut self, order: Order, _distance: f32) {
            self.delivered.push(order.id);
        }
    }

    impl SimObserver for RunLog {
        fn on_order_spawned(&mut self, order: Order, _tick: Tick) {
            self.spawned.push(order.id);
        }
        fn on_order_expired(&mut self, order: Order, _tick: Tick) {
            self.expired.push(order.id);
        }
        fn on_sim_end(&mut self, final_tick: Tick) {
            self.ended_at = Some(final_tick);
        }
    }

    #[test]
    fn small_run_delivers_every_spawned_order() {
        let houses = table(&[(0, 300.0, 0.0), (1, 0.0, 300.0), (2, -200.0, 200.0)]);
        let config = SimConfig {
            dt_secs:              0.05,
            total_ticks:          2_000,
            seed:                 1,
            spawn_interval_ticks: 400,
            order_deadline_secs:  30.0,
        };
        let mut sim = SimBuilder::new(config, houses, depot())
            .cargo_capacity(10)
            .build()
            .unwrap();

        let mut log = RunLog::default();
        sim.run(&mut log);

        // Spawns at ticks 0, 400, 800, 1200, 1600.
        assert_eq!(log.spawned.len(), 5);
        assert_eq!(log.delivered, log.spawned);
        assert!(log.expired.is_empty());
        assert_eq!(sim.world.delivered_count(), 5);
        assert_eq!(sim.world.expired_count(), 0);
        assert!(sim.world.pending_orders().is_empty());
        assert_eq!(log.ended_at, Some(Tick(2_000)));
    }

    #[test]
    fn run_ticks_steps_incrementally() {
        let houses = table(&[(0, 300.0, 0.0)]);
        let config = SimConfig {
            spawn_interval_ticks: 0, // quiet world
            ..SimConfig::default()
        };
        let mut sim = SimBuilder::new(config, houses, depot()).build().unwrap();

        let mut log = RunLog::default();
        sim.run_ticks(10, &mut log);

        assert_eq!(sim.tick, Tick(10));
        assert!(log.spawned.is_empty());
        assert!(log.delivered.is_empty());
    }

    #[test]
    fn unreachable_deadline_expires_the_order() {
        // One distant house, a slow agent, and a short fuse: the order must
        // expire rather than deliver.
        let houses = table(&[(0, 5_000.0, 0.0)]);
        let config = SimConfig {
            dt_secs:              0.05,
            total_ticks:          500,
            seed:                 1,
            spawn_interval_ticks: 1_000, // only the tick-0 spawn fits
            order_deadline_secs:  2.0,
        };
        let mut sim = SimBuilder::new(config, houses, depot())
            .max_speed(100.0)
            .build()
            .unwrap();

        let mut log = RunLog::default();
        sim.run(&mut log);

        assert_eq!(log.spawned.len(), 1);
        assert_eq!(log.expired, log.spawned);
        assert!(log.delivered.is_empty());
        assert_eq!(sim.world.expired_count(), 1);
    }
}
