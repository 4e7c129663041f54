//! The `Sim` struct and its tick loop.

use courier_core::Tick;
use courier_scheduler::DeliveryScheduler;

use crate::{OrderSpawner, SimObserver, SimWorld};

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level driver configuration.
#[derive(Copy, Clone, Debug)]
pub struct SimConfig {
    /// Simulated seconds per tick.
    pub dt_secs: f32,

    /// Total ticks to run.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Issue a new order every N ticks.  0 disables spawning.
    pub spawn_interval_ticks: u64,

    /// Countdown armed on a house when an order is issued to it, in seconds.
    pub order_deadline_secs: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt_secs:              0.05,
            total_ticks:          2_000,
            seed:                 0,
            spawn_interval_ticks: 200,
            order_deadline_secs:  30.0,
        }
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The driver: owns the world, the scheduler, and the order spawner, and runs
/// the spawn → decide → step loop once per tick.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug)]
pub struct Sim {
    /// Global configuration (timestep, run length, seed, spawn policy).
    pub config: SimConfig,

    /// Current tick, advanced at the end of each loop iteration.
    pub tick: Tick,

    /// The in-memory world; implements both scheduler facades.
    pub world: SimWorld,

    /// The decision core under test/demo.
    pub scheduler: DeliveryScheduler,

    /// Deterministic order stream.
    pub spawner: OrderSpawner,
}

impl Sim {
    /// Run from the current tick to `config.total_ticks`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][courier_scheduler::NoopObserver] if you don't need
    /// callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.tick.0 < self.config.total_ticks {
            self.process_tick(observer);
        }
        observer.on_sim_end(self.tick);
    }

    /// Run exactly `n` ticks from the current position (ignores
    /// `total_ticks`).  Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.process_tick(observer);
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, observer: &mut O) {
        use courier_world::WorldQuery;

        let now = self.tick;
        observer.on_tick_start(now);

        // ── Phase 1: spawn ────────────────────────────────────────────────
        if let Some(order) = self.spawner.poll(now, &mut self.world) {
            observer.on_order_spawned(order, now);
        }

        // ── Phase 2: decide ───────────────────────────────────────────────
        self.scheduler.advance(&mut self.world, observer);

        // ── Phase 3: step the world ───────────────────────────────────────
        for order in self.world.step(self.config.dt_secs) {
            observer.on_order_expired(order, now);
        }

        observer.on_tick_end(now, self.world.pending_orders().len());
        self.tick = now + 1;
    }
}
