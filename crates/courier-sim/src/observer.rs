//! Driver-level observer extending the scheduler's callbacks.

use courier_core::{Order, Tick};
use courier_scheduler::{NoopObserver, SchedulerObserver};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] around each tick, on
/// top of the per-decision hooks inherited from [`SchedulerObserver`].
///
/// All methods default to no-ops.  One observer sees the whole run: scheduler
/// decisions and driver events interleaved in tick order.
pub trait SimObserver: SchedulerObserver {
    /// Called at the very start of each tick, before spawning.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.  `pending` is the size of the pending
    /// set after this tick's delivery and expiry processing.
    fn on_tick_end(&mut self, _tick: Tick, _pending: usize) {}

    /// The spawner issued a new order this tick.
    fn on_order_spawned(&mut self, _order: Order, _tick: Tick) {}

    /// An order spoiled before delivery and was dropped from the pending set.
    fn on_order_expired(&mut self, _order: Order, _tick: Tick) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

impl SimObserver for NoopObserver {}
