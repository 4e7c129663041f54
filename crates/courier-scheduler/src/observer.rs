//! Scheduler observer trait for progress reporting and diagnostics.

use courier_core::Order;

use crate::UrgencyLevel;

/// Callbacks invoked by
/// [`DeliveryScheduler::advance`][crate::DeliveryScheduler::advance] at the
/// state machine's decision points.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The hooks correspond one-to-one with
/// the externally observable events of a tick: a new assignment, an urgency
/// escalation, a completed delivery, and the two retry outcomes.
///
/// # Example — console logger
///
/// ```rust,ignore
/// struct DeliveryLog;
///
/// impl SchedulerObserver for DeliveryLog {
///     fn on_delivered(&mut self, order: Order, distance: f32) {
///         println!("delivered {order} at distance {distance:.1}");
///     }
/// }
/// ```
pub trait SchedulerObserver {
    /// A new order was assigned and the agent set off toward its house.
    fn on_order_taken(&mut self, _order: Order, _urgency: UrgencyLevel) {}

    /// Selection preempted the nearest order for `order`, whose deadline
    /// slack (remaining seconds after travel time) fell below the margin.
    fn on_escalated(&mut self, _order: Order, _slack_secs: f32) {}

    /// `order` was handed over; `distance` is the final measured distance.
    fn on_delivered(&mut self, _order: Order, _distance: f32) {}

    /// A delivery attempt failed (not precisely positioned); the agent keeps
    /// steering and retries next tick.
    fn on_delivery_retry(&mut self, _order: Order, _distance: f32) {}

    /// Cargo pickup failed; the pending assignment is deferred a tick.
    fn on_pickup_blocked(&mut self) {}
}

/// A [`SchedulerObserver`] that does nothing.  Use when you need to call
/// `advance` but don't want progress callbacks.
pub struct NoopObserver;

impl SchedulerObserver for NoopObserver {}
