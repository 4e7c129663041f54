//! Read-only world snapshot accessors used by the scheduler each tick.

use courier_core::{HouseId, Order, Point};

/// Read-only view of the delivery world from one agent's perspective.
///
/// All methods are cheap snapshot reads; the scheduler calls them at most
/// O(pending orders) times per tick.  Within a tick the host must not mutate
/// the pending set or the tables between these calls, or the scheduler's
/// tie-breaking becomes nondeterministic.
///
/// # Iteration order
///
/// The slice returned by [`pending_orders`][Self::pending_orders] carries
/// meaning: when two orders tie on distance or deadline the scheduler selects
/// the earlier-indexed one.  Hosts should keep issue order.
pub trait WorldQuery {
    /// All currently unfulfilled orders, in issue order.
    fn pending_orders(&self) -> &[Order];

    /// Location of `house`, or `None` if the world has no such house.
    fn house_location(&self, house: HouseId) -> Option<Point>;

    /// Remaining seconds before the order(s) for `house` spoil.
    ///
    /// The countdown is owned and decremented by the host; the scheduler only
    /// reads it.  `None` means the house has no armed deadline (treated as
    /// never-urgent by selection).
    fn house_deadline(&self, house: HouseId) -> Option<f32>;

    /// Distance from the agent's current position to `point`, in world units.
    fn distance_to(&self, point: Point) -> f32;

    /// The agent's maximum movement speed, in world units per second.
    fn max_speed(&self) -> f32;

    /// Units of cargo the agent currently holds.
    fn cargo_count(&self) -> u32;
}
