//! Side-effecting agent commands issued by the scheduler.

use courier_core::{Order, Point};

/// The commands a scheduler may issue on behalf of its agent.
///
/// Each tick issues at most one movement command plus at most one
/// pickup/delivery attempt.  Effects are observed
/// only through later [`WorldQuery`][crate::WorldQuery] reads — `move_toward`
/// in particular is fire-and-forget and shows up as a shrinking
/// `distance_to` over subsequent ticks.
pub trait AgentActions {
    /// Steer the agent toward `point`.  Reissuing the same target every tick
    /// is expected and must be harmless.
    fn move_toward(&mut self, point: Point);

    /// Attempt to load cargo at the depot.
    ///
    /// Returns `false` when the agent is not yet at the pickup site — a
    /// blocking precondition the scheduler retries next tick, not an error.
    fn try_pickup_cargo(&mut self) -> bool;

    /// Attempt to hand `order` over at its house.
    ///
    /// Returns `false` when the delivery precondition is not yet met (agent
    /// not precisely positioned).  On `true` the host removes the order from
    /// the pending set.
    fn try_deliver(&mut self, order: Order) -> bool;
}
