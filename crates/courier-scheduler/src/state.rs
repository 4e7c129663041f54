//! The scheduler's own mutable record: delivery phase and urgency level.

use courier_core::{Order, Point};

// ── DeliveryPhase ─────────────────────────────────────────────────────────────

/// Which half of the state machine the agent is in.
///
/// The active order and its destination live inside the `EnRoute` variant, so
/// "order and destination are both set exactly while en route" holds by
/// construction — there is no way to represent a half-assigned delivery.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum DeliveryPhase {
    /// No active order; the next tick runs job selection.
    #[default]
    Idle,

    /// Actively delivering `order` to `destination`.
    EnRoute { order: Order, destination: Point },
}

// ── UrgencyLevel ──────────────────────────────────────────────────────────────

/// Escalation status of the current (or just-completed) delivery.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum UrgencyLevel {
    /// Ordinary nearest-neighbor operation.
    #[default]
    Normal,

    /// A burning deadline was detected and the urgent order selected.
    Flagged,

    /// Arrival proximity reached while flagged: the choice is locked in and
    /// selection may not re-escalate until the delivery resolves.
    Committed,
}

// ── AgentState ────────────────────────────────────────────────────────────────

/// The complete mutable state of one delivery agent.
///
/// Single-owner: the scheduler is the sole mutator; hosts and observers only
/// read it.  Lifecycle matches the agent's.
#[derive(Copy, Clone, Debug, Default)]
pub struct AgentState {
    pub phase:   DeliveryPhase,
    pub urgency: UrgencyLevel,
}

impl AgentState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, DeliveryPhase::Idle)
    }

    /// The order being delivered, or `None` while idle.
    pub fn active_order(&self) -> Option<Order> {
        match self.phase {
            DeliveryPhase::Idle => None,
            DeliveryPhase::EnRoute { order, .. } => Some(order),
        }
    }

    /// The point being driven toward, or `None` while idle.
    pub fn destination(&self) -> Option<Point> {
        match self.phase {
            DeliveryPhase::Idle => None,
            DeliveryPhase::EnRoute { destination, .. } => Some(destination),
        }
    }
}
