//! Job-selection scans and scheduler configuration.
//!
//! Both scans are single linear passes over the pending set, replacing the
//! running best only on a strictly better value.  Strict comparison is what
//! makes tie-breaking deterministic: two orders with identical distance (or
//! identical deadline) resolve to the one issued earlier, because the host
//! keeps the pending slice in issue order.
//!
//! Orders whose house is missing from the location table cannot be routed and
//! are skipped by both scans; a missing deadline reads as "never urgent".

use courier_core::{Order, Point};
use courier_world::WorldQuery;

// ── SchedulerConfig ───────────────────────────────────────────────────────────

/// Tuning knobs for the delivery state machine.
#[derive(Copy, Clone, Debug)]
pub struct SchedulerConfig {
    /// Within this distance of the destination the agent stops steering and
    /// starts attempting delivery, in world units.
    pub arrival_radius: f32,

    /// Escalate when the tightest deadline minus travel time drops below this
    /// many seconds.
    pub urgency_margin_secs: f32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            arrival_radius:      300.0,
            urgency_margin_secs: 5.0,
        }
    }
}

// ── Candidate ─────────────────────────────────────────────────────────────────

/// An order picked by a selection scan, with its resolved destination.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate {
    pub order:       Order,
    pub destination: Point,
}

// ── Selection scans ───────────────────────────────────────────────────────────

/// The pending order whose house is nearest the agent, ties to the
/// earliest-issued order.  `None` if no pending order resolves to a known
/// house.
pub fn closest_order<W: WorldQuery + ?Sized>(world: &W) -> Option<Candidate> {
    let mut best: Option<(f32, Candidate)> = None;

    for &order in world.pending_orders() {
        let Some(destination) = world.house_location(order.house) else {
            continue;
        };
        let distance = world.distance_to(destination);
        if best.as_ref().is_none_or(|(d, _)| distance < *d) {
            best = Some((distance, Candidate { order, destination }));
        }
    }

    best.map(|(_, candidate)| candidate)
}

/// The pending order with the least remaining deadline, ties to the
/// earliest-issued order.  Returns the candidate and its deadline in seconds.
pub fn most_urgent_order<W: WorldQuery + ?Sized>(world: &W) -> Option<(Candidate, f32)> {
    let mut best: Option<(f32, Candidate)> = None;

    for &order in world.pending_orders() {
        let Some(destination) = world.house_location(order.house) else {
            continue;
        };
        let deadline = world.house_deadline(order.house).unwrap_or(f32::INFINITY);
        if best.as_ref().is_none_or(|(d, _)| deadline < *d) {
            best = Some((deadline, Candidate { order, destination }));
        }
    }

    best.map(|(deadline, candidate)| (candidate, deadline))
}
