//! The `DeliveryScheduler` and its per-tick `advance`.

use courier_core::{Order, Point};
use courier_world::{AgentActions, WorldQuery};

use crate::policy::{self, SchedulerConfig};
use crate::{AgentState, DeliveryPhase, SchedulerObserver, UrgencyLevel};

/// Per-tick order assignment and delivery state machine for one agent.
///
/// The host driver calls [`advance`][Self::advance] once per tick with a host
/// implementing both facade traits: [`WorldQuery`] for snapshot reads and
/// [`AgentActions`] for commands.  Each call is synchronous and bounded — two
/// linear scans of the pending set at worst — and issues at most one movement
/// command plus at most one pickup/delivery attempt before returning.
///
/// A multi-agent fleet would hold one `DeliveryScheduler` per agent; nothing
/// here is shared.  Order claiming between agents is a host concern.
///
/// # Example
///
/// ```rust,ignore
/// let mut scheduler = DeliveryScheduler::new(SchedulerConfig::default());
/// loop {
///     scheduler.advance(&mut world, &mut NoopObserver);
///     world.step(dt_secs);
/// }
/// ```
#[derive(Debug, Default)]
pub struct DeliveryScheduler {
    pub config: SchedulerConfig,
    pub state:  AgentState,
}

impl DeliveryScheduler {
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            config,
            state: AgentState::new(),
        }
    }

    /// Run one decision cycle against the current world snapshot.
    ///
    /// The host's timestep is not a parameter: every decision here reads the
    /// snapshot (distances, deadlines, cargo), so the driver alone owns time.
    /// The host must not mutate the pending set between the reads of a single
    /// call; all command side effects become observable on the next tick.
    pub fn advance<H, O>(&mut self, host: &mut H, observer: &mut O)
    where
        H: WorldQuery + AgentActions + ?Sized,
        O: SchedulerObserver + ?Sized,
    {
        match self.state.phase {
            DeliveryPhase::EnRoute { order, destination } => {
                self.tick_en_route(order, destination, host, observer);
            }
            DeliveryPhase::Idle => {
                self.tick_idle(host, observer);
            }
        }
    }

    // ── EnRoute ───────────────────────────────────────────────────────────

    fn tick_en_route<H, O>(
        &mut self,
        order:       Order,
        destination: Point,
        host:        &mut H,
        observer:    &mut O,
    ) where
        H: WorldQuery + AgentActions + ?Sized,
        O: SchedulerObserver + ?Sized,
    {
        let distance = host.distance_to(destination);

        // Not yet arrived: movement is the only action taken while far.
        if distance > self.config.arrival_radius {
            host.move_toward(destination);
            return;
        }

        // Arrival proximity locks in a flagged urgency so a later selection
        // cycle cannot undo it before the delivery completes.
        if self.state.urgency == UrgencyLevel::Flagged {
            self.state.urgency = UrgencyLevel::Committed;
        }

        if host.try_deliver(order) {
            self.state.phase = DeliveryPhase::Idle;
            self.state.urgency = UrgencyLevel::Normal;

            // Another pending order on the same house shares this approach
            // point; keep the commitment latch through the next selection
            // cycle so the stacked delivery is not re-escalated away.
            let colocated = host
                .pending_orders()
                .iter()
                .any(|o| o.house == order.house && o.id != order.id);
            if colocated {
                self.state.urgency = UrgencyLevel::Committed;
            }

            observer.on_delivered(order, distance);
        } else {
            // Not precisely positioned yet: keep steering, retry next tick.
            observer.on_delivery_retry(order, distance);
            host.move_toward(destination);
        }
    }

    // ── Idle: job selection ───────────────────────────────────────────────

    fn tick_idle<H, O>(&mut self, host: &mut H, observer: &mut O)
    where
        H: WorldQuery + AgentActions + ?Sized,
        O: SchedulerObserver + ?Sized,
    {
        if host.pending_orders().is_empty() {
            return;
        }

        // No pending order resolves to a known house — nothing routable yet.
        let Some(closest) = policy::closest_order(&*host) else {
            return;
        };

        let mut selected = closest;

        // Escalation: preempt nearest-neighbor greed when the tightest
        // deadline would be missed even after accounting for travel time.
        // A committed urgency suppresses re-evaluation entirely.
        if self.state.urgency != UrgencyLevel::Committed {
            if let Some((urgent, deadline)) = policy::most_urgent_order(&*host) {
                let eta = host.distance_to(urgent.destination) / host.max_speed();
                let slack = deadline - eta;
                if slack < self.config.urgency_margin_secs {
                    self.state.urgency = UrgencyLevel::Flagged;
                    selected = urgent;
                    observer.on_escalated(urgent.order, slack);
                }
            }
        }

        // Cargo gate: without cargo the transition cannot commit.  A failed
        // pickup is a blocking precondition, retried next tick; any urgency
        // flagged above stays flagged across the retry.
        if host.cargo_count() == 0 && !host.try_pickup_cargo() {
            observer.on_pickup_blocked();
            return;
        }

        self.state.phase = DeliveryPhase::EnRoute {
            order:       selected.order,
            destination: selected.destination,
        };
        host.move_toward(selected.destination);
        observer.on_order_taken(selected.order, self.state.urgency);
    }
}
