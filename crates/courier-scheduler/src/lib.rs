//! `courier-scheduler` — the delivery agent's decision core.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`state`]     | `DeliveryPhase`, `UrgencyLevel`, `AgentState`             |
//! | [`policy`]    | job-selection scans and `SchedulerConfig`                 |
//! | [`scheduler`] | `DeliveryScheduler` and its per-tick `advance`            |
//! | [`observer`]  | `SchedulerObserver` callback trait, `NoopObserver`        |
//!
//! # Design notes
//!
//! The scheduler is a two-state machine (Idle / EnRoute) driven once per tick
//! by a host loop.  Each `advance` reads the world through
//! [`WorldQuery`][courier_world::WorldQuery], makes one decision, and issues
//! commands through [`AgentActions`][courier_world::AgentActions] — it never
//! touches engine state directly and never blocks.  All waiting (for arrival,
//! for cargo, for delivery eligibility) is expressed as "leave state
//! unchanged, retry next tick".
//!
//! While idle the scheduler is a nearest-neighbor greedy picker, preempted by
//! an urgency escalation when the tightest deadline could be missed even
//! after travel time.  The `Committed` urgency level is a latch: once the
//! agent is within arrival radius of an urgent destination, later ticks may
//! not re-evaluate the choice until the delivery resolves, which prevents
//! thrashing between co-leading candidates.

pub mod observer;
pub mod policy;
pub mod scheduler;
pub mod state;


pub use observer::{NoopObserver, SchedulerObserver};
pub use policy::SchedulerConfig;
pub use scheduler::DeliveryScheduler;
pub use state::{AgentState, DeliveryPhase, UrgencyLevel};
