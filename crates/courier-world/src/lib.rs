//! `courier-world` — the seam between the delivery scheduler and its host.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                       |
//! |------------|----------------------------------------------------------------|
//! | [`query`]  | `WorldQuery` — read-only per-tick snapshot accessors           |
//! | [`action`] | `AgentActions` — side-effecting movement/pickup/delivery calls |
//! | [`houses`] | `HouseTable` — `HouseId` → `Point` lookup                      |
//! | [`loader`] | CSV house-table loader                                         |
//! | [`error`]  | `WorldError`, `WorldResult<T>`                                 |
//!
//! # Design notes
//!
//! The scheduler never touches engine state directly.  Each tick it reads the
//! world through [`WorldQuery`] and issues at most one command through
//! [`AgentActions`].  Hosts (a game engine adapter, the in-process driver in
//! `courier-sim`, or a test mock) implement both traits; the scheduler stays
//! independently testable without a live simulation.
//!
//! Pickup and delivery return plain `bool`s rather than `Result`s: "not yet
//! close enough" is an expected outcome the scheduler retries next tick, not
//! an error.

pub mod action;
pub mod error;
pub mod houses;
pub mod loader;
pub mod query;

#[cfg(test)]
mod tests;

pub use action::AgentActions;
pub use error::{WorldError, WorldResult};
pub use houses::HouseTable;
pub use loader::{load_houses_csv, load_houses_reader};
pub use query::WorldQuery;
