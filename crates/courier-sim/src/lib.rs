//! `courier-sim` — an in-process host for the delivery scheduler.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`world`]   | `SimWorld` — in-memory implementation of both facade traits  |
//! | [`spawner`] | `OrderSpawner` — deterministic random order stream           |
//! | [`sim`]     | `Sim`, `SimConfig` — the tick loop                           |
//! | [`builder`] | `SimBuilder` — validated construction                        |
//! | [`observer`]| `SimObserver` — tick/spawn/expiry hooks                      |
//! | [`error`]   | `SimError`, `SimResult<T>`                                   |
//!
//! # Tick loop
//!
//! Each tick runs three phases in a fixed order:
//!
//! 1. **Spawn**: the order spawner may issue a new order and arm its house
//!    deadline.
//! 2. **Decide**: [`DeliveryScheduler::advance`][courier_scheduler::DeliveryScheduler]
//!    reads the world and issues at most one command.
//! 3. **Step**: the world integrates movement at `max_speed`, decays house
//!    deadlines by `dt_secs`, and expires spoiled orders.
//!
//! Everything is single-threaded and deterministic for a given seed.

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod spawner;
pub mod world;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::SimObserver;
pub use sim::{Sim, SimConfig};
pub use spawner::OrderSpawner;
pub use world::SimWorld;
