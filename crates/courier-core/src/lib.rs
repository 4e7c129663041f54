//! `courier-core` — foundational types for the `rust_courier` delivery scheduler.
//!
//! This crate is a dependency of every other `courier-*` crate.  It
//! intentionally has no `courier-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                  |
//! |-------------|-------------------------------------------|
//! | [`ids`]     | `OrderId`, `HouseId`                      |
//! | [`geo`]     | `Point`, Euclidean distance               |
//! | [`time`]    | `Tick`                                    |
//! | [`order`]   | `Order` value entity                      |
//! | [`rng`]     | `SimRng` (deterministic run-level RNG)    |
//! | [`error`]   | `CourierError`, `CourierResult`           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod geo;
pub mod ids;
pub mod order;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CourierError, CourierResult};
pub use geo::Point;
pub use ids::{HouseId, OrderId};
pub use order::Order;
pub use rng::SimRng;
pub use time::Tick;
