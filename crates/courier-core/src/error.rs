//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `CourierError` via `From` impls, or keep them separate and wrap
//! `CourierError` as one variant.  Both patterns are acceptable; prefer
//! whichever keeps error sites clean.
//!
//! Note that the scheduler itself never returns an error: pickup and delivery
//! "failures" are expected boolean outcomes retried on the next tick.  These
//! variants exist for construction and loading paths only.

use thiserror::Error;

use crate::{HouseId, OrderId};

/// The top-level error type for `courier-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CourierError {
    #[error("house {0} not found")]
    HouseNotFound(HouseId),

    #[error("order {0} not found")]
    OrderNotFound(OrderId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `courier-*` crates.
pub type CourierResult<T> = Result<T, CourierError>;
