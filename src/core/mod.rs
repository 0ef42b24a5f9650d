//! Core data types for options-flow
//!
//! Defines fundamental types:
//! - OptionContract: Strike, expiry, type (call/put), volume, open interest
//! - ChainSnapshot: One ticker's full chain at a point in time
//! - FlowError: Error taxonomy for the crate

pub mod chain;
pub mod contract;
pub mod error;

pub use chain::*;
pub use contract::*;
pub use error::*;
