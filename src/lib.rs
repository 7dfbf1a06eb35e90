//! Wind-tunnel force-balance data reduction.
//!
//! Turns a wind-off (static) and wind-on (dynamic) balance table into body-axis
//! and wind-axis force and moment coefficients.

pub mod balance;
pub mod config;
pub mod constants;
pub mod errors;
pub mod frames;
pub mod io;
pub mod logging;
pub mod models;
pub mod physics;
pub mod reduction;

pub use balance::BalanceType;
pub use config::{AircraftModel, RunConfig};
pub use errors::ReductionError;
pub use reduction::ReductionJob;
