//! Platform adapters.
//!
//! Each adapter implements the `EventRoot` seam for one host environment.

#[cfg(feature = "web")]
pub mod web;
