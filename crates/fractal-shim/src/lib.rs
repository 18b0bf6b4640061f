//! Fractal renderer bootstrap shim.
//!
//! Sits between the browser and the renderer module: touch input is
//! re-emitted as mouse-shaped pointer events, and the module is started only
//! after that translation is in place.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`input`] | touch/pointer types, mapping table, `InputBridge`, platform adapters |
//! | [`bootstrap`] | `Sequencer`, `BootstrapState`, readiness signal, watchdog |
//! | [`config`] | `ShimConfig` |
//! | [`logging`] | logger initialization |

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;

#[cfg(test)]
mod testing;

pub use config::ShimConfig;
pub use error::ShimError;
