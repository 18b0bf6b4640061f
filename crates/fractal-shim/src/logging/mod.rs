//! Logging utilities.
//!
//! Centralizes logger initialization behind the standard `log` facade:
//! `env_logger` on native targets, the browser console on wasm32.

mod init;

pub use init::{init_logging, LoggingConfig};
