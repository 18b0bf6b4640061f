use std::fmt;

use crate::bootstrap::BootstrapState;
use crate::input::TouchPhase;

/// Errors surfaced by the shim.
///
/// Input handling itself never fails outward: dispatch problems inside a
/// listener are logged and swallowed so the platform event loop is never
/// disturbed. Everything here is reported from `attach()` or the sequencer.
#[derive(Debug, Clone, PartialEq)]
pub enum ShimError {
    /// No global `window` (not running in a browser main thread).
    NoWindow,
    /// The window has no `document`.
    NoDocument,
    /// The platform refused a listener registration.
    Listener { phase: TouchPhase, message: String },
    /// `attach()` was called on a bridge that is already attached.
    AlreadyAttached,
    /// A bootstrap state change that does not move strictly forward.
    InvalidTransition { from: BootstrapState, to: BootstrapState },
    /// The external module's readiness signal failed.
    Readiness(String),
    /// The platform failed to dispatch a synthetic pointer event.
    Dispatch(String),
}

impl fmt::Display for ShimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShimError::NoWindow => write!(f, "no global window exists"),
            ShimError::NoDocument => write!(f, "window has no document"),
            ShimError::Listener { phase, message } => {
                write!(f, "failed to register {} listener: {message}", phase.event_type())
            }
            ShimError::AlreadyAttached => write!(f, "input bridge is already attached"),
            ShimError::InvalidTransition { from, to } => {
                write!(f, "invalid bootstrap transition {from:?} -> {to:?}")
            }
            ShimError::Readiness(msg) => write!(f, "module initialization failed: {msg}"),
            ShimError::Dispatch(msg) => write!(f, "synthetic pointer dispatch failed: {msg}"),
        }
    }
}

impl std::error::Error for ShimError {}
