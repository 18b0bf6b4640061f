//! Startup sequencing.
//!
//! Input normalization is registered first, then the external module is
//! awaited and started exactly once.

mod module;
#[cfg(test)]
mod ready;
mod sequencer;
mod state;
mod watchdog;

pub use module::ExternalModule;
#[cfg(test)]
pub(crate) use ready::{ready_signal, ReadySignal, ReadyTrigger};
pub use sequencer::{Sequencer, Session};
pub use state::BootstrapState;
#[cfg(feature = "web")]
pub use watchdog::TimerDelay;
pub use watchdog::{Delay, NoDelay};
