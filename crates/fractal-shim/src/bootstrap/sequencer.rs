use std::time::Duration;

use crate::config::ShimConfig;
use crate::error::ShimError;
use crate::input::{EventRoot, InputBridge};

use super::module::ExternalModule;
use super::state::BootstrapState;
use super::watchdog::{await_with_watchdog, Delay, NoDelay};

/// Brings the external module online after input normalization is active.
///
/// `run` consumes the sequencer, so the entry point cannot be reached twice.
pub struct Sequencer<R: EventRoot, M: ExternalModule, D: Delay = NoDelay> {
    bridge: InputBridge<R>,
    module: M,
    delay: D,
    ready_timeout: Option<Duration>,
}

impl<R: EventRoot, M: ExternalModule> Sequencer<R, M, NoDelay> {
    /// Creates a sequencer without a watchdog timer; use
    /// [`with_delay`](Self::with_delay) to supply one.
    pub fn new(root: R, module: M, config: &ShimConfig) -> Self {
        Self {
            bridge: InputBridge::with_capture(root, config.capture),
            module,
            delay: NoDelay,
            ready_timeout: config.ready_timeout,
        }
    }
}

impl<R: EventRoot, M: ExternalModule, D: Delay> Sequencer<R, M, D> {
    /// Replaces the timer driving the readiness watchdog.
    pub fn with_delay<D2: Delay>(self, delay: D2) -> Sequencer<R, M, D2> {
        Sequencer {
            bridge: self.bridge,
            module: self.module,
            delay,
            ready_timeout: self.ready_timeout,
        }
    }

    /// The deadline the watchdog will actually enforce, if any.
    pub fn watchdog_timeout(&self) -> Option<Duration> {
        self.ready_timeout.filter(|_| self.delay.elapses())
    }

    /// Registers input listeners, awaits module readiness, then starts the module.
    ///
    /// Waits indefinitely if readiness never resolves. A readiness error is
    /// returned unchanged and the module is never started; there is no retry.
    /// The listeners stay registered either way, so touch input remains
    /// normalized for the rest of the page.
    pub async fn run(self) -> Result<Session<R, M>, ShimError> {
        let mut state = BootstrapState::NotStarted;
        let timeout = self.watchdog_timeout();
        if timeout.is_none() && self.ready_timeout.is_some() {
            log::debug!("ready timeout configured without a timer; watchdog disarmed");
        }
        let Self { mut bridge, module, delay, .. } = self;

        bridge.attach()?;
        state.advance(BootstrapState::ListenersRegistered)?;

        state.advance(BootstrapState::AwaitingModule)?;
        log::info!("input normalization active; awaiting renderer module");

        let (ready, stalled) = await_with_watchdog(module.ready(), &delay, timeout).await;

        if let Err(e) = ready {
            log::error!("{e}");
            // No teardown path: the listeners outlive the failed start.
            std::mem::forget(bridge);
            return Err(e);
        }

        module.start();
        state.advance(BootstrapState::Running)?;
        log::info!("renderer module started");

        Ok(Session {
            bridge,
            module,
            state,
            stalled,
        })
    }
}

/// A started module together with the input bridge feeding it.
///
/// Dropping the session drops the platform listener handles; hosts keep it
/// for the lifetime of the page.
pub struct Session<R: EventRoot, M> {
    bridge: InputBridge<R>,
    module: M,
    state: BootstrapState,
    stalled: bool,
}

impl<R: EventRoot, M> Session<R, M> {
    /// State the sequencer reached; [`BootstrapState::Running`] for any
    /// session `run` hands out.
    pub fn state(&self) -> BootstrapState {
        self.state
    }

    pub fn module(&self) -> &M {
        &self.module
    }

    pub fn bridge(&self) -> &InputBridge<R> {
        &self.bridge
    }

    /// Whether readiness took longer than the configured timeout.
    pub fn stalled(&self) -> bool {
        self.stalled
    }

    /// Removes the touch listeners.
    pub fn detach_input(&mut self) {
        self.bridge.detach();
    }
}
