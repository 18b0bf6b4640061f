use crate::error::ShimError;

/// Startup progress. Moves strictly forward and ends at `Running`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd)]
pub enum BootstrapState {
    #[default]
    NotStarted,
    ListenersRegistered,
    AwaitingModule,
    Running,
}

impl BootstrapState {
    /// The single state reachable from `self`, if any.
    pub const fn successor(self) -> Option<BootstrapState> {
        match self {
            BootstrapState::NotStarted => Some(BootstrapState::ListenersRegistered),
            BootstrapState::ListenersRegistered => Some(BootstrapState::AwaitingModule),
            BootstrapState::AwaitingModule => Some(BootstrapState::Running),
            BootstrapState::Running => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, BootstrapState::Running)
    }

    /// Moves to `next`, which must be the immediate successor.
    pub fn advance(&mut self, next: BootstrapState) -> Result<(), ShimError> {
        if self.successor() != Some(next) {
            return Err(ShimError::InvalidTransition { from: *self, to: next });
        }
        log::debug!("bootstrap: {:?} -> {:?}", *self, next);
        *self = next;
        Ok(())
    }
}
