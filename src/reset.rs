//! Arm/commit state for the destructive board wipe.
//!
//! The first reset request arms the confirmation and hands out an epoch; the
//! host schedules a disarm for that epoch. A second request while armed
//! commits. A disarm carrying an old epoch is stale and ignored, so a timer
//! that slips past cancellation can never disarm a newer arm cycle.

#[cfg(test)]
#[path = "reset_test.rs"]
mod reset_test;

/// Identifies one arm cycle.
pub type Epoch = u64;

/// Whether the board is waiting for a confirming second reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetState {
    #[default]
    Idle,
    Armed {
        epoch: Epoch,
    },
}

/// Result of a reset request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetRequest {
    /// Newly armed; a disarm should be scheduled for `epoch`.
    Armed { epoch: Epoch },
    /// Confirmed; the board should be wiped.
    Commit,
}

/// Tracks the confirmation state across arm cycles.
#[derive(Debug, Clone, Default)]
pub struct ResetGuard {
    state: ResetState,
    next_epoch: Epoch,
}

impl ResetGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm when idle, commit when armed. Committing returns to idle.
    pub fn request(&mut self) -> ResetRequest {
        match self.state {
            ResetState::Idle => {
                let epoch = self.next_epoch;
                self.next_epoch = self.next_epoch.wrapping_add(1);
                self.state = ResetState::Armed { epoch };
                ResetRequest::Armed { epoch }
            }
            ResetState::Armed { .. } => {
                self.state = ResetState::Idle;
                ResetRequest::Commit
            }
        }
    }

    /// Timer fired for `epoch`. Returns `true` if that disarmed the current cycle.
    pub fn expire(&mut self, epoch: Epoch) -> bool {
        if self.state == (ResetState::Armed { epoch }) {
            self.state = ResetState::Idle;
            true
        } else {
            false
        }
    }

    /// Disarm without committing. Returns `true` if it was armed.
    pub fn disarm(&mut self) -> bool {
        let was_armed = self.is_armed();
        self.state = ResetState::Idle;
        was_armed
    }

    #[must_use]
    pub fn state(&self) -> ResetState {
        self.state
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        matches!(self.state, ResetState::Armed { .. })
    }
}
