//! Submit control lifecycle.
//!
//! Pure state machine with no knowledge of how the button is drawn; the
//! view maps [`SubmitState`] to content through `view::button_view`.

use crate::model::ValidationResult;
use tracing::debug;

/// State of the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    /// Accepting activation (initial).
    #[default]
    Idle,
    /// A submission is in flight; further activation is refused.
    Submitting,
}

/// Result of [`SubmitStateMachine::attempt_submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; the machine moved to `Submitting`.
    Accepted,
    /// Validation failed; the machine stayed `Idle`.
    Rejected,
    /// A submission is already in flight; nothing changed.
    AlreadySubmitting,
}

/// Governs `Idle → Submitting → Idle`.
///
/// # Transitions
///
/// - `Idle --attempt_submit(valid)--> Submitting`
/// - `Idle --attempt_submit(invalid)--> Idle`
/// - `Submitting --reset | fail--> Idle`
///
/// There is no timeout; leaving `Submitting` requires an explicit signal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitStateMachine {
    state: SubmitState,
}

impl SubmitStateMachine {
    /// New machine in `Idle`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// True while a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// Whether the submit control currently accepts activation.
    pub fn can_activate(&self) -> bool {
        self.state == SubmitState::Idle
    }

    /// Try to enter `Submitting` with an already-computed validation result.
    pub fn attempt_submit(&mut self, result: &ValidationResult) -> SubmitOutcome {
        match self.state {
            SubmitState::Submitting => SubmitOutcome::AlreadySubmitting,
            SubmitState::Idle if result.is_valid() => {
                self.state = SubmitState::Submitting;
                debug!("Submit state: Idle -> Submitting");
                SubmitOutcome::Accepted
            }
            SubmitState::Idle => SubmitOutcome::Rejected,
        }
    }

    /// Return to `Idle` after the host re-renders the form (page-load signal).
    ///
    /// Returns true if the machine was `Submitting`.
    pub fn reset(&mut self) -> bool {
        let was_submitting = self.is_submitting();
        if was_submitting {
            debug!("Submit state: Submitting -> Idle (reset)");
        }
        self.state = SubmitState::Idle;
        was_submitting
    }

    /// Explicit failure callback for hosts that report a failed submission
    /// without reloading. Same transition as [`reset`](Self::reset).
    pub fn fail(&mut self) -> bool {
        let was_submitting = self.is_submitting();
        if was_submitting {
            debug!("Submit state: Submitting -> Idle (failed)");
        }
        self.state = SubmitState::Idle;
        was_submitting
    }
}
