//! Form state machines (pure).
//!
//! All state transitions are pure functions of their inputs and an injected
//! `Instant`, testable without a terminal.

pub mod alerts;
pub mod error_presenter;
pub mod focus;
pub mod form;
pub mod login_state;
pub mod shortcuts;
pub mod submit;
pub mod timers;

// Re-export for convenience
pub use alerts::{
    Alert, AlertId, AlertLifecycle, AlertPhase, AlertTimings, Notifier, Toast, ToastId, ToastPhase,
    ToastTimings,
};
pub use error_presenter::ErrorPresenter;
pub use focus::{FocusTarget, FocusTrap, TabDirection};
pub use form::{ClearPhase, FormFields, TextInput};
pub use login_state::{Control, FormConfig, LoginState};
pub use shortcuts::{FormAction, ShortcutRouter};
pub use submit::{SubmitOutcome, SubmitState, SubmitStateMachine};
pub use timers::{TimerId, TimerQueue};
