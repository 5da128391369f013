//! Root state of the login form.
//!
//! `LoginState` composes the validator, error presenter, submit state
//! machine, focus trap, alerts and toasts. Every transition takes the
//! current `Instant` as an argument, so the whole form can be driven
//! deterministically from tests without a terminal.

use crate::model::{validate, AlertSpec, Credentials, Field, NotificationKind};
use crate::state::alerts::{
    AlertId, AlertLifecycle, AlertTimings, Notifier, ToastId, ToastTimings,
};
use crate::state::error_presenter::ErrorPresenter;
use crate::state::focus::{FocusTarget, FocusTrap, TabDirection};
use crate::state::form::{ClearPhase, FormFields};
use crate::state::shortcuts::{FormAction, ShortcutRouter};
use crate::state::submit::{SubmitOutcome, SubmitState, SubmitStateMachine};
use crate::state::timers::{TimerId, TimerQueue};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Length of the error highlight on a field that failed validation.
pub const SHAKE_DURATION: Duration = Duration::from_millis(500);

/// Length of each half of the clear-form animation.
pub const CLEAR_FADE_DURATION: Duration = Duration::from_millis(300);

/// Delay before the username field takes focus after a reload with alerts.
pub const RELOAD_FOCUS_DELAY: Duration = Duration::from_millis(500);

/// Host-provided description of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Whether the password visibility toggle exists.
    pub show_visibility_toggle: bool,
    /// Alert dismissal delays.
    pub alert_timings: AlertTimings,
    /// Toast animation delays.
    pub toast_timings: ToastTimings,
    /// Default toast lifetime.
    pub toast_duration: Duration,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            show_visibility_toggle: true,
            alert_timings: AlertTimings::default(),
            toast_timings: ToastTimings::default(),
            toast_duration: Duration::from_millis(3000),
        }
    }
}

/// What the event loop should do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Hand the credentials to the submission collaborator.
    Submit(Credentials),
    /// Leave without submitting.
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormTask {
    EndShake(Field),
    ClearMidpoint,
    ClearDone,
    FocusUsername,
}

/// Root state of the login form.
#[derive(Debug, Clone)]
pub struct LoginState {
    form: FormFields,
    errors: ErrorPresenter,
    submit: SubmitStateMachine,
    trap: FocusTrap,
    /// Focused control inside the card; `None` when focus is outside it
    /// (on an alert, or nowhere).
    focus: Option<FocusTarget>,
    selected_alert: Option<AlertId>,
    alerts: AlertLifecycle,
    toasts: Notifier,
    timers: TimerQueue<FormTask>,
    shaking: HashMap<Field, TimerId>,
    clear_timer: Option<TimerId>,
    show_visibility_toggle: bool,
    toast_duration: Duration,
}

impl LoginState {
    /// Build the form, register startup alerts and run the page-load signal.
    pub fn new(config: FormConfig, fields: FormFields, alerts: Vec<AlertSpec>, now: Instant) -> Self {
        let mut alert_lifecycle = AlertLifecycle::new(config.alert_timings);
        alert_lifecycle.init(alerts, now);

        let mut state = Self {
            form: fields,
            errors: ErrorPresenter::new(),
            submit: SubmitStateMachine::new(),
            trap: FocusTrap::for_login_card(config.show_visibility_toggle),
            focus: Some(FocusTarget::Username),
            selected_alert: None,
            alerts: alert_lifecycle,
            toasts: Notifier::new(config.toast_timings),
            timers: TimerQueue::new(),
            shaking: HashMap::new(),
            clear_timer: None,
            show_visibility_toggle: config.show_visibility_toggle,
            toast_duration: config.toast_duration,
        };
        state.reload(now);
        state
    }

    // ===== Event entry points =====

    /// Route a key event through the shortcut router, falling back to text
    /// editing on the focused control.
    pub fn handle_key(&mut self, router: &ShortcutRouter, key: KeyEvent, now: Instant) -> Control {
        match router.route(key, self.focus) {
            Some(action) => self.apply(action, now),
            None => self.edit(key, now),
        }
    }

    /// Perform a routed form action.
    pub fn apply(&mut self, action: FormAction, now: Instant) -> Control {
        match action {
            FormAction::Submit => return self.activate_submit(now),
            FormAction::Quit => return Control::Quit,
            FormAction::ClearForm => self.clear_form(now),
            FormAction::FocusUsername => self.focus_on(FocusTarget::Username),
            FormAction::Navigate(direction) => self.navigate(direction),
            FormAction::ToggleVisibility => {
                self.toggle_visibility();
            }
            FormAction::SelectAlert(direction) => self.select_alert(direction),
            FormAction::DismissAlert => {
                self.dismiss_selected_alert(now);
            }
            FormAction::DismissToast => {
                self.toasts.close_newest(now);
            }
        }
        Control::Continue
    }

    /// Fire every timer due at `now`.
    pub fn tick(&mut self, now: Instant) {
        loop {
            let due = self.timers.pop_due(now);
            if due.is_empty() {
                break;
            }
            for (at, task) in due {
                self.run_task(task, at);
            }
        }

        let removed = self.alerts.tick(now);
        if self
            .selected_alert
            .is_some_and(|selected| removed.contains(&selected))
        {
            self.selected_alert = None;
        }

        self.toasts.tick(now);
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.timers.next_deadline(),
            self.alerts.next_deadline(),
            self.toasts.next_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    // ===== Submission =====

    /// Activate the submit control.
    ///
    /// Validation runs to completion over both fields before any error is
    /// presented or any state changes. A disabled control ignores activation.
    pub fn activate_submit(&mut self, now: Instant) -> Control {
        if !self.submit.can_activate() {
            debug!("Submit control disabled; activation ignored");
            return Control::Continue;
        }

        let credentials = self.form.credentials();
        let result = validate(&credentials);

        self.errors.clear();
        match self.submit.attempt_submit(&result) {
            SubmitOutcome::Accepted => {
                info!("Credentials passed validation; handing off");
                Control::Submit(credentials)
            }
            SubmitOutcome::Rejected => {
                self.errors.present(&result);
                for error in result.errors() {
                    self.start_shake(error.field, now);
                }
                info!(
                    errors = result.errors().len(),
                    "Submission blocked by validation"
                );
                Control::Continue
            }
            SubmitOutcome::AlreadySubmitting => Control::Continue,
        }
    }

    /// Page-load signal: the host re-rendered the form.
    ///
    /// Returns the submit control to `Idle`. When alerts are on screen the
    /// username field takes focus shortly after, ready for a retry.
    pub fn reload(&mut self, now: Instant) {
        if self.submit.reset() {
            info!("Form reloaded; submit control re-enabled");
        }
        if !self.alerts.is_empty() {
            self.timers
                .schedule_after(now, RELOAD_FOCUS_DELAY, FormTask::FocusUsername);
        }
    }

    /// Explicit failure callback for hosts that do not reload after a
    /// rejected submission.
    pub fn submission_failed(&mut self) {
        if self.submit.fail() {
            info!("Submission failed; submit control re-enabled");
        }
    }

    // ===== Form actions =====

    /// Reset both fields, clear every error marking and run the
    /// fade-out / empty / fade-in sequence.
    pub fn clear_form(&mut self, now: Instant) {
        self.form.reset();
        self.errors.clear();

        if let Some(timer) = self.clear_timer.take() {
            self.timers.cancel(timer);
        }
        self.form.set_clear_phase(Some(ClearPhase::FadingOut));
        self.clear_timer = Some(self.timers.schedule_after(
            now,
            CLEAR_FADE_DURATION,
            FormTask::ClearMidpoint,
        ));
        debug!("Form cleared");
    }

    /// Show or hide the password and return focus to the password field.
    ///
    /// Returns false when the host has no visibility toggle.
    pub fn toggle_visibility(&mut self) -> bool {
        if !self.show_visibility_toggle {
            return false;
        }
        let visible = self.form.toggle_password_visibility();
        debug!(visible, "Password visibility toggled");
        self.focus_on(FocusTarget::Password);
        true
    }

    /// Move focus to `target`.
    pub fn focus_on(&mut self, target: FocusTarget) {
        if self.trap.contains(target) {
            self.focus = Some(target);
            self.selected_alert = None;
        }
    }

    /// Tab navigation, wrapping at the edges of the card.
    pub fn navigate(&mut self, direction: TabDirection) {
        if let Some(next) = self.trap.navigate(self.focus, direction) {
            self.focus = Some(next);
            self.selected_alert = None;
        }
    }

    /// Raise a toast. `None` uses the configured default lifetime.
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        duration: Option<Duration>,
        now: Instant,
    ) -> ToastId {
        self.toasts
            .notify(message, kind, duration.unwrap_or(self.toast_duration), now)
    }

    // ===== Alerts =====

    /// Move the alert selection. Selecting an alert takes focus out of the
    /// card.
    pub fn select_alert(&mut self, direction: TabDirection) {
        let ids: Vec<AlertId> = self.alerts.alerts().iter().map(|a| a.id()).collect();
        if ids.is_empty() {
            return;
        }

        let current = self
            .selected_alert
            .and_then(|selected| ids.iter().position(|id| *id == selected));
        let index = match (current, direction) {
            (None, TabDirection::Forward) => 0,
            (None, TabDirection::Backward) => ids.len() - 1,
            (Some(i), TabDirection::Forward) => (i + 1) % ids.len(),
            (Some(i), TabDirection::Backward) => (i + ids.len() - 1) % ids.len(),
        };

        self.selected_alert = Some(ids[index]);
        self.focus = None;
    }

    /// Manually close the selected alert.
    pub fn dismiss_selected_alert(&mut self, now: Instant) -> bool {
        match self.selected_alert {
            Some(id) => self.alerts.dismiss(id, now),
            None => false,
        }
    }

    // ===== Accessors =====

    /// Field buffers.
    pub fn form(&self) -> &FormFields {
        &self.form
    }

    /// Error markings.
    pub fn errors(&self) -> &ErrorPresenter {
        &self.errors
    }

    /// Submit control state.
    pub fn submit_state(&self) -> SubmitState {
        self.submit.state()
    }

    /// Focused control, `None` when focus is outside the card.
    pub fn focused(&self) -> Option<FocusTarget> {
        self.focus
    }

    /// Tab-navigation trap.
    pub fn trap(&self) -> &FocusTrap {
        &self.trap
    }

    /// Selected alert, if any.
    pub fn selected_alert(&self) -> Option<AlertId> {
        self.selected_alert
    }

    /// Alerts on screen.
    pub fn alerts(&self) -> &AlertLifecycle {
        &self.alerts
    }

    /// Toasts on screen.
    pub fn toasts(&self) -> &Notifier {
        &self.toasts
    }

    /// Whether the host renders the visibility toggle.
    pub fn has_visibility_toggle(&self) -> bool {
        self.show_visibility_toggle
    }

    /// Whether `field` is playing its error highlight.
    pub fn is_shaking(&self, field: Field) -> bool {
        self.shaking.contains_key(&field)
    }

    // ===== Internals =====

    fn edit(&mut self, key: KeyEvent, now: Instant) -> Control {
        let Some(target) = self.focus else {
            return Control::Continue;
        };

        let Some(field) = target.field() else {
            // Space activates a focused button.
            if key.code == KeyCode::Char(' ') && key.modifiers == KeyModifiers::NONE {
                return match target {
                    FocusTarget::Submit => self.activate_submit(now),
                    _ => {
                        self.toggle_visibility();
                        Control::Continue
                    }
                };
            }
            return Control::Continue;
        };

        if self.submit.is_submitting() {
            return Control::Continue;
        }

        let input = self.form.input_mut(field);
        let changed = match key.code {
            KeyCode::Char(ch) if types_text(key.modifiers) => {
                input.insert(ch);
                true
            }
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => {
                input.move_left();
                false
            }
            KeyCode::Right => {
                input.move_right();
                false
            }
            KeyCode::Home => {
                input.move_home();
                false
            }
            KeyCode::End => {
                input.move_end();
                false
            }
            _ => false,
        };

        if changed && self.errors.clear_field(field) {
            debug!(%field, "Error cleared on edit");
        }
        Control::Continue
    }

    fn start_shake(&mut self, field: Field, now: Instant) {
        if let Some(previous) = self.shaking.remove(&field) {
            self.timers.cancel(previous);
        }
        let timer = self
            .timers
            .schedule_after(now, SHAKE_DURATION, FormTask::EndShake(field));
        self.shaking.insert(field, timer);
    }

    fn run_task(&mut self, task: FormTask, at: Instant) {
        match task {
            FormTask::EndShake(field) => {
                self.shaking.remove(&field);
            }
            FormTask::ClearMidpoint => {
                self.form.reset();
                self.form.set_clear_phase(Some(ClearPhase::FadingIn));
                self.clear_timer = Some(self.timers.schedule_after(
                    at,
                    CLEAR_FADE_DURATION,
                    FormTask::ClearDone,
                ));
            }
            FormTask::ClearDone => {
                self.form.set_clear_phase(None);
                self.clear_timer = None;
            }
            FormTask::FocusUsername => self.focus_on(FocusTarget::Username),
        }
    }
}

/// Whether a character key with these modifiers inserts text.
///
/// Windows terminals report AltGr as Ctrl+Alt, so that pair types the
/// composed character. Any other Ctrl, Alt or Super chord does not.
fn types_text(modifiers: KeyModifiers) -> bool {
    let chord = modifiers.difference(KeyModifiers::SHIFT);
    chord.is_empty() || chord == KeyModifiers::CONTROL | KeyModifiers::ALT
}

// ===== Tests =====

#[cfg(test)]
#[path = "login_state_tests.rs"]
mod tests;
