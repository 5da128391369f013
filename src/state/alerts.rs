//! Transient notices: alerts present at startup and toasts raised later.
//!
//! Both kinds leave the screen through the same two-step dismissal: an exit
//! phase of fixed length, then removal. Whichever trigger starts the exit
//! first (timer or manual close) wins. The losing timer is cancelled, and a
//! second trigger on a notice that is already exiting or gone does nothing.

use crate::model::{AlertSpec, NotificationKind};
use crate::state::timers::{TimerId, TimerQueue};
use std::time::{Duration, Instant};
use tracing::debug;

// ===== Alerts =====

/// Identifier of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlertId(u64);

/// Visible lifecycle phase of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertPhase {
    /// Fully shown.
    Visible,
    /// Playing the exit animation; removal is scheduled.
    Exiting,
}

/// An alert on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    id: AlertId,
    kind: NotificationKind,
    message: String,
    closable: bool,
    phase: AlertPhase,
    auto_dismiss: Option<TimerId>,
}

impl Alert {
    /// Identifier.
    pub fn id(&self) -> AlertId {
        self.id
    }

    /// Severity.
    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// Text shown to the user.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether a manual close control is present.
    pub fn closable(&self) -> bool {
        self.closable
    }

    /// Current phase.
    pub fn phase(&self) -> AlertPhase {
        self.phase
    }
}

/// Delays governing alert dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertTimings {
    /// Time from initialization until automatic dismissal.
    pub dismiss_after: Duration,
    /// Length of the exit animation before removal.
    pub exit_duration: Duration,
}

impl Default for AlertTimings {
    fn default() -> Self {
        Self {
            dismiss_after: Duration::from_millis(5000),
            exit_duration: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AlertTask {
    AutoDismiss(AlertId),
    Remove(AlertId),
}

/// Timed and manual dismissal of the alerts present at initialization.
#[derive(Debug, Clone)]
pub struct AlertLifecycle {
    alerts: Vec<Alert>,
    timings: AlertTimings,
    timers: TimerQueue<AlertTask>,
    next_id: u64,
}

impl AlertLifecycle {
    /// Empty lifecycle with the given timings.
    pub fn new(timings: AlertTimings) -> Self {
        Self {
            alerts: Vec::new(),
            timings,
            timers: TimerQueue::new(),
            next_id: 0,
        }
    }

    /// Register alerts and schedule their automatic dismissal.
    pub fn init(&mut self, specs: Vec<AlertSpec>, now: Instant) -> Vec<AlertId> {
        specs
            .into_iter()
            .map(|spec| {
                let id = AlertId(self.next_id);
                self.next_id += 1;
                let timer =
                    self.timers
                        .schedule_after(now, self.timings.dismiss_after, AlertTask::AutoDismiss(id));
                debug!(alert = id.0, kind = ?spec.kind, "Alert shown");
                self.alerts.push(Alert {
                    id,
                    kind: spec.kind,
                    message: spec.message,
                    closable: spec.closable,
                    phase: AlertPhase::Visible,
                    auto_dismiss: Some(timer),
                });
                id
            })
            .collect()
    }

    /// Manual close of alert `id`.
    ///
    /// Starts the exit and cancels the pending auto-dismiss. Returns false
    /// (and does nothing) when the alert has no close control, is already
    /// exiting, or is gone.
    pub fn dismiss(&mut self, id: AlertId, now: Instant) -> bool {
        match self.get(id) {
            Some(alert) if alert.closable => self.begin_exit(id, now),
            _ => false,
        }
    }

    /// Fire due timers. Returns the alerts removed during this tick.
    pub fn tick(&mut self, now: Instant) -> Vec<AlertId> {
        let mut removed = Vec::new();
        loop {
            let due = self.timers.pop_due(now);
            if due.is_empty() {
                break;
            }
            for (at, task) in due {
                match task {
                    AlertTask::AutoDismiss(id) => {
                        if let Some(alert) = self.get_mut(id) {
                            alert.auto_dismiss = None;
                        }
                        self.begin_exit(id, at);
                    }
                    AlertTask::Remove(id) => {
                        if self.remove(id) {
                            removed.push(id);
                        }
                    }
                }
            }
        }
        removed
    }

    /// Alerts currently on screen, in initialization order.
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Look up an alert.
    pub fn get(&self, id: AlertId) -> Option<&Alert> {
        self.alerts.iter().find(|a| a.id == id)
    }

    /// Whether `id` is still on screen.
    pub fn contains(&self, id: AlertId) -> bool {
        self.get(id).is_some()
    }

    /// Number of alerts on screen.
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    /// True when no alert is on screen.
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Whether the auto-dismiss timer of `id` is still pending.
    pub fn auto_dismiss_pending(&self, id: AlertId) -> bool {
        self.get(id)
            .and_then(|a| a.auto_dismiss)
            .is_some_and(|t| self.timers.is_pending(t))
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    fn get_mut(&mut self, id: AlertId) -> Option<&mut Alert> {
        self.alerts.iter_mut().find(|a| a.id == id)
    }

    fn begin_exit(&mut self, id: AlertId, now: Instant) -> bool {
        let exit_duration = self.timings.exit_duration;
        let Some(alert) = self.get_mut(id) else {
            return false;
        };
        if alert.phase == AlertPhase::Exiting {
            return false;
        }
        alert.phase = AlertPhase::Exiting;
        let pending = alert.auto_dismiss.take();

        if let Some(timer) = pending {
            self.timers.cancel(timer);
        }
        self.timers
            .schedule_after(now, exit_duration, AlertTask::Remove(id));
        debug!(alert = id.0, "Alert exiting");
        true
    }

    fn remove(&mut self, id: AlertId) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|a| a.id != id);
        let removed = self.alerts.len() != before;
        if removed {
            debug!(alert = id.0, "Alert removed");
        }
        removed
    }
}

impl Default for AlertLifecycle {
    fn default() -> Self {
        Self::new(AlertTimings::default())
    }
}

// ===== Toasts =====

/// Identifier of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

/// Visible lifecycle phase of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Created, not yet slid in.
    Entering,
    /// Fully shown.
    Shown,
    /// Sliding out; removal is scheduled.
    Leaving,
}

/// A toast notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    id: ToastId,
    kind: NotificationKind,
    message: String,
    phase: ToastPhase,
    hide_timer: Option<TimerId>,
}

impl Toast {
    /// Identifier.
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Severity.
    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// Text shown to the user.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Current phase.
    pub fn phase(&self) -> ToastPhase {
        self.phase
    }
}

/// Fixed delays of the toast animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTimings {
    /// Delay between creation and the slide-in.
    pub show_delay: Duration,
    /// Length of the slide-out before removal.
    pub hide_duration: Duration,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            show_delay: Duration::from_millis(100),
            hide_duration: Duration::from_millis(300),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToastTask {
    Show(ToastId),
    Hide(ToastId),
    Remove(ToastId),
}

/// Creates and retires toast notifications.
#[derive(Debug, Clone)]
pub struct Notifier {
    toasts: Vec<Toast>,
    timings: ToastTimings,
    timers: TimerQueue<ToastTask>,
    next_id: u64,
}

impl Notifier {
    /// Empty notifier with the given animation timings.
    pub fn new(timings: ToastTimings) -> Self {
        Self {
            toasts: Vec::new(),
            timings,
            timers: TimerQueue::new(),
            next_id: 0,
        }
    }

    /// Raise a toast that hides itself `duration` after creation.
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        duration: Duration,
        now: Instant,
    ) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;

        self.timers
            .schedule_after(now, self.timings.show_delay, ToastTask::Show(id));
        let hide_timer = self
            .timers
            .schedule_after(now, duration, ToastTask::Hide(id));

        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
            phase: ToastPhase::Entering,
            hide_timer: Some(hide_timer),
        });
        debug!(toast = id.0, kind = ?kind, "Toast raised");
        id
    }

    /// Manual close. Returns false if the toast is already leaving or gone.
    pub fn close(&mut self, id: ToastId, now: Instant) -> bool {
        self.begin_hide(id, now)
    }

    /// Manual close of the most recently raised toast still on screen.
    pub fn close_newest(&mut self, now: Instant) -> Option<ToastId> {
        let id = self
            .toasts
            .iter()
            .rev()
            .find(|t| t.phase != ToastPhase::Leaving)
            .map(|t| t.id)?;
        self.begin_hide(id, now).then_some(id)
    }

    /// Fire due timers. Returns the toasts removed during this tick.
    pub fn tick(&mut self, now: Instant) -> Vec<ToastId> {
        let mut removed = Vec::new();
        loop {
            let due = self.timers.pop_due(now);
            if due.is_empty() {
                break;
            }
            for (at, task) in due {
                match task {
                    ToastTask::Show(id) => {
                        if let Some(toast) = self.get_mut(id) {
                            if toast.phase == ToastPhase::Entering {
                                toast.phase = ToastPhase::Shown;
                            }
                        }
                    }
                    ToastTask::Hide(id) => {
                        if let Some(toast) = self.get_mut(id) {
                            toast.hide_timer = None;
                        }
                        self.begin_hide(id, at);
                    }
                    ToastTask::Remove(id) => {
                        let before = self.toasts.len();
                        self.toasts.retain(|t| t.id != id);
                        if self.toasts.len() != before {
                            removed.push(id);
                        }
                    }
                }
            }
        }
        removed
    }

    /// Toasts on screen, oldest first.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Look up a toast.
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    fn get_mut(&mut self, id: ToastId) -> Option<&mut Toast> {
        self.toasts.iter_mut().find(|t| t.id == id)
    }

    fn begin_hide(&mut self, id: ToastId, now: Instant) -> bool {
        let hide_duration = self.timings.hide_duration;
        let Some(toast) = self.get_mut(id) else {
            return false;
        };
        if toast.phase == ToastPhase::Leaving {
            return false;
        }
        toast.phase = ToastPhase::Leaving;
        let pending = toast.hide_timer.take();

        if let Some(timer) = pending {
            self.timers.cancel(timer);
        }
        self.timers
            .schedule_after(now, hide_duration, ToastTask::Remove(id));
        true
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(ToastTimings::default())
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "alerts_tests.rs"]
mod tests;
