//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod login_card;
mod notices;
mod styles;
mod submit_button;

pub use login_card::{card_height, render_login_screen, screen_areas, visible_window};
pub use notices::{render_toasts, toast_area, AlertStrip};
pub use styles::{ColorConfig, FormStyles};
pub use submit_button::{
    button_view, ButtonContent, SubmitButton, SubmitButtonView, BUSY_LABEL, SUBMIT_LABEL,
};

use crate::model::Credentials;
use crate::state::{Control, LoginState, ShortcutRouter};
use chrono::Datelike;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Upper bound on how long the event loop blocks waiting for input.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// How the login screen ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user submitted valid credentials.
    Submitted(Credentials),
    /// The user left without submitting.
    Cancelled,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct LoginApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: LoginState,
    router: ShortcutRouter,
    styles: FormStyles,
    year: i32,
}

impl LoginApp<CrosstermBackend<Stdout>> {
    /// Create and initialize the login screen on the real terminal.
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        state: LoginState,
        router: ShortcutRouter,
        styles: FormStyles,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        let year = chrono::Local::now().year();

        Ok(Self::with_terminal(terminal, state, router, styles, year))
    }

    /// Run the main event loop until the form is submitted or abandoned.
    ///
    /// Blocks on input for at most [`TICK_INTERVAL`], or less when a timer
    /// falls due sooner, so animations and auto-dismissals fire on time.
    pub fn run(&mut self) -> Result<Outcome, TuiError> {
        self.draw()?;

        loop {
            let now = Instant::now();
            let timeout = self
                .state
                .next_deadline()
                .map(|deadline| deadline.saturating_duration_since(now))
                .unwrap_or(TICK_INTERVAL)
                .min(TICK_INTERVAL);

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => {
                        let outcome = self.handle_key(key, Instant::now());
                        // Draw once more so the busy button is on screen
                        // before control returns to the caller.
                        self.draw()?;
                        if let Some(outcome) = outcome {
                            return Ok(outcome);
                        }
                    }
                    Event::Resize(..) => self.draw()?,
                    _ => {}
                }
            }

            if self.tick(Instant::now()) {
                self.draw()?;
            }
        }
    }
}

impl<B> LoginApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the app around an existing terminal.
    ///
    /// Used with `TestBackend` to drive the screen without a real terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        state: LoginState,
        router: ShortcutRouter,
        styles: FormStyles,
        year: i32,
    ) -> Self {
        Self {
            terminal,
            state,
            router,
            styles,
            year,
        }
    }

    /// Handle one key event. Returns the outcome once the screen is done.
    ///
    /// Only key presses count; release and repeat events from terminals
    /// with enhanced keyboard reporting are ignored.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<Outcome> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match self.state.handle_key(&self.router, key, now) {
            Control::Continue => None,
            Control::Submit(credentials) => {
                info!("Login submitted");
                Some(Outcome::Submitted(credentials))
            }
            Control::Quit => {
                info!("Login cancelled");
                Some(Outcome::Cancelled)
            }
        }
    }

    /// Fire due timers. Returns true if anything was due, meaning the
    /// screen needs a redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = self
            .state
            .next_deadline()
            .is_some_and(|deadline| deadline <= now);
        if due {
            self.state.tick(now);
            debug!("Timers fired");
        }
        due
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.state;
        let styles = &self.styles;
        let year = self.year;
        self.terminal
            .draw(|frame| render_login_screen(frame, state, styles, year))?;
        Ok(())
    }

    /// Form state.
    pub fn state(&self) -> &LoginState {
        &self.state
    }

    /// Mutable form state, for host callbacks such as `reload` or `notify`.
    pub fn state_mut(&mut self) -> &mut LoginState {
        &mut self.state
    }

    /// Terminal, for buffer inspection with `TestBackend`.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Show the login screen on the real terminal and wait for the outcome.
///
/// The terminal is restored whether or not the event loop succeeds.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(
    state: LoginState,
    router: ShortcutRouter,
    styles: FormStyles,
) -> Result<Outcome, TuiError> {
    let mut app = match LoginApp::new(state, router, styles) {
        Ok(app) => app,
        Err(e) => {
            // Raw mode may already be on if the alternate screen failed.
            let _ = restore_terminal();
            return Err(e);
        }
    };

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
pub fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
