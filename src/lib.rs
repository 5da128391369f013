//! termlogin
//!
//! Terminal login form: field validation, error presentation, a guarded
//! submit state machine, a tab-navigation focus trap, keyboard shortcuts,
//! timed alerts and toast notifications.
//!
//! This is the library root. It follows the Pure Core / Impure Shell
//! architecture: `model` and `state` are pure and driven by an injected
//! clock, `view` owns the terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
