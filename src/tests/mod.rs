//! Internal test modules - whitebox tests with crate access
//!
//! Acceptance tests drive the full app through `LoginHarness` on a
//! `TestBackend`, with a manual clock.

mod acceptance_keyboard;
