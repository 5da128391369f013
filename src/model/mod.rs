//! Domain model types (pure).
//!
//! All types in this module are pure data and pure functions.

pub mod credentials;
pub mod error;
pub mod key_action;
pub mod notification;
pub mod validation;

// Re-export for convenience
pub use credentials::{Credentials, Field};
pub use error::AppError;
pub use key_action::KeyAction;
pub use notification::{AlertSpec, NotificationKind, UnknownKind};
pub use validation::{
    validate, ValidationError, ValidationResult, ValidationRule, MIN_PASSWORD_LEN,
    MIN_USERNAME_LEN,
};
