//! Credential pair submitted by the login form.

use serde::Serialize;
use std::fmt;

/// One of the two user-editable fields on the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// The username input.
    Username,
    /// The password input.
    Password,
}

impl Field {
    /// Both fields, in display order.
    pub const ALL: [Field; 2] = [Field::Username, Field::Password];

    /// Label shown above the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Username => "Username",
            Field::Password => "Password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Username => f.write_str("username"),
            Field::Password => f.write_str("password"),
        }
    }
}

/// Username/password pair built fresh from the field buffers on every
/// submit attempt. Never persisted.
///
/// `Debug` redacts the password so credentials can appear in tracing
/// output without leaking the secret.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    /// Raw username as typed (validation trims, the value does not).
    pub username: String,
    /// Raw password as typed.
    pub password: String,
}

impl Credentials {
    /// Build a credential pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Raw value of one field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Password => &self.password,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
