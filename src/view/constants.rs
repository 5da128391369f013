//! Layout dimension constants for the login screen.

/// Width of the login card including its border.
pub const CARD_WIDTH: u16 = 46;

/// Height of a bordered text input.
pub const INPUT_HEIGHT: u16 = 3;

/// Height of the line under an input reserved for its error message.
pub const ERROR_LINE_HEIGHT: u16 = 1;

/// Height of the visibility toggle row.
pub const TOGGLE_HEIGHT: u16 = 1;

/// Height of the submit button.
pub const BUTTON_HEIGHT: u16 = 3;

/// Height of the footer line.
pub const FOOTER_HEIGHT: u16 = 1;

/// Height of the key hint block under the footer.
pub const HINTS_HEIGHT: u16 = 3;

/// Height of one alert row.
pub const ALERT_HEIGHT: u16 = 1;

/// Width of a toast in the top-right corner.
pub const TOAST_WIDTH: u16 = 36;

/// Height of a toast including its border.
pub const TOAST_HEIGHT: u16 = 3;

/// Horizontal shift of the error highlight while a field shakes.
pub const SHAKE_OFFSET: u16 = 1;
