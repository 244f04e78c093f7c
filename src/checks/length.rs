//! Length check - minimum length and long-password bonus.

use secrecy::{ExposeSecret, SecretString};

/// Minimum length for the criterion to pass.
pub const MIN_LENGTH: usize = 8;

/// Length at which the extra score bonus applies.
pub const LONG_LENGTH: usize = 12;

/// Outcome of the length check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthCheck {
    /// Character count is at least [`MIN_LENGTH`].
    pub meets_minimum: bool,
    /// Character count is at least [`LONG_LENGTH`].
    pub is_long: bool,
}

/// Measures the password against both length thresholds.
///
/// Length is counted in characters, not bytes.
pub fn length_check(password: &SecretString) -> LengthCheck {
    let count = password.expose_secret().chars().count();
    LengthCheck {
        meets_minimum: count >= MIN_LENGTH,
        is_long: count >= LONG_LENGTH,
    }
}
