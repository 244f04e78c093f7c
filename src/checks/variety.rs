//! Character variety check - uppercase, lowercase, digits, special chars.
//!
//! Classification is ASCII-only: anything outside ASCII letters and digits,
//! including whitespace and non-ASCII code points, counts as special.

use secrecy::{ExposeSecret, SecretString};

/// Which character classes appear in the password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterClasses {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub special: bool,
}

/// Detects the character classes present in the password.
pub fn character_classes(password: &SecretString) -> CharacterClasses {
    let pwd = password.expose_secret();
    CharacterClasses {
        uppercase: pwd.chars().any(|c| c.is_ascii_uppercase()),
        lowercase: pwd.chars().any(|c| c.is_ascii_lowercase()),
        digit: pwd.chars().any(|c| c.is_ascii_digit()),
        special: pwd.chars().any(|c| !c.is_ascii_alphanumeric()),
    }
}
