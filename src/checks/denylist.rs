//! Denylist check - flags passwords absent from the common-password list.

use crate::denylist::is_common_password;
use secrecy::{ExposeSecret, SecretString};

/// Returns `true` when the password is NOT on the common-password denylist.
pub fn not_common_check(password: &SecretString) -> bool {
    !is_common_password(password.expose_secret())
}
