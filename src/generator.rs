//! Password generator - random suggestions drawn from a fixed alphabet.

use rand::Rng;
use secrecy::SecretString;
use thiserror::Error;

/// Characters a generated password is drawn from: ASCII letters, digits and
/// ten symbols.
pub const ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()";

/// Suggested length for generated passwords.
pub const DEFAULT_LENGTH: usize = 12;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Generated password length must be at least 1, got {0}")]
    InvalidLength(usize),
}

/// Generates a random password of exactly `length` characters.
///
/// Every position is sampled independently and uniformly from [`ALPHABET`].
/// There is no per-class guarantee: a result can miss a character class, so
/// callers must not assume a generated password always evaluates to
/// "Very Strong". Uses the thread-local RNG; this is a usability
/// suggestion, not a secrets-grade generator.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidLength`] when `length` is zero.
pub fn generate_password(length: usize) -> Result<SecretString, GenerateError> {
    if length == 0 {
        return Err(GenerateError::InvalidLength(length));
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("generating password of length {}", length);

    let mut rng = rand::thread_rng();
    let password: String = (0..length)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();

    Ok(SecretString::new(password.into()))
}
