//! Common-password denylist
//!
//! Holds the process-wide set of known weak passwords and answers
//! case-insensitive membership queries. A builtin list is compiled in;
//! an external file can replace it at init time.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

static COMMON_PASSWORDS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

/// Frequently-used passwords, all lowercase. Used whenever no external
/// denylist file has been loaded.
const BUILTIN_DENYLIST: &[&str] = &[
    "password", "123456", "12345678", "1234", "qwerty", "12345", "dragon", "baseball", "football",
    "letmein", "monkey", "abc123", "mustang", "access", "shadow", "master", "michael", "superman",
];

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
}

/// Returns the denylist file path from the `PWD_DENYLIST_PATH` environment
/// variable, or `None` when the builtin list should be used.
pub fn denylist_path() -> Option<PathBuf> {
    std::env::var("PWD_DENYLIST_PATH").map(PathBuf::from).ok()
}

/// Initializes the common-password denylist.
///
/// Loads the file named by `PWD_DENYLIST_PATH` when the variable is set,
/// otherwise installs the builtin list. Idempotent: a second call leaves the
/// loaded set untouched.
///
/// # Errors
///
/// Returns error if the configured file does not exist, cannot be read, or
/// is empty. The builtin path cannot fail.
pub fn init_denylist() -> Result<usize, DenylistError> {
    match denylist_path() {
        Some(path) => init_denylist_from_path(path),
        None => {
            {
                let guard = COMMON_PASSWORDS.read().unwrap();
                if let Some(set) = guard.as_ref() {
                    return Ok(set.len());
                }
            }
            let set: HashSet<String> = BUILTIN_DENYLIST.iter().map(|p| p.to_string()).collect();
            let count = set.len();
            let mut guard = COMMON_PASSWORDS.write().unwrap();
            *guard = Some(set);

            #[cfg(feature = "tracing")]
            tracing::info!("Denylist initialized: {} builtin passwords", count);

            Ok(count)
        }
    }
}

/// Initializes the common-password denylist from a specific file path.
///
/// Use this when the path comes from somewhere other than the environment
/// (e.g. an application asset system). The file holds one password per
/// line; entries are lowercased and blank lines are skipped.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_denylist_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<usize, DenylistError> {
    // Idempotente: se gia inizializzata, ritorna subito
    {
        let guard = COMMON_PASSWORDS.read().unwrap();
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Denylist initialization FAILED: FileNotFound {}", path.display());
        return Err(DenylistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Denylist initialization FAILED: Empty file {}", path.display());
        return Err(DenylistError::EmptyFile);
    }

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let count = set.len();
    {
        let mut guard = COMMON_PASSWORDS.write().unwrap();
        *guard = Some(set);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Denylist initialized: {} passwords from {:?}", count, path);

    Ok(count)
}

/// Checks if a password is on the common-password denylist.
///
/// The check is case-insensitive. Falls back to the builtin list when
/// `init_denylist()` has not been called, so evaluation never requires
/// explicit setup. The empty string is never a member.
pub fn is_common_password(password: &str) -> bool {
    let needle = password.to_lowercase();
    let guard = COMMON_PASSWORDS.read().unwrap();
    match guard.as_ref() {
        Some(set) => set.contains(&needle),
        None => BUILTIN_DENYLIST.contains(&needle.as_str()),
    }
}

/// Resets the denylist for testing purposes.
#[cfg(test)]
pub fn reset_denylist_for_testing() {
    let mut guard = COMMON_PASSWORDS.write().unwrap();
    *guard = None;
}
