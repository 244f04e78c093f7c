//! Password complexity evaluation library
//!
//! This library evaluates passwords against a fixed set of criteria and
//! produces a score, a strength tier and per-criterion flags. It also
//! generates random password suggestions consistent with those criteria.
//!
//! # Features
//!
//! - `async` (default): Enables an async on-change evaluation wrapper
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_DENYLIST_PATH`: Custom path to a common-password denylist file
//!   (one password per line). Without it, a builtin list is used.
//!
//! # Example
//!
//! ```rust
//! use pwd_complexity::{evaluate_password, generate_password, DEFAULT_LENGTH};
//! use secrecy::SecretString;
//!
//! // Evaluate a password
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = evaluate_password(&password);
//!
//! println!("Score: {}", report.score);
//! println!("Strength: {}", report.strength);
//! for label in report.criteria.unmet() {
//!     println!("missing: {label}");
//! }
//!
//! // Suggest a strong password
//! let suggestion = generate_password(DEFAULT_LENGTH).expect("length is valid");
//! ```

// Internal modules
mod checks;
mod denylist;
mod evaluator;
mod generator;
mod report;

// Public API
pub use denylist::{DenylistError, init_denylist, init_denylist_from_path, is_common_password};
pub use evaluator::evaluate_password;
pub use generator::{ALPHABET, DEFAULT_LENGTH, GenerateError, generate_password};
pub use report::{Criteria, Score, Strength, StrengthReport};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_tx;
