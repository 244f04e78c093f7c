//! Per-criterion password checks
//!
//! Each check inspects one aspect of the password and returns plain flags;
//! the evaluator combines them into a report.

mod denylist;
mod length;
mod variety;

pub use denylist::not_common_check;
pub use length::{LengthCheck, length_check};
pub use variety::{CharacterClasses, character_classes};
