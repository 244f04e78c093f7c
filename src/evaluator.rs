//! Password complexity evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::checks::{character_classes, length_check, not_common_check};
use crate::report::{Criteria, Score, Strength, StrengthReport};

/// Evaluates password complexity and returns a full report.
///
/// Total over every string input: the empty password yields the reset
/// report (score 0, strength [`Strength::None`]). Same input always yields
/// the same report.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A [`StrengthReport`] with per-criterion flags, score and strength tier.
pub fn evaluate_password(password: &SecretString) -> StrengthReport {
    if password.expose_secret().is_empty() {
        return StrengthReport::empty();
    }

    let length = length_check(password);
    let classes = character_classes(password);
    let not_common = not_common_check(password);

    let criteria = Criteria {
        length: length.meets_minimum,
        uppercase: classes.uppercase,
        lowercase: classes.lowercase,
        digit: classes.digit,
        special: classes.special,
        common: not_common,
    };

    let mut points: u32 = 0;

    // Length: 20 points, 10 more at 12+ characters
    if length.meets_minimum {
        points += 20;
        if length.is_long {
            points += 10;
        }
    }

    // Character variety: up to 60 points (15 per class)
    for present in [
        classes.uppercase,
        classes.lowercase,
        classes.digit,
        classes.special,
    ] {
        if present {
            points += 15;
        }
    }

    // Not on the denylist: 10 points
    if not_common {
        points += 10;
    }

    // Full sum is exactly 100; Score::new clamps anyway
    let score = Score::new(points);

    StrengthReport {
        criteria,
        score,
        strength: Strength::from_score(score),
    }
}

/// Async on-change wrapper that sends the evaluation result via channel.
///
/// Debounces for 300 ms, then skips the evaluation entirely when `token`
/// was cancelled in the meantime (a newer edit supersedes this one).
/// Cancellation never interrupts [`evaluate_password`] itself.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthReport>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("evaluation superseded, skipping");
        return;
    }

    let report = evaluate_password(password);

    if let Err(e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", e);
    }
}
