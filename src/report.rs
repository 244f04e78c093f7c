//! Report types produced by password evaluation.

use std::fmt;

/// Per-criterion pass/fail flags.
///
/// All six flags are present in every report. `common` is `true` when the
/// password is NOT on the common-password denylist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Criteria {
    /// At least 8 characters.
    pub length: bool,
    /// Contains at least one `A`-`Z`.
    pub uppercase: bool,
    /// Contains at least one `a`-`z`.
    pub lowercase: bool,
    /// Contains at least one `0`-`9`.
    pub digit: bool,
    /// Contains at least one character outside ASCII letters and digits.
    pub special: bool,
    /// Not a common password (case-insensitive denylist check).
    pub common: bool,
}

impl Criteria {
    /// Returns the display labels of the criteria this password fails.
    pub fn unmet(&self) -> Vec<&'static str> {
        let mut unmet = Vec::new();
        if !self.length {
            unmet.push("At least 8 characters");
        }
        if !self.uppercase {
            unmet.push("Contains uppercase letters");
        }
        if !self.lowercase {
            unmet.push("Contains lowercase letters");
        }
        if !self.digit {
            unmet.push("Contains numbers");
        }
        if !self.special {
            unmet.push("Contains special characters");
        }
        if !self.common {
            unmet.push("Not a common password");
        }
        unmet
    }
}

/// Strength score in `0..=100`, clamped at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(u8);

impl Score {
    pub const MAX: Score = Score(100);

    /// Builds a score from accumulated points, clamping to 100.
    pub fn new(points: u32) -> Self {
        Score(points.min(100) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Qualitative strength tier.
///
/// `None` is the reset state for empty input only; it is never derived from
/// a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    None,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl Strength {
    /// Maps a score to its tier. Applies to non-empty input.
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            0..=39 => Strength::Weak,
            40..=69 => Strength::Moderate,
            70..=89 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::None => "None",
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        };
        write!(f, "{label}")
    }
}

/// Full evaluation result: criteria flags, score and strength tier.
///
/// Plain value with no identity; recomputed from scratch on every
/// evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthReport {
    pub criteria: Criteria,
    pub score: Score,
    pub strength: Strength,
}

impl StrengthReport {
    /// Report for empty input: all criteria unmet except `common`, which
    /// holds vacuously. Mirrors the reset state of a cleared input field.
    pub fn empty() -> Self {
        StrengthReport {
            criteria: Criteria {
                common: true,
                ..Criteria::default()
            },
            score: Score::new(0),
            strength: Strength::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_clamps_to_max() {
        assert_eq!(Score::new(250), Score::MAX);
        assert_eq!(Score::new(100).value(), 100);
        assert_eq!(Score::new(0).value(), 0);
    }

    #[test]
    fn test_strength_thresholds() {
        assert_eq!(Strength::from_score(Score::new(0)), Strength::Weak);
        assert_eq!(Strength::from_score(Score::new(39)), Strength::Weak);
        assert_eq!(Strength::from_score(Score::new(40)), Strength::Moderate);
        assert_eq!(Strength::from_score(Score::new(69)), Strength::Moderate);
        assert_eq!(Strength::from_score(Score::new(70)), Strength::Strong);
        assert_eq!(Strength::from_score(Score::new(89)), Strength::Strong);
        assert_eq!(Strength::from_score(Score::new(90)), Strength::VeryStrong);
        assert_eq!(Strength::from_score(Score::new(100)), Strength::VeryStrong);
    }

    #[test]
    fn test_strength_display_labels() {
        assert_eq!(Strength::None.to_string(), "None");
        assert_eq!(Strength::VeryStrong.to_string(), "Very Strong");
        assert_eq!(Strength::Moderate.to_string(), "Moderate");
    }

    #[test]
    fn test_empty_report() {
        let report = StrengthReport::empty();
        assert_eq!(report.score.value(), 0);
        assert_eq!(report.strength, Strength::None);
        assert!(report.criteria.common);
        assert!(!report.criteria.length);
        assert!(!report.criteria.uppercase);
        assert!(!report.criteria.lowercase);
        assert!(!report.criteria.digit);
        assert!(!report.criteria.special);
    }

    #[test]
    fn test_unmet_labels() {
        let all_met = Criteria {
            length: true,
            uppercase: true,
            lowercase: true,
            digit: true,
            special: true,
            common: true,
        };
        assert!(all_met.unmet().is_empty());

        let missing = Criteria {
            length: true,
            lowercase: true,
            digit: true,
            common: true,
            ..Criteria::default()
        };
        assert_eq!(
            missing.unmet(),
            vec!["Contains uppercase letters", "Contains special characters"]
        );
    }
}
