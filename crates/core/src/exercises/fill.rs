use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Mark;

/// When a fill-in-the-blank field earns its star.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillAwardPolicy {
    /// The first time the field becomes correct, never again.
    #[default]
    OncePerField,
    /// Every transition into the correct state, including after clearing and retyping.
    EveryCorrectTransition,
}

impl FromStr for FillAwardPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "once" | "once-per-field" => Ok(Self::OncePerField),
            "every" | "every-transition" => Ok(Self::EveryCorrectTransition),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for FillAwardPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OncePerField => f.write_str("once"),
            Self::EveryCorrectTransition => f.write_str("every"),
        }
    }
}

/// A text input checked against an expected answer on every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillBlank {
    expected: String,
    value: String,
    mark: Mark,
    awarded: bool,
}

impl FillBlank {
    /// `expected` is compared case-insensitively.
    #[must_use]
    pub fn new(expected: &str) -> Self {
        Self {
            expected: expected.trim().to_lowercase(),
            value: String::new(),
            mark: Mark::Neutral,
            awarded: false,
        }
    }

    /// Re-check the field after an input change and return the stars earned.
    ///
    /// A non-matching value only turns wrong once it is at least
    /// `expected_len - 1` characters long; shorter values keep an existing
    /// wrong mark but never add one.
    pub fn check(&mut self, input: &str, policy: FillAwardPolicy) -> u32 {
        input.clone_into(&mut self.value);
        let value = input.trim().to_lowercase();
        let was_correct = self.mark == Mark::Correct;

        if value == self.expected {
            self.mark = Mark::Correct;
            let earns = match policy {
                FillAwardPolicy::OncePerField => !self.awarded,
                FillAwardPolicy::EveryCorrectTransition => !was_correct,
            };
            self.awarded = true;
            return u32::from(earns);
        }

        if value.is_empty() {
            self.mark = Mark::Neutral;
            return 0;
        }

        let near_miss = value.chars().count() + 1 >= self.expected.chars().count();
        if near_miss {
            self.mark = Mark::Wrong;
        } else if was_correct {
            self.mark = Mark::Neutral;
        }
        0
    }

    /// The text last checked, exactly as typed.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn mark(&self) -> Mark {
        self.mark
    }

    #[must_use]
    pub fn expected_len(&self) -> usize {
        self.expected.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_ignores_case_and_whitespace() {
        let mut blank = FillBlank::new("href");
        assert_eq!(blank.check("  HREF ", FillAwardPolicy::OncePerField), 1);
        assert_eq!(blank.mark(), Mark::Correct);
    }

    #[test]
    fn keeps_the_raw_text_as_typed() {
        let mut blank = FillBlank::new("href");
        assert_eq!(blank.value(), "");
        blank.check(" Href ", FillAwardPolicy::OncePerField);
        assert_eq!(blank.value(), " Href ");
        blank.check("", FillAwardPolicy::OncePerField);
        assert_eq!(blank.value(), "");
    }

    #[test]
    fn clearing_after_correct_is_neutral_and_keeps_stars() {
        let mut blank = FillBlank::new("src");
        let earned = blank.check("src", FillAwardPolicy::OncePerField);
        assert_eq!(earned, 1);
        assert_eq!(blank.check("", FillAwardPolicy::OncePerField), 0);
        assert_eq!(blank.mark(), Mark::Neutral);
    }

    #[test]
    fn short_partial_input_is_not_flagged() {
        let mut blank = FillBlank::new("anchor");
        blank.check("an", FillAwardPolicy::OncePerField);
        assert_eq!(blank.mark(), Mark::Neutral);
        blank.check("ancho", FillAwardPolicy::OncePerField);
        assert_eq!(blank.mark(), Mark::Wrong);
    }

    #[test]
    fn wrong_mark_persists_while_shortening() {
        let mut blank = FillBlank::new("anchor");
        blank.check("anchxx", FillAwardPolicy::OncePerField);
        assert_eq!(blank.mark(), Mark::Wrong);
        blank.check("an", FillAwardPolicy::OncePerField);
        assert_eq!(blank.mark(), Mark::Wrong);
    }

    #[test]
    fn editing_away_from_correct_clears_correct_mark() {
        let mut blank = FillBlank::new("anchor");
        blank.check("anchor", FillAwardPolicy::OncePerField);
        blank.check("anc", FillAwardPolicy::OncePerField);
        assert_eq!(blank.mark(), Mark::Neutral);
    }

    #[test]
    fn once_per_field_never_awards_twice() {
        let mut blank = FillBlank::new("src");
        let policy = FillAwardPolicy::OncePerField;
        assert_eq!(blank.check("src", policy), 1);
        assert_eq!(blank.check("", policy), 0);
        assert_eq!(blank.check("src", policy), 0);
        assert_eq!(blank.check("src ", policy), 0);
    }

    #[test]
    fn every_transition_awards_on_retype_only() {
        let mut blank = FillBlank::new("src");
        let policy = FillAwardPolicy::EveryCorrectTransition;
        assert_eq!(blank.check("src", policy), 1);
        assert_eq!(blank.check("src ", policy), 0);
        assert_eq!(blank.check("", policy), 0);
        assert_eq!(blank.check("src", policy), 1);
    }

    #[test]
    fn policy_parses_from_flags() {
        assert_eq!("once".parse(), Ok(FillAwardPolicy::OncePerField));
        assert_eq!("EVERY".parse(), Ok(FillAwardPolicy::EveryCorrectTransition));
        assert!("sometimes".parse::<FillAwardPolicy>().is_err());
        assert_eq!(FillAwardPolicy::EveryCorrectTransition.to_string(), "every");
    }
}
