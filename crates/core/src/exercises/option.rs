use serde::{Deserialize, Serialize};

use super::Mark;

/// Result tag attached to a selectable option by the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionResult {
    Correct,
    Wrong,
}

/// A single-shot graded option. Once selected it stays selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionChoice {
    selected: Option<OptionResult>,
}

impl OptionChoice {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the option and return the stars earned (1 iff correct, first selection only).
    pub fn select(&mut self, result: OptionResult) -> u32 {
        if self.selected.is_some() {
            return 0;
        }
        self.selected = Some(result);
        u32::from(result == OptionResult::Correct)
    }

    #[must_use]
    pub fn mark(&self) -> Mark {
        match self.selected {
            None => Mark::Neutral,
            Some(OptionResult::Correct) => Mark::Correct,
            Some(OptionResult::Wrong) => Mark::Wrong,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_selection_earns_one_star() {
        let mut choice = OptionChoice::new();
        assert_eq!(choice.select(OptionResult::Correct), 1);
        assert_eq!(choice.mark(), Mark::Correct);
    }

    #[test]
    fn wrong_selection_earns_nothing() {
        let mut choice = OptionChoice::new();
        assert_eq!(choice.select(OptionResult::Wrong), 0);
        assert_eq!(choice.mark(), Mark::Wrong);
    }

    #[test]
    fn selection_is_single_shot() {
        let mut choice = OptionChoice::new();
        choice.select(OptionResult::Correct);
        assert_eq!(choice.select(OptionResult::Correct), 0);
        assert_eq!(choice.mark(), Mark::Correct);
    }
}
