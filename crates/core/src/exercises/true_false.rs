use super::Mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TfChoice {
    True,
    False,
}

impl TfChoice {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::True => "T",
            Self::False => "F",
        }
    }
}

/// A true/false statement answered once.
///
/// The correct value comes from the reveal text: it is true iff the text
/// contains the literal word `TRUE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrueFalse {
    correct: TfChoice,
    chosen: Option<TfChoice>,
}

impl TrueFalse {
    #[must_use]
    pub fn from_reveal(reveal_text: &str) -> Self {
        let correct = if reveal_text.contains("TRUE") {
            TfChoice::True
        } else {
            TfChoice::False
        };
        Self {
            correct,
            chosen: None,
        }
    }

    /// Lock in `choice` and return the stars earned. Later choices are inert.
    pub fn choose(&mut self, choice: TfChoice) -> u32 {
        if self.chosen.is_some() {
            return 0;
        }
        self.chosen = Some(choice);
        u32::from(choice == self.correct)
    }

    #[must_use]
    pub fn correct(&self) -> TfChoice {
        self.correct
    }

    #[must_use]
    pub fn chosen(&self) -> Option<TfChoice> {
        self.chosen
    }

    /// Both controls are disabled once a choice is made.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.chosen.is_some()
    }

    /// The reveal text is shown once a choice is made.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.chosen.is_some()
    }

    /// Mark for the control labelled `control`.
    #[must_use]
    pub fn mark_for(&self, control: TfChoice) -> Mark {
        let Some(chosen) = self.chosen else {
            return Mark::Neutral;
        };
        if control == chosen {
            if chosen == self.correct {
                Mark::Correct
            } else {
                Mark::Wrong
            }
        } else if control == self.correct {
            Mark::Correct
        } else {
            Mark::Neutral
        }
    }
}
