/// Show/hide toggle for an explanation next to its trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealToggle {
    shown: bool,
}

impl RevealToggle {
    pub const SHOW_LABEL: &'static str = "💡 Show Explanation";
    pub const HIDE_LABEL: &'static str = "✅ Got it!";

    pub fn toggle(&mut self) {
        self.shown = !self.shown;
    }

    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        if self.shown {
            Self::HIDE_LABEL
        } else {
            Self::SHOW_LABEL
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flashcard {
    flipped: bool,
}

impl Flashcard {
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }
}

/// Collapsible long-answer block with a disclosure indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LongAnswer {
    expanded: bool,
}

impl LongAnswer {
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Indicator rotation in degrees.
    #[must_use]
    pub fn indicator_rotation(&self) -> u16 {
        if self.expanded { 180 } else { 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_toggle_round_trips() {
        let mut reveal = RevealToggle::default();
        let original = reveal;
        reveal.toggle();
        assert!(reveal.is_shown());
        assert_eq!(reveal.label(), RevealToggle::HIDE_LABEL);
        reveal.toggle();
        assert_eq!(reveal, original);
        assert_eq!(reveal.label(), RevealToggle::SHOW_LABEL);
    }

    #[test]
    fn flashcard_flip_toggles() {
        let mut card = Flashcard::default();
        card.flip();
        assert!(card.is_flipped());
        card.flip();
        assert!(!card.is_flipped());
    }

    #[test]
    fn long_answer_rotates_indicator() {
        let mut answer = LongAnswer::default();
        assert_eq!(answer.indicator_rotation(), 0);
        answer.toggle();
        assert!(answer.is_expanded());
        assert_eq!(answer.indicator_rotation(), 180);
        answer.toggle();
        assert_eq!(answer.indicator_rotation(), 0);
    }
}
