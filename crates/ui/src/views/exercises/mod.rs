//! Interactive practice widgets. Every widget reads and updates its state
//! through the session, so it survives the panel being swapped out.

mod anchor_demo;
mod fill;
mod options;
mod toggles;
mod true_false;

pub use anchor_demo::AnchorDemo;
pub use fill::FillBlankInput;
pub use options::OptionList;
pub use toggles::{FlashcardView, LongAnswerCard, RevealCard};
pub use true_false::TrueFalseQuestion;

use dioxus::prelude::*;

/// Enter or Space, the keys that activate a focusable card.
pub(crate) fn is_activation_key(key: &Key) -> bool {
    matches!(key, Key::Enter) || matches!(key, Key::Character(value) if value == " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_space_activate_cards() {
        assert!(is_activation_key(&Key::Enter));
        assert!(is_activation_key(&Key::Character(" ".to_string())));
    }

    #[test]
    fn other_keys_do_not_activate() {
        assert!(!is_activation_key(&Key::Tab));
        assert!(!is_activation_key(&Key::Escape));
        assert!(!is_activation_key(&Key::Character("a".to_string())));
    }
}
