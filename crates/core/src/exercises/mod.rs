//! Small exercises embedded in content pages, graded and ungraded.
//!
//! Each exercise owns only its own presentation state. Methods that can earn
//! stars return how many; the caller routes them into the reward ledger.

mod fill;
mod option;
mod preview;
mod toggles;
mod true_false;

pub use fill::{FillAwardPolicy, FillBlank};
pub use option::{OptionChoice, OptionResult};
pub use preview::{AnchorDraft, DEFAULT_LINK_TEXT, DEFAULT_LINK_URL, anchor_preview};
pub use toggles::{Flashcard, LongAnswer, RevealToggle};
pub use true_false::{TfChoice, TrueFalse};

/// Correctness marking on an input or control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mark {
    #[default]
    Neutral,
    Correct,
    Wrong,
}
