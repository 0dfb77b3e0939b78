use std::collections::BTreeMap;
use std::fmt;

use lesson_core::exercises::{
    AnchorDraft, FillBlank, Flashcard, LongAnswer, OptionChoice, OptionResult, RevealToggle,
    TrueFalse,
};
use lesson_core::{Block, LessonContent, PageId};

/// Address of an interactive control: a block on a page, and for option lists
/// and flashcard decks the item within that block.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExerciseKey {
    pub page: PageId,
    pub block: usize,
    pub item: usize,
}

impl ExerciseKey {
    #[must_use]
    pub fn block(page: PageId, block: usize) -> Self {
        Self::item(page, block, 0)
    }

    #[must_use]
    pub fn item(page: PageId, block: usize, item: usize) -> Self {
        Self { page, block, item }
    }
}

impl fmt::Display for ExerciseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.page, self.block, self.item)
    }
}

/// Per-control exercise state, built from the content catalog. Lives as long
/// as the session, so leaving a page and coming back shows it unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ExerciseBoard {
    pub(crate) fills: BTreeMap<ExerciseKey, FillBlank>,
    pub(crate) true_false: BTreeMap<ExerciseKey, TrueFalse>,
    pub(crate) options: BTreeMap<ExerciseKey, (OptionResult, OptionChoice)>,
    pub(crate) reveals: BTreeMap<ExerciseKey, RevealToggle>,
    pub(crate) flashcards: BTreeMap<ExerciseKey, Flashcard>,
    pub(crate) long_answers: BTreeMap<ExerciseKey, LongAnswer>,
    pub(crate) anchors: BTreeMap<ExerciseKey, AnchorDraft>,
}

impl ExerciseBoard {
    pub(crate) fn from_content(content: &LessonContent) -> Self {
        let mut board = Self::default();
        for page in content.pages() {
            for (index, block) in page.blocks.iter().enumerate() {
                let key = ExerciseKey::block(page.id.clone(), index);
                match block {
                    Block::FillBlank { answer, .. } => {
                        board.fills.insert(key, FillBlank::new(answer));
                    }
                    Block::TrueFalse { reveal, .. } => {
                        board.true_false.insert(key, TrueFalse::from_reveal(reveal));
                    }
                    Block::OptionSelect { options, .. } => {
                        for (item, (_, result)) in options.iter().enumerate() {
                            board.options.insert(
                                ExerciseKey::item(page.id.clone(), index, item),
                                (*result, OptionChoice::new()),
                            );
                        }
                    }
                    Block::Reveal { .. } => {
                        board.reveals.insert(key, RevealToggle::default());
                    }
                    Block::Flashcards(cards) => {
                        for item in 0..cards.len() {
                            board.flashcards.insert(
                                ExerciseKey::item(page.id.clone(), index, item),
                                Flashcard::default(),
                            );
                        }
                    }
                    Block::LongAnswer { .. } => {
                        board.long_answers.insert(key, LongAnswer::default());
                    }
                    Block::AnchorDemo => {
                        board.anchors.insert(key, AnchorDraft::default());
                    }
                    Block::Paragraph(_) | Block::Code(_) | Block::KeyPoints(_) => {}
                }
            }
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lesson_core::content::PRACTICE_PAGE;

    #[test]
    fn board_covers_every_interactive_block() {
        let content = LessonContent::links_and_frames().unwrap();
        let board = ExerciseBoard::from_content(&content);
        assert_eq!(board.fills.len(), 4);
        assert_eq!(board.true_false.len(), 4);
        assert_eq!(board.options.len(), 6);
        assert_eq!(board.reveals.len(), 1);
        assert_eq!(board.flashcards.len(), 6);
        assert_eq!(board.long_answers.len(), 2);
        assert_eq!(board.anchors.len(), 1);
        assert!(
            board
                .fills
                .keys()
                .all(|key| key.page == PRACTICE_PAGE && key.item == 0)
        );
    }

    #[test]
    fn key_display_is_path_like() {
        let key = ExerciseKey::item(PageId::from_static("page-brain"), 2, 1);
        assert_eq!(key.to_string(), "page-brain/2/1");
    }
}
