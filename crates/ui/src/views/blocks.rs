use dioxus::prelude::*;
use lesson_core::{Block, Page, PageId};
use services::ExerciseKey;

use super::exercises::{
    AnchorDemo, FillBlankInput, FlashcardView, LongAnswerCard, OptionList, RevealCard,
    TrueFalseQuestion,
};

#[component]
pub fn BlockList(page: Page) -> Element {
    rsx! {
        div { class: "blocks",
            for (index, block) in page.blocks.iter().cloned().enumerate() {
                BlockView {
                    key: "{index}",
                    page_id: page.id.clone(),
                    index,
                    block,
                }
            }
        }
    }
}

#[component]
fn BlockView(page_id: PageId, index: usize, block: Block) -> Element {
    let key = ExerciseKey::block(page_id.clone(), index);
    match block {
        Block::Paragraph(text) => rsx! {
            p { class: "text", "{text}" }
        },
        Block::Code(code) => rsx! {
            pre { class: "code-box", code { "{code}" } }
        },
        Block::KeyPoints(points) => rsx! {
            ul { class: "key-points",
                for point in points {
                    li { "{point}" }
                }
            }
        },
        Block::Flashcards(cards) => rsx! {
            div { class: "flashcards",
                for (i, card) in cards.into_iter().enumerate() {
                    FlashcardView {
                        key: "{i}",
                        exercise: ExerciseKey::item(page_id.clone(), index, i),
                        front: card.front,
                        back: card.back,
                    }
                }
            }
        },
        Block::OptionSelect { prompt, options } => {
            let labels: Vec<&'static str> = options.iter().map(|(label, _)| *label).collect();
            rsx! { OptionList { exercise: key, prompt, labels } }
        }
        Block::Reveal {
            prompt,
            explanation,
        } => rsx! {
            RevealCard { exercise: key, prompt, explanation }
        },
        Block::FillBlank { before, after, .. } => rsx! {
            FillBlankInput { exercise: key, before, after }
        },
        Block::TrueFalse { statement, reveal } => rsx! {
            TrueFalseQuestion { exercise: key, statement, reveal }
        },
        Block::LongAnswer { question, answer } => rsx! {
            LongAnswerCard { exercise: key, question, answer }
        },
        Block::AnchorDemo => rsx! {
            AnchorDemo { exercise: key }
        },
    }
}
