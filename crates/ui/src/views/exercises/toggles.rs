use dioxus::prelude::*;
use services::ExerciseKey;

use super::is_activation_key;
use crate::views::LessonUi;

#[component]
pub fn RevealCard(exercise: ExerciseKey, prompt: &'static str, explanation: &'static str) -> Element {
    let ui = use_context::<LessonUi>();
    let toggle = ui.session.read().reveal(&exercise);
    let shown = toggle.is_shown();
    let label = toggle.label();
    let class = if shown { "reveal-btn success" } else { "reveal-btn" };

    rsx! {
        div { class: "reveal-q",
            p { class: "reveal-prompt", "{prompt}" }
            if shown {
                p { class: "reveal-answer", "{explanation}" }
            }
            button {
                class,
                onclick: move |_| ui.try_update(|session| session.toggle_reveal(&exercise)),
                "{label}"
            }
        }
    }
}

#[component]
pub fn FlashcardView(exercise: ExerciseKey, front: &'static str, back: &'static str) -> Element {
    let ui = use_context::<LessonUi>();
    let class = if ui.session.read().flashcard(&exercise).is_flipped() {
        "flashcard flipped"
    } else {
        "flashcard"
    };
    let key_exercise = exercise.clone();

    rsx! {
        div {
            class,
            tabindex: "0",
            role: "button",
            onclick: move |_| ui.try_update(|session| session.flip_flashcard(&exercise)),
            onkeydown: move |evt: KeyboardEvent| {
                if is_activation_key(&evt.key()) {
                    evt.prevent_default();
                    ui.try_update(|session| session.flip_flashcard(&key_exercise));
                }
            },
            div { class: "flashcard-face front", "{front}" }
            div { class: "flashcard-face back", "{back}" }
        }
    }
}

#[component]
pub fn LongAnswerCard(exercise: ExerciseKey, question: &'static str, answer: &'static str) -> Element {
    let ui = use_context::<LessonUi>();
    let state = ui.session.read().long_answer(&exercise);
    let expanded = state.is_expanded();
    let rotation = state.indicator_rotation();
    let key_exercise = exercise.clone();

    rsx! {
        div { class: "la-q",
            div {
                class: "la-header",
                tabindex: "0",
                role: "button",
                onclick: move |_| ui.try_update(|session| session.toggle_long_answer(&exercise)),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        ui.try_update(|session| session.toggle_long_answer(&key_exercise));
                    }
                },
                span { "{question}" }
                span { class: "la-toggle", style: "transform: rotate({rotation}deg);", "▾" }
            }
            if expanded {
                p { class: "la-answer", "{answer}" }
            }
        }
    }
}
