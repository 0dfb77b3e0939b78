use dioxus::prelude::*;

use super::LessonUi;
use crate::vm::{QuizVm, map_quiz};

#[component]
pub fn QuizView(title: &'static str) -> Element {
    let ui = use_context::<LessonUi>();
    let session = ui.session.read();
    let vm = map_quiz(session.quiz());
    let score = session.quiz().score();
    drop(session);

    rsx! {
        h2 { class: "panel-title", "📝 {title}" }
        div { class: "quiz-score", "Score: " span { id: "quiz-score", "{score}" } }
        match vm {
            QuizVm::Question(question) => rsx! {
                p { class: "quiz-progress", "{question.progress_label}" }
                div { class: "quiz-question-box",
                    div { class: "qtext", "{question.prompt}" }
                    div { class: "quiz-options",
                        for option in question.options {
                            button {
                                key: "{option.index}",
                                class: option.state.class(),
                                disabled: option.state.disabled(),
                                onclick: move |_| {
                                    ui.try_dispatch(|session| session.answer_question(option.index));
                                },
                                "{option.label}"
                            }
                        }
                    }
                }
                if let Some(feedback) = question.feedback {
                    div { class: feedback_class(feedback.correct),
                        strong { "{feedback.heading}" }
                        " {feedback.explanation}"
                    }
                }
                if let Some(label) = question.advance_label {
                    button {
                        class: "btn-primary",
                        onclick: move |_| ui.dispatch(|session| session.next_question()),
                        "{label}"
                    }
                }
            },
            QuizVm::Results(results) => rsx! {
                div { class: "quiz-result",
                    h3 { class: "result-title", "{results.title}" }
                    div { class: "result-stars", "{results.rating}" }
                    p { class: "result-msg", "{results.message}" }
                    button {
                        class: "btn-primary",
                        onclick: move |_| ui.dispatch(|session| {
                            session.restart_quiz();
                            Vec::new()
                        }),
                        "🔄 Try Again"
                    }
                }
            },
        }
    }
}

fn feedback_class(correct: bool) -> &'static str {
    if correct {
        "quiz-feedback correct"
    } else {
        "quiz-feedback wrong"
    }
}
