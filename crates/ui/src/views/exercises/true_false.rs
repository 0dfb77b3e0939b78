use dioxus::prelude::*;
use lesson_core::Mark;
use lesson_core::exercises::TfChoice;
use services::ExerciseKey;

use crate::views::LessonUi;
use crate::vm::mark_class;

#[component]
pub fn TrueFalseQuestion(
    exercise: ExerciseKey,
    statement: &'static str,
    reveal: &'static str,
) -> Element {
    let ui = use_context::<LessonUi>();
    let session = ui.session.read();
    let state = session.true_false(&exercise).cloned();
    drop(session);

    let locked = state.as_ref().is_some_and(|s| s.is_locked());
    let revealed = state.as_ref().is_some_and(|s| s.is_revealed());
    let controls = [TfChoice::True, TfChoice::False].map(|choice| {
        let mark = state.as_ref().map_or(Mark::Neutral, |s| s.mark_for(choice));
        (choice, format!("tf-btn {}", mark_class(mark)))
    });

    rsx! {
        div { class: "tf-q",
            p { class: "tf-statement", "{statement}" }
            div { class: "tf-controls",
                for (choice, class) in controls {
                    button {
                        key: "{choice.label()}",
                        class: "{class}",
                        disabled: locked,
                        onclick: {
                            let exercise = exercise.clone();
                            move |_| {
                                ui.try_dispatch(|session| session.choose_true_false(&exercise, choice));
                            }
                        },
                        "{choice.label()}"
                    }
                }
            }
            if revealed {
                p { class: "tf-reveal", "{reveal}" }
            }
        }
    }
}
