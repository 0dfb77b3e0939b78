use dioxus::prelude::*;
use services::ExerciseKey;

use crate::views::LessonUi;
use crate::vm::mark_class;

#[component]
pub fn FillBlankInput(exercise: ExerciseKey, before: &'static str, after: &'static str) -> Element {
    let ui = use_context::<LessonUi>();
    let session = ui.session.read();
    let class = format!("fill-input {}", mark_class(session.fill_mark(&exercise)));
    let value = session.fill_value(&exercise).to_string();
    drop(session);

    rsx! {
        p { class: "fill-q",
            "{before} "
            input {
                class: "{class}",
                r#type: "text",
                autocomplete: "off",
                value: "{value}",
                oninput: move |evt: FormEvent| {
                    let value = evt.value();
                    let exercise = exercise.clone();
                    ui.try_dispatch(move |session| session.check_fill(&exercise, &value));
                },
            }
            " {after}"
        }
    }
}
