use dioxus::prelude::*;
use services::ExerciseKey;

use crate::views::LessonUi;
use crate::vm::mark_class;

#[component]
pub fn OptionList(exercise: ExerciseKey, prompt: &'static str, labels: Vec<&'static str>) -> Element {
    let ui = use_context::<LessonUi>();
    let session = ui.session.read();
    let options: Vec<_> = labels
        .into_iter()
        .enumerate()
        .map(|(item, label)| {
            let key = ExerciseKey::item(exercise.page.clone(), exercise.block, item);
            let class = format!("option {}", mark_class(session.option_mark(&key)));
            (key, label, class)
        })
        .collect();
    drop(session);

    rsx! {
        div { class: "option-q",
            p { class: "option-prompt", "{prompt}" }
            div { class: "option-list",
                for (key, label, class) in options {
                    button {
                        key: "{key}",
                        class: "{class}",
                        onclick: {
                            let key = key.clone();
                            move |_| ui.try_dispatch(|session| session.select_option(&key))
                        },
                        "{label}"
                    }
                }
            }
        }
    }
}
