use dioxus::prelude::*;
use lesson_core::exercises::DEFAULT_LINK_TEXT;
use services::ExerciseKey;

use crate::views::LessonUi;

/// Live code preview for an anchor tag built from two inputs.
#[component]
pub fn AnchorDemo(exercise: ExerciseKey) -> Element {
    let ui = use_context::<LessonUi>();
    let draft = ui
        .session
        .read()
        .anchor_draft(&exercise)
        .cloned()
        .unwrap_or_default();
    let preview = draft.preview();
    let text = draft.text().to_string();
    let url = draft.url().to_string();
    let text_key = exercise.clone();

    rsx! {
        div { class: "demo-box",
            label { "Link text"
                input {
                    r#type: "text",
                    placeholder: DEFAULT_LINK_TEXT,
                    value: "{text}",
                    oninput: move |evt: FormEvent| {
                        let typed = evt.value();
                        let key = text_key.clone();
                        ui.try_update(move |session| session.set_anchor_text(&key, &typed));
                    },
                }
            }
            label { "URL"
                input {
                    r#type: "text",
                    placeholder: "https://www.example.com",
                    value: "{url}",
                    oninput: move |evt: FormEvent| {
                        let typed = evt.value();
                        let key = exercise.clone();
                        ui.try_update(move |session| session.set_anchor_url(&key, &typed));
                    },
                }
            }
            pre { class: "code-box", id: "anchor-demo-code", "{preview}" }
        }
    }
}

