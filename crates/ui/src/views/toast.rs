use dioxus::prelude::*;

use super::LessonUi;

#[component]
pub fn MotivationToast() -> Element {
    let ui = use_context::<LessonUi>();
    let toast = ui.toast;

    rsx! {
        if let Some(message) = toast() {
            div { class: "toast", role: "status", "{message}" }
        }
    }
}
