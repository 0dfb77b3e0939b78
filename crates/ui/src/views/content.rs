use dioxus::prelude::*;
use lesson_core::Page;
use lesson_core::content::QUIZ_PAGE;

use super::LessonUi;
use super::blocks::BlockList;

/// A concept panel: content blocks plus "complete and continue".
#[component]
pub fn ConceptView(page: Page) -> Element {
    let ui = use_context::<LessonUi>();
    let done = ui.session.read().is_complete(&page.id);
    let from = page.id.clone();
    let to = page.next.clone();

    rsx! {
        h2 { class: "panel-title", "{page.icon} {page.title}" }
        BlockList { page: page.clone() }
        div { class: "panel-footer",
            if let Some(to) = to {
                button {
                    class: "btn-primary",
                    onclick: move |_| {
                        let from = from.clone();
                        let to = to.clone();
                        ui.dispatch(move |session| {
                            session.complete_and_navigate(from.as_str(), to.as_str())
                        });
                    },
                    if done { "Continue ➜" } else { "Complete & Continue ➜" }
                }
            }
        }
    }
}

/// The practice panel. Finishing it leads to the quiz.
#[component]
pub fn PracticeView(page: Page) -> Element {
    let ui = use_context::<LessonUi>();

    rsx! {
        h2 { class: "panel-title", "{page.icon} {page.title}" }
        p { class: "panel-lead", "Every correct answer earns a star. Give it a try!" }
        BlockList { page: page.clone() }
        div { class: "panel-footer",
            button {
                class: "btn-primary",
                onclick: move |_| ui.try_dispatch(|session| session.navigate_to(QUIZ_PAGE)),
                "Take the Quiz ➜"
            }
        }
    }
}
