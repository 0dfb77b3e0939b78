use dioxus::prelude::*;
use lesson_core::Page;

use super::LessonUi;
use super::blocks::BlockList;

#[component]
pub fn HomeView(page: Page) -> Element {
    let ui = use_context::<LessonUi>();
    let session = ui.session.read();
    let cards: Vec<_> = session
        .content()
        .concept_pages()
        .map(|concept| {
            let done = session.is_complete(&concept.id);
            (concept.clone(), done, card_class(done))
        })
        .collect();
    drop(session);

    rsx! {
        h2 { class: "panel-title", "{page.icon} {page.title}" }
        BlockList { page: page.clone() }
        div { class: "concept-grid",
            for (concept, done, class) in cards {
                button {
                    key: "{concept.id}",
                    class,
                    onclick: {
                        let id = concept.id.clone();
                        move |_| ui.try_dispatch(|session| session.navigate_to(id.as_str()))
                    },
                    span { class: "concept-icon", "{concept.icon}" }
                    span { class: "concept-title", "{concept.title}" }
                    if done {
                        span { class: "concept-done", "✓ Done" }
                    }
                }
            }
        }
    }
}

fn card_class(done: bool) -> &'static str {
    if done { "concept-card done" } else { "concept-card" }
}
