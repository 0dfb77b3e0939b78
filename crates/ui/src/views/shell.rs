use dioxus::prelude::*;
use lesson_core::{Page, PageKind};

use super::celebration::CelebrationOverlay;
use super::content::{ConceptView, PracticeView};
use super::home::HomeView;
use super::quiz::QuizView;
use super::report::ReportView;
use super::toast::MotivationToast;
use super::LessonUi;
use crate::vm::{map_header, map_nav_items};

#[component]
pub fn LessonShell() -> Element {
    let ui = use_context::<LessonUi>();
    let session = ui.session.read();
    let header = map_header(&session);
    let nav_items = map_nav_items(&session);
    let active = session.active_page().cloned();
    drop(session);

    let stars_class = if (ui.pulse)() {
        "stars-badge pulse"
    } else {
        "stars-badge"
    };

    rsx! {
        header { class: "lesson-header",
            h1 { class: "lesson-title", "{header.title}" }
            div { class: "{stars_class}", id: "stars-display", "⭐ {header.stars}" }
            div { class: "progress",
                div { class: "progress-track",
                    div { class: "progress-fill", style: "{header.bar_width}" }
                }
                span { class: "progress-label", "{header.percent_label}" }
            }
        }

        nav { class: "lesson-nav",
            for item in nav_items {
                button {
                    key: "{item.id}",
                    class: nav_class(item.active),
                    onclick: {
                        let id = item.id.clone();
                        move |_| ui.try_dispatch(|session| session.navigate_to(id.as_str()))
                    },
                    span { class: "nav-icon", "{item.icon}" }
                    span { class: "nav-title", "{item.title}" }
                    if item.complete {
                        span { class: "nav-done", "✓" }
                    }
                }
            }
        }

        main { class: "lesson-main",
            if let Some(page) = active {
                PageView { key: "{page.id}", page: page.clone() }
            }
        }

        MotivationToast {}
        CelebrationOverlay {}
    }
}

fn nav_class(active: bool) -> &'static str {
    if active { "nav-item active" } else { "nav-item" }
}

/// The single active panel.
#[component]
fn PageView(page: Page) -> Element {
    let id = page.id.clone();
    rsx! {
        section { class: "panel active", id: "{id}",
            match page.kind {
                PageKind::Home => rsx! { HomeView { page } },
                PageKind::Concept => rsx! { ConceptView { page } },
                PageKind::Practice => rsx! { PracticeView { page } },
                PageKind::Quiz => rsx! { QuizView { title: page.title } },
                PageKind::Report => rsx! { ReportView { title: page.title } },
            }
        }
    }
}
