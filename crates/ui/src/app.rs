use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{LessonShell, LessonUi};

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_signal(|| ctx.new_session());
    use_context_provider(|| LessonUi::new(session));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Links & Frames" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                LessonShell {}
            }
        }
    }
}
