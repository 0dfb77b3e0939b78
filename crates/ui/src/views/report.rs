use dioxus::prelude::*;

use super::LessonUi;
use crate::vm::map_report;

#[component]
pub fn ReportView(title: &'static str) -> Element {
    let ui = use_context::<LessonUi>();
    let report = ui.session.read().teacher_report();
    let vm = map_report(&report);

    rsx! {
        h2 { class: "panel-title", "📋 {title}" }
        table { class: "report-table",
            tbody {
                tr {
                    th { "Concepts completed" }
                    td { id: "report-concepts", "{vm.concepts}" }
                }
                tr {
                    th { "Stars earned" }
                    td { id: "report-stars", "{vm.stars}" }
                }
                tr {
                    th { "Quiz result" }
                    td { id: "report-quiz", "{vm.quiz}" }
                }
                if let Some(at) = vm.quiz_completed_at {
                    tr {
                        th { "Quiz finished" }
                        td { "{at}" }
                    }
                }
            }
        }
    }
}
