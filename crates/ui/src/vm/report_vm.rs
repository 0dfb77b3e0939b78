use services::TeacherReport;

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportVm {
    pub concepts: String,
    pub stars: String,
    pub quiz: String,
    pub quiz_completed_at: Option<String>,
}

impl From<&TeacherReport> for ReportVm {
    fn from(report: &TeacherReport) -> Self {
        Self {
            concepts: report.concepts_label(),
            stars: report.stars_label(),
            quiz: report.quiz_label(),
            quiz_completed_at: report.quiz.map(|quiz| format_datetime(quiz.completed_at)),
        }
    }
}

#[must_use]
pub fn map_report(report: &TeacherReport) -> ReportVm {
    ReportVm::from(report)
}
