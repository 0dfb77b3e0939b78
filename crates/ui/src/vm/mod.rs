mod mark;
mod progress_vm;
mod quiz_vm;
mod report_vm;
mod time_fmt;

pub use mark::mark_class;
pub use progress_vm::{HeaderVm, NavItemVm, map_header, map_nav_items};
pub use quiz_vm::{
    FeedbackVm, NEXT_LABEL, QuestionVm, QuizOptionState, QuizOptionVm, QuizVm, RESULTS_LABEL,
    ResultsVm, map_quiz, option_letter,
};
pub use report_vm::{ReportVm, map_report};
pub use time_fmt::format_datetime;
