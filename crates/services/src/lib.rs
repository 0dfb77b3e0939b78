#![forbid(unsafe_code)]

pub mod effects;
pub mod error;
pub mod lesson;
pub mod motivation;
pub mod report;
pub mod settings;

pub use lesson_core::Clock;

pub use effects::Effect;
pub use error::{LessonError, SettingsError};
pub use lesson::{ExerciseKey, LessonSession};
pub use report::{QuizReport, TeacherReport};
pub use settings::{LessonSettings, LessonSettingsDraft};
