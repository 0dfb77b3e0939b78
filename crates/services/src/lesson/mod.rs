mod board;
mod session;

pub use board::ExerciseKey;
pub use session::LessonSession;
