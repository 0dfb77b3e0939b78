mod blocks;
mod celebration;
mod content;
mod exercises;
mod home;
mod quiz;
mod report;
mod scripts;
mod shell;
mod state;
mod toast;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use shell::LessonShell;
pub use state::{FRAME_MILLIS, LessonUi, PULSE_MILLIS, VIEWPORT};
