use std::sync::Arc;

use lesson_core::{Clock, LessonContent};
use services::{LessonError, LessonSession, LessonSettings};

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn content(&self) -> Arc<LessonContent>;
    fn settings(&self) -> LessonSettings;
    fn clock(&self) -> Clock;

    /// Fixed seed for the message picker; `None` seeds from the OS.
    fn seed(&self) -> Option<u64> {
        None
    }
}

#[derive(Clone)]
pub struct AppContext {
    initial: LessonSession,
}

impl AppContext {
    /// # Errors
    ///
    /// Returns `LessonError` if the configured home page is not in the content.
    pub fn new(app: &Arc<dyn UiApp>) -> Result<Self, LessonError> {
        let content = app.content();
        let settings = app.settings();
        let clock = app.clock();
        let initial = match app.seed() {
            Some(seed) => LessonSession::with_seed(content, settings, clock, seed)?,
            None => LessonSession::start(content, settings, clock)?,
        };
        Ok(Self { initial })
    }

    /// A fresh session in its starting state.
    #[must_use]
    pub fn new_session(&self) -> LessonSession {
        self.initial.clone()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
///
/// # Errors
///
/// Returns `LessonError` if the session cannot start.
pub fn build_app_context(app: &Arc<dyn UiApp>) -> Result<AppContext, LessonError> {
    AppContext::new(app)
}
