//! Shared error types for the services crate.

use thiserror::Error;

use lesson_core::{ContentError, NavigationError, QuizError};

use crate::lesson::ExerciseKey;

/// Errors emitted by `LessonSession`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("no exercise of that kind at {0}")]
    UnknownExercise(ExerciseKey),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Content(#[from] ContentError),
}

/// Errors emitted while validating `LessonSettingsDraft`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("invalid home page id: {0:?}")]
    InvalidHomePage(String),
    #[error("invalid fill award policy: {0:?} (expected `once` or `every`)")]
    InvalidFillAward(String),
}
