//! Teacher-facing summaries of a session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lesson_core::Progress;
use lesson_core::quiz::{QuizResult, ResultTier};

/// Shown in place of the quiz result before the quiz is finished.
pub const QUIZ_PENDING: &str = "-";

/// A finished quiz run, stamped with the session clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizReport {
    pub score: u32,
    pub total: usize,
    pub percent: u32,
    pub tier: ResultTier,
    pub completed_at: DateTime<Utc>,
}

impl QuizReport {
    #[must_use]
    pub fn new(result: QuizResult, completed_at: DateTime<Utc>) -> Self {
        Self {
            score: result.score,
            total: result.total,
            percent: result.percent,
            tier: result.tier,
            completed_at,
        }
    }

    /// `"score/total (pct%)"`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{}/{} ({}%)", self.score, self.total, self.percent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherReport {
    pub concepts_completed: usize,
    pub concepts_total: usize,
    pub stars: u32,
    pub quiz: Option<QuizReport>,
}

impl TeacherReport {
    #[must_use]
    pub fn new(progress: Progress, stars: u32, quiz: Option<QuizReport>) -> Self {
        Self {
            concepts_completed: progress.completed,
            concepts_total: progress.total,
            stars,
            quiz,
        }
    }

    #[must_use]
    pub fn concepts_label(&self) -> String {
        format!("{}/{}", self.concepts_completed, self.concepts_total)
    }

    #[must_use]
    pub fn stars_label(&self) -> String {
        format!("{} ⭐", self.stars)
    }

    #[must_use]
    pub fn quiz_label(&self) -> String {
        self.quiz
            .as_ref()
            .map_or_else(|| QUIZ_PENDING.to_string(), QuizReport::summary)
    }

    /// Pretty-printed JSON export.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
