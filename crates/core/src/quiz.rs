//! Multiple-choice quiz state machine.
//!
//! ```text
//! render(i) ──► AwaitingAnswer(i) ──answer──► ShowingFeedback(i) ──advance──┬─► AwaitingAnswer(i+1)
//!                                                                           └─► Results
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::model::{OPTION_COUNT, Question, QuestionBank};
use crate::progress::round_percent;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("option {chosen} is outside the {} options", OPTION_COUNT)]
    OptionOutOfRange { chosen: usize },

    #[error("question {index} is outside a bank of {len}")]
    QuestionOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    AwaitingAnswer(usize),
    ShowingFeedback(usize),
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Wrong,
    /// Already answered, or not awaiting an answer.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Question(usize),
    Finished(QuizResult),
    /// Not showing feedback.
    Ignored,
}

/// Scoring bracket for a finished quiz, highest threshold first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultTier {
    Outstanding,
    GreatJob,
    GoodEffort,
    KeepPracticing,
}

impl ResultTier {
    #[must_use]
    pub fn from_percent(percent: u32) -> Self {
        match percent {
            90.. => Self::Outstanding,
            70.. => Self::GreatJob,
            50.. => Self::GoodEffort,
            _ => Self::KeepPracticing,
        }
    }

    /// Star rating shown on the results card.
    #[must_use]
    pub fn rating(self) -> u32 {
        match self {
            Self::Outstanding => 5,
            Self::GreatJob => 4,
            Self::GoodEffort => 3,
            Self::KeepPracticing => 1,
        }
    }

    /// Reward stars granted on reaching this tier.
    #[must_use]
    pub fn bonus_stars(self) -> u32 {
        match self {
            Self::Outstanding => 10,
            Self::GreatJob => 6,
            Self::GoodEffort => 3,
            Self::KeepPracticing => 1,
        }
    }

    #[must_use]
    pub fn celebrates(self) -> bool {
        matches!(self, Self::Outstanding | Self::GreatJob)
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Outstanding => "🏆 Outstanding!",
            Self::GreatJob => "🌟 Great Job!",
            Self::GoodEffort => "👍 Good Effort!",
            Self::KeepPracticing => "💪 Keep Practicing!",
        }
    }

    #[must_use]
    pub fn message(self, score: u32, total: usize) -> String {
        match self {
            Self::Outstanding => {
                format!("You scored {score}/{total}! You're a HTML champion!")
            }
            Self::GreatJob => format!("You scored {score}/{total}! Almost perfect!"),
            Self::GoodEffort => {
                format!("You scored {score}/{total}. Review the concepts and try again!")
            }
            Self::KeepPracticing => {
                format!("You scored {score}/{total}. Go back and review, you've got this!")
            }
        }
    }

    #[must_use]
    pub fn rating_glyphs(self) -> String {
        "⭐".repeat(self.rating() as usize)
    }
}

/// Final figures of a completed quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub score: u32,
    pub total: usize,
    pub percent: u32,
    pub tier: ResultTier,
}

impl QuizResult {
    #[must_use]
    pub fn new(score: u32, total: usize) -> Self {
        let percent = round_percent(score as usize, total);
        Self {
            score,
            total,
            percent,
            tier: ResultTier::from_percent(percent),
        }
    }

    /// `"score/total (pct%)"`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{}/{} ({}%)", self.score, self.total, self.percent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizEngine {
    bank: QuestionBank,
    phase: QuizPhase,
    current_index: usize,
    score: u32,
    answered: bool,
    chosen: Option<usize>,
    result: Option<QuizResult>,
}

impl QuizEngine {
    /// Create an engine showing the first question.
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            phase: QuizPhase::AwaitingAnswer(0),
            current_index: 0,
            score: 0,
            answered: false,
            chosen: None,
            result: None,
        }
    }

    /// Show question `index` and wait for an answer.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::QuestionOutOfRange` if the bank has no such question.
    pub fn render(&mut self, index: usize) -> Result<(), QuizError> {
        if index >= self.bank.len() {
            return Err(QuizError::QuestionOutOfRange {
                index,
                len: self.bank.len(),
            });
        }
        self.current_index = index;
        self.phase = QuizPhase::AwaitingAnswer(index);
        self.answered = false;
        self.chosen = None;
        Ok(())
    }

    /// Grade `chosen` against the current question. Only the first answer counts.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::OptionOutOfRange` for an index outside the options;
    /// state is left untouched.
    pub fn answer(&mut self, chosen: usize) -> Result<AnswerOutcome, QuizError> {
        let QuizPhase::AwaitingAnswer(index) = self.phase else {
            return Ok(AnswerOutcome::Ignored);
        };
        if self.answered {
            return Ok(AnswerOutcome::Ignored);
        }
        if chosen >= OPTION_COUNT {
            return Err(QuizError::OptionOutOfRange { chosen });
        }
        let Some(question) = self.bank.get(index) else {
            return Ok(AnswerOutcome::Ignored);
        };

        let correct = question.is_correct(chosen);
        self.answered = true;
        self.chosen = Some(chosen);
        self.phase = QuizPhase::ShowingFeedback(index);
        if correct {
            self.score += 1;
        }
        debug!(question = index, chosen, correct, score = self.score, "quiz answer");

        Ok(if correct {
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Wrong
        })
    }

    /// Move past the feedback for the current question.
    pub fn advance(&mut self) -> AdvanceOutcome {
        let QuizPhase::ShowingFeedback(index) = self.phase else {
            return AdvanceOutcome::Ignored;
        };
        let next = index + 1;
        if next < self.bank.len() {
            self.current_index = next;
            self.phase = QuizPhase::AwaitingAnswer(next);
            self.answered = false;
            self.chosen = None;
            return AdvanceOutcome::Question(next);
        }

        let result = QuizResult::new(self.score, self.bank.len());
        self.current_index = self.bank.len();
        self.phase = QuizPhase::Results;
        self.result = Some(result);
        debug!(score = result.score, percent = result.percent, tier = ?result.tier, "quiz finished");
        AdvanceOutcome::Finished(result)
    }

    /// Reset score and position and show the first question again.
    pub fn restart(&mut self) {
        self.score = 0;
        self.result = None;
        self.current_index = 0;
        self.phase = QuizPhase::AwaitingAnswer(0);
        self.answered = false;
        self.chosen = None;
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.answered
    }

    #[must_use]
    pub fn chosen(&self) -> Option<usize> {
        self.chosen
    }

    #[must_use]
    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.bank.len()
    }

    /// The question on screen; `None` once results are showing.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            QuizPhase::AwaitingAnswer(i) | QuizPhase::ShowingFeedback(i) => self.bank.get(i),
            QuizPhase::Results => None,
        }
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.bank.is_last(self.current_index)
    }
}
