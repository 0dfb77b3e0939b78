#![forbid(unsafe_code)]

pub mod confetti;
pub mod content;
pub mod error;
pub mod exercises;
pub mod model;
pub mod navigator;
pub mod progress;
pub mod quiz;
pub mod rewards;
pub mod time;

pub use confetti::{Confetti, FrameStatus, Particle, Sprite, Surface};
pub use content::{Block, ContentError, LessonContent, Page, PageKind};
pub use error::Error;
pub use exercises::{FillAwardPolicy, Mark};
pub use model::{PageId, Question, QuestionBank, QuestionError};
pub use navigator::{NavigationError, Navigator};
pub use progress::{Completion, Progress, ProgressTracker, TOTAL_PAGES};
pub use quiz::{AdvanceOutcome, AnswerOutcome, QuizEngine, QuizError, QuizPhase, QuizResult, ResultTier};
pub use rewards::StarLedger;
pub use time::Clock;
