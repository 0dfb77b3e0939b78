use thiserror::Error;

use crate::content::ContentError;
use crate::model::QuestionError;
use crate::navigator::NavigationError;
use crate::quiz::QuizError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Content(#[from] ContentError),
}
