mod ids;
mod question;

pub use ids::PageId;
pub use question::{OPTION_COUNT, Question, QuestionBank, QuestionError};
