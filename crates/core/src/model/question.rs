use thiserror::Error;

/// Number of options every multiple-choice question carries.
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("correct index {index} is outside the {} options", OPTION_COUNT)]
    CorrectIndexOutOfRange { index: usize },

    #[error("question bank must contain at least one question")]
    EmptyBank,
}

/// Immutable multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: [String; OPTION_COUNT],
    correct_index: usize,
    explanation: String,
}

impl Question {
    /// Build a question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` for a blank prompt and
    /// `QuestionError::CorrectIndexOutOfRange` if `correct_index >= OPTION_COUNT`.
    pub fn new(
        prompt: impl Into<String>,
        options: [&str; OPTION_COUNT],
        correct_index: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if correct_index >= OPTION_COUNT {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: correct_index,
            });
        }

        Ok(Self {
            prompt,
            options: options.map(str::to_owned),
            correct_index,
            explanation: explanation.into(),
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn is_correct(&self, chosen: usize) -> bool {
        chosen == self.correct_index
    }
}

/// Fixed, ordered, non-empty sequence of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyBank` when `questions` is empty.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionError> {
        if questions.is_empty() {
            return Err(QuestionError::EmptyBank);
        }
        Ok(Self { questions })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.questions.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question::new("Pick B", ["a", "b", "c", "d"], 1, "B it is").unwrap()
    }

    #[test]
    fn rejects_out_of_range_correct_index() {
        let err = Question::new("Q", ["a", "b", "c", "d"], 4, "").unwrap_err();
        assert_eq!(err, QuestionError::CorrectIndexOutOfRange { index: 4 });
    }

    #[test]
    fn rejects_blank_prompt() {
        let err = Question::new("   ", ["a", "b", "c", "d"], 0, "").unwrap_err();
        assert_eq!(err, QuestionError::EmptyPrompt);
    }

    #[test]
    fn bank_requires_questions() {
        assert_eq!(QuestionBank::new(Vec::new()).unwrap_err(), QuestionError::EmptyBank);
    }

    #[test]
    fn bank_reports_last_index() {
        let bank = QuestionBank::new(vec![sample(), sample(), sample()]).unwrap();
        assert_eq!(bank.len(), 3);
        assert!(!bank.is_last(1));
        assert!(bank.is_last(2));
        assert!(bank.get(3).is_none());
        assert!(bank.get(0).unwrap().is_correct(1));
    }
}
