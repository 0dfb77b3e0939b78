use lesson_core::{QuizEngine, QuizPhase};

pub const NEXT_LABEL: &str = "Next Question →";
pub const RESULTS_LABEL: &str = "🎉 See Results!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOptionState {
    Open,
    /// Answered; this option was neither chosen nor correct.
    Locked,
    Correct,
    Wrong,
}

impl QuizOptionState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Open | Self::Locked => "quiz-option",
            Self::Correct => "quiz-option correct",
            Self::Wrong => "quiz-option wrong",
        }
    }

    #[must_use]
    pub fn disabled(self) -> bool {
        !matches!(self, Self::Open)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub index: usize,
    pub label: String,
    pub state: QuizOptionState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub heading: &'static str,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub progress_label: String,
    pub prompt: String,
    pub options: Vec<QuizOptionVm>,
    pub feedback: Option<FeedbackVm>,
    pub advance_label: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub title: &'static str,
    pub message: String,
    pub rating: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizVm {
    Question(QuestionVm),
    Results(ResultsVm),
}

#[must_use]
pub fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|i| b'A'.checked_add(i))
        .map_or('?', char::from)
}

/// Project the engine onto what the quiz panel shows.
#[must_use]
pub fn map_quiz(engine: &QuizEngine) -> QuizVm {
    if let (QuizPhase::Results, Some(result)) = (engine.phase(), engine.result()) {
        return QuizVm::Results(ResultsVm {
            title: result.tier.title(),
            message: result.tier.message(result.score, result.total),
            rating: result.tier.rating_glyphs(),
        });
    }

    let Some(question) = engine.current_question() else {
        return QuizVm::Question(QuestionVm {
            progress_label: String::new(),
            prompt: String::new(),
            options: Vec::new(),
            feedback: None,
            advance_label: None,
        });
    };

    let index = engine.current_index();
    let answered = engine.is_answered();
    let chosen = engine.chosen();

    let options = question
        .options()
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let state = if !answered {
                QuizOptionState::Open
            } else if i == question.correct_index() {
                QuizOptionState::Correct
            } else if Some(i) == chosen {
                QuizOptionState::Wrong
            } else {
                QuizOptionState::Locked
            };
            QuizOptionVm {
                index: i,
                label: format!("{}. {text}", option_letter(i)),
                state,
            }
        })
        .collect();

    let feedback = chosen.filter(|_| answered).map(|chosen| {
        let correct = question.is_correct(chosen);
        FeedbackVm {
            correct,
            heading: if correct { "✅ Correct!" } else { "❌ Not quite!" },
            explanation: question.explanation().to_string(),
        }
    });

    let advance_label = answered.then(|| {
        if engine.is_last_question() {
            RESULTS_LABEL
        } else {
            NEXT_LABEL
        }
    });

    QuizVm::Question(QuestionVm {
        progress_label: format!("Question {} of {}", index + 1, engine.question_count()),
        prompt: format!("Q{}. {}", index + 1, question.prompt()),
        options,
        feedback,
        advance_label,
    })
}

#[cfg(test)]
mod tests {
    use lesson_core::{Question, QuestionBank};

    use super::*;

    fn engine(n: usize) -> QuizEngine {
        let questions = (0..n)
            .map(|i| Question::new(format!("Prompt {i}"), ["w", "x", "y", "z"], 1, "why").unwrap())
            .collect();
        QuizEngine::new(QuestionBank::new(questions).unwrap())
    }

    fn question(vm: QuizVm) -> QuestionVm {
        match vm {
            QuizVm::Question(q) => q,
            QuizVm::Results(_) => panic!("expected a question"),
        }
    }

    #[test]
    fn fresh_question_has_open_lettered_options() {
        let vm = question(map_quiz(&engine(3)));
        assert_eq!(vm.progress_label, "Question 1 of 3");
        assert_eq!(vm.prompt, "Q1. Prompt 0");
        assert_eq!(vm.options[0].label, "A. w");
        assert_eq!(vm.options[3].label, "D. z");
        assert!(vm.options.iter().all(|o| o.state == QuizOptionState::Open));
        assert!(vm.feedback.is_none());
        assert!(vm.advance_label.is_none());
    }

    #[test]
    fn wrong_answer_marks_both_and_locks_the_rest() {
        let mut engine = engine(3);
        engine.answer(2).unwrap();
        let vm = question(map_quiz(&engine));
        let states: Vec<_> = vm.options.iter().map(|o| o.state).collect();
        assert_eq!(
            states,
            vec![
                QuizOptionState::Locked,
                QuizOptionState::Correct,
                QuizOptionState::Wrong,
                QuizOptionState::Locked
            ]
        );
        assert!(vm.options.iter().all(|o| o.state.disabled()));
        let feedback = vm.feedback.unwrap();
        assert!(!feedback.correct);
        assert_eq!(feedback.heading, "❌ Not quite!");
        assert_eq!(vm.advance_label, Some(NEXT_LABEL));
    }

    #[test]
    fn last_question_offers_results() {
        let mut engine = engine(1);
        engine.answer(1).unwrap();
        let vm = question(map_quiz(&engine));
        assert_eq!(vm.advance_label, Some(RESULTS_LABEL));
        assert!(vm.feedback.unwrap().correct);
    }

    #[test]
    fn results_show_tier() {
        let mut engine = engine(1);
        engine.answer(1).unwrap();
        engine.advance();
        let QuizVm::Results(results) = map_quiz(&engine) else {
            panic!("expected results");
        };
        assert_eq!(results.title, "🏆 Outstanding!");
        assert_eq!(results.rating, "⭐⭐⭐⭐⭐");
        assert!(results.message.contains("1/1"));
    }
}
