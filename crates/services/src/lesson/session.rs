use std::collections::BTreeMap;
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use lesson_core::exercises::{AnchorDraft, Flashcard, LongAnswer, RevealToggle, TfChoice};
use lesson_core::quiz::{AdvanceOutcome, AnswerOutcome};
use lesson_core::{
    Clock, Completion, LessonContent, Mark, Navigator, Page, PageId, Progress, ProgressTracker,
    QuizEngine, StarLedger, exercises::TrueFalse,
};

use super::board::{ExerciseBoard, ExerciseKey};
use crate::effects::Effect;
use crate::error::LessonError;
use crate::motivation;
use crate::report::{QuizReport, TeacherReport};
use crate::settings::LessonSettings;

/// Stars granted the first time a concept page is completed.
pub const COMPLETION_STARS: u32 = 2;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// The whole volatile state of one learner working through a lesson.
///
/// Every mutating operation returns the effects the UI should play. Nothing
/// here schedules timers or touches presentation.
#[derive(Debug, Clone)]
pub struct LessonSession {
    content: Arc<LessonContent>,
    settings: LessonSettings,
    clock: Clock,
    rng: StdRng,
    navigator: Navigator,
    progress: ProgressTracker,
    stars: StarLedger,
    quiz: QuizEngine,
    board: ExerciseBoard,
    last_report: Option<QuizReport>,
}

impl LessonSession {
    /// Start a session on the configured home page with the first quiz
    /// question rendered.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::Navigation` if the configured home page is not
    /// part of `content`.
    pub fn start(
        content: Arc<LessonContent>,
        settings: LessonSettings,
        clock: Clock,
    ) -> Result<Self, LessonError> {
        Self::with_rng(content, settings, clock, StdRng::from_os_rng())
    }

    /// Like [`LessonSession::start`], with a deterministic message picker.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::Navigation` for an unknown home page.
    pub fn with_seed(
        content: Arc<LessonContent>,
        settings: LessonSettings,
        clock: Clock,
        seed: u64,
    ) -> Result<Self, LessonError> {
        Self::with_rng(content, settings, clock, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        content: Arc<LessonContent>,
        settings: LessonSettings,
        clock: Clock,
        rng: StdRng,
    ) -> Result<Self, LessonError> {
        let navigator = Navigator::new(content.page_ids(), settings.home_page().as_str())?;
        let progress = ProgressTracker::new(content.concept_pages().map(|page| page.id.clone()));
        let quiz = QuizEngine::new(content.questions().clone());
        let board = ExerciseBoard::from_content(&content);

        info!(
            lesson = content.title(),
            home = %navigator.home(),
            fill_award = %settings.fill_award(),
            "lesson session started"
        );

        Ok(Self {
            content,
            settings,
            clock,
            rng,
            navigator,
            progress,
            stars: StarLedger::new(),
            quiz,
            board,
            last_report: None,
        })
    }

    /// Return to the starting state: no stars, no completed pages, fresh
    /// exercises, first quiz question, home page.
    pub fn reset(&mut self) {
        self.progress.reset();
        self.stars.reset();
        self.quiz.restart();
        self.board = ExerciseBoard::from_content(&self.content);
        self.last_report = None;
        self.navigator.go_home();
        info!("lesson session reset");
    }

    //
    // ─── NAVIGATION ────────────────────────────────────────────────────────────
    //

    /// Show `page_id` as the only active panel.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::Navigation` for an unknown id; the active panel
    /// is left unchanged.
    pub fn navigate_to(&mut self, page_id: &str) -> Result<Vec<Effect>, LessonError> {
        self.navigator.navigate_to(page_id)?;
        Ok(vec![Effect::ScrollToTop])
    }

    /// Mark `from` complete (first time only: two stars and a motivational
    /// message), then move to `to`.
    ///
    /// A failed navigation is logged and leaves the display where it was; the
    /// completion still counts.
    pub fn complete_and_navigate(&mut self, from: &str, to: &str) -> Vec<Effect> {
        let mut effects = Vec::new();
        let from_id = self
            .navigator
            .resolve(from)
            .cloned()
            .unwrap_or_else(|| PageId::new(from));

        match self.progress.mark_complete(&from_id) {
            Completion::Newly => {
                effects.extend(self.award_stars(COMPLETION_STARS));
                effects.push(Effect::Motivation(motivation::pick(&mut self.rng)));
                let progress = self.progress.progress();
                info!(page = %from_id, completed = progress.completed, percent = progress.percent, "page completed");
            }
            Completion::Already => debug!(page = %from_id, "page already complete"),
            Completion::NotTracked => debug!(page = %from_id, "page does not count toward progress"),
        }

        if let Ok(nav) = self.navigate_to(to) {
            effects.extend(nav);
        }
        effects
    }

    //
    // ─── REWARDS ───────────────────────────────────────────────────────────────
    //

    /// Add `stars` to the total. Awarding zero does nothing.
    pub fn award_stars(&mut self, stars: u32) -> Vec<Effect> {
        if stars == 0 {
            return Vec::new();
        }
        let total = self.stars.award(stars);
        debug!(awarded = stars, total, "stars awarded");
        vec![Effect::PulseStars { total }]
    }

    //
    // ─── EXERCISES ─────────────────────────────────────────────────────────────
    //

    /// Re-check a fill-in-the-blank field after its value changed.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::UnknownExercise` if `key` is not a blank.
    pub fn check_fill(&mut self, key: &ExerciseKey, input: &str) -> Result<Vec<Effect>, LessonError> {
        let policy = self.settings.fill_award();
        let blank = self
            .board
            .fills
            .get_mut(key)
            .ok_or_else(|| LessonError::UnknownExercise(key.clone()))?;
        let earned = blank.check(input, policy);
        Ok(self.award_stars(earned))
    }

    #[must_use]
    pub fn fill_mark(&self, key: &ExerciseKey) -> Mark {
        self.board
            .fills
            .get(key)
            .map_or(Mark::Neutral, |blank| blank.mark())
    }

    /// Text last typed into a blank, empty if never touched.
    #[must_use]
    pub fn fill_value(&self, key: &ExerciseKey) -> &str {
        self.board.fills.get(key).map_or("", |blank| blank.value())
    }

    /// Lock in an answer for a true/false statement.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::UnknownExercise` if `key` is not a true/false block.
    pub fn choose_true_false(
        &mut self,
        key: &ExerciseKey,
        choice: TfChoice,
    ) -> Result<Vec<Effect>, LessonError> {
        let statement = self
            .board
            .true_false
            .get_mut(key)
            .ok_or_else(|| LessonError::UnknownExercise(key.clone()))?;
        let earned = statement.choose(choice);
        debug!(exercise = %key, choice = choice.label(), earned, "true/false answered");
        Ok(self.award_stars(earned))
    }

    #[must_use]
    pub fn true_false(&self, key: &ExerciseKey) -> Option<&TrueFalse> {
        self.board.true_false.get(key)
    }

    /// Select one option of an option list. Each option can be marked once.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::UnknownExercise` if `key` is not an option.
    pub fn select_option(&mut self, key: &ExerciseKey) -> Result<Vec<Effect>, LessonError> {
        let (result, choice) = self
            .board
            .options
            .get_mut(key)
            .ok_or_else(|| LessonError::UnknownExercise(key.clone()))?;
        let earned = choice.select(*result);
        Ok(self.award_stars(earned))
    }

    #[must_use]
    pub fn option_mark(&self, key: &ExerciseKey) -> Mark {
        self.board
            .options
            .get(key)
            .map_or(Mark::Neutral, |(_, choice)| choice.mark())
    }

    //
    // ─── UNGRADED CONTROLS ─────────────────────────────────────────────────────
    //

    /// # Errors
    ///
    /// Returns `LessonError::UnknownExercise` if `key` is not a reveal block.
    pub fn toggle_reveal(&mut self, key: &ExerciseKey) -> Result<(), LessonError> {
        exercise_mut(&mut self.board.reveals, key)?.toggle();
        Ok(())
    }

    #[must_use]
    pub fn reveal(&self, key: &ExerciseKey) -> RevealToggle {
        self.board.reveals.get(key).copied().unwrap_or_default()
    }

    /// # Errors
    ///
    /// Returns `LessonError::UnknownExercise` if `key` is not a flashcard.
    pub fn flip_flashcard(&mut self, key: &ExerciseKey) -> Result<(), LessonError> {
        exercise_mut(&mut self.board.flashcards, key)?.flip();
        Ok(())
    }

    #[must_use]
    pub fn flashcard(&self, key: &ExerciseKey) -> Flashcard {
        self.board.flashcards.get(key).copied().unwrap_or_default()
    }

    /// # Errors
    ///
    /// Returns `LessonError::UnknownExercise` if `key` is not a long-answer block.
    pub fn toggle_long_answer(&mut self, key: &ExerciseKey) -> Result<(), LessonError> {
        exercise_mut(&mut self.board.long_answers, key)?.toggle();
        Ok(())
    }

    #[must_use]
    pub fn long_answer(&self, key: &ExerciseKey) -> LongAnswer {
        self.board.long_answers.get(key).copied().unwrap_or_default()
    }

    /// # Errors
    ///
    /// Returns `LessonError::UnknownExercise` if `key` is not an anchor demo.
    pub fn set_anchor_text(&mut self, key: &ExerciseKey, text: &str) -> Result<(), LessonError> {
        exercise_mut(&mut self.board.anchors, key)?.set_text(text);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `LessonError::UnknownExercise` if `key` is not an anchor demo.
    pub fn set_anchor_url(&mut self, key: &ExerciseKey, url: &str) -> Result<(), LessonError> {
        exercise_mut(&mut self.board.anchors, key)?.set_url(url);
        Ok(())
    }

    #[must_use]
    pub fn anchor_draft(&self, key: &ExerciseKey) -> Option<&AnchorDraft> {
        self.board.anchors.get(key)
    }

    //
    // ─── QUIZ ──────────────────────────────────────────────────────────────────
    //

    /// Answer the question on screen. A correct first answer earns a star.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::Quiz` for an option index out of range.
    pub fn answer_question(&mut self, chosen: usize) -> Result<Vec<Effect>, LessonError> {
        let outcome = self.quiz.answer(chosen)?;
        Ok(match outcome {
            AnswerOutcome::Correct => self.award_stars(1),
            AnswerOutcome::Wrong | AnswerOutcome::Ignored => Vec::new(),
        })
    }

    /// Leave the feedback for the current question. Finishing the quiz grants
    /// the tier bonus, records a report and may request a celebration.
    pub fn next_question(&mut self) -> Vec<Effect> {
        let AdvanceOutcome::Finished(result) = self.quiz.advance() else {
            return Vec::new();
        };

        let report = QuizReport::new(result, self.clock.now());
        info!(
            score = report.score,
            total = report.total,
            percent = report.percent,
            tier = ?report.tier,
            "quiz finished"
        );
        self.last_report = Some(report);

        let mut effects = self.award_stars(result.tier.bonus_stars());
        if result.tier.celebrates() {
            effects.push(Effect::Celebrate);
        }
        effects
    }

    /// Start the quiz over. Stars already earned and the last report are kept.
    pub fn restart_quiz(&mut self) {
        self.quiz.restart();
        debug!("quiz restarted");
    }

    //
    // ─── ACCESSORS ─────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn content(&self) -> &LessonContent {
        &self.content
    }

    #[must_use]
    pub fn settings(&self) -> &LessonSettings {
        &self.settings
    }

    #[must_use]
    pub fn active_page_id(&self) -> &PageId {
        self.navigator.active()
    }

    #[must_use]
    pub fn active_page(&self) -> Option<&Page> {
        self.content.page(self.navigator.active())
    }

    #[must_use]
    pub fn is_active(&self, page: &PageId) -> bool {
        self.navigator.is_active(page)
    }

    #[must_use]
    pub fn is_complete(&self, page: &PageId) -> bool {
        self.progress.is_complete(page)
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress.progress()
    }

    #[must_use]
    pub fn total_stars(&self) -> u32 {
        self.stars.total()
    }

    #[must_use]
    pub fn quiz(&self) -> &QuizEngine {
        &self.quiz
    }

    #[must_use]
    pub fn quiz_report(&self) -> Option<&QuizReport> {
        self.last_report.as_ref()
    }

    #[must_use]
    pub fn teacher_report(&self) -> TeacherReport {
        TeacherReport::new(self.progress(), self.total_stars(), self.last_report)
    }
}

fn exercise_mut<'a, T>(
    exercises: &'a mut BTreeMap<ExerciseKey, T>,
    key: &ExerciseKey,
) -> Result<&'a mut T, LessonError> {
    exercises
        .get_mut(key)
        .ok_or_else(|| LessonError::UnknownExercise(key.clone()))
}
