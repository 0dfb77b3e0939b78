use lesson_core::content::{PRACTICE_PAGE, QUIZ_PAGE, REPORT_PAGE};
use lesson_core::exercises::TfChoice;
use lesson_core::{Block, LessonContent, PageId};
use services::ExerciseKey;

use super::test_harness::{play_quiz, setup_view_harness};

fn block_key(content: &LessonContent, page: &'static str, pick: fn(&Block) -> bool) -> ExerciseKey {
    let page = content.page(&PageId::from_static(page)).unwrap();
    let index = page.blocks.iter().position(pick).unwrap();
    ExerciseKey::block(page.id.clone(), index)
}

#[test]
fn home_view_smoke_renders_header_and_concepts() {
    let harness = setup_view_harness(|_| {});
    let html = harness.render();
    assert!(html.contains("Chapter 6: Links &amp; Frames in HTML") || html.contains("Chapter 6: Links & Frames in HTML"), "missing title in {html}");
    assert!(html.contains("⭐ 0"), "missing star count in {html}");
    assert!(html.contains("0% Complete"), "missing progress in {html}");
    assert!(html.contains("id=\"page-home\""), "home panel not active in {html}");
    assert_eq!(html.matches("concept-card").count(), 6, "expected six cards in {html}");
}

#[test]
fn concept_view_smoke_after_completion() {
    let harness = setup_view_harness(|session| {
        session.complete_and_navigate("page-anchor", "page-link-states");
    });
    let html = harness.render();
    assert!(html.contains("⭐ 2"), "missing stars in {html}");
    assert!(html.contains("17% Complete"), "missing progress in {html}");
    assert!(html.contains("width: 17%;"), "missing bar width in {html}");
    assert!(html.contains("id=\"page-link-states\""), "wrong panel in {html}");
    assert!(html.contains("Complete &amp; Continue") || html.contains("Complete & Continue"));
    assert_eq!(html.matches("class=\"panel active\"").count(), 1);
    assert!(html.contains("nav-done"), "missing completion mark in {html}");
}

#[test]
fn anchor_demo_smoke_uses_defaults() {
    let harness = setup_view_harness(|session| {
        session.navigate_to("page-anchor").unwrap();
    });
    let html = harness.render();
    assert!(html.contains("anchor-demo-code"), "missing preview in {html}");
    assert!(html.contains("Click Me!"), "missing default text in {html}");
    assert!(html.contains("flashcard"), "missing flashcards in {html}");
}

#[test]
fn quiz_view_smoke_renders_first_question() {
    let harness = setup_view_harness(|session| {
        session.navigate_to(QUIZ_PAGE).unwrap();
    });
    let html = harness.render();
    assert!(html.contains("Question 1 of 10"), "missing progress text in {html}");
    assert!(html.contains("Q1. What is the HTML tag used to create a hyperlink?"));
    assert_eq!(html.matches("class=\"quiz-option\"").count(), 4);
    assert!(!html.contains("quiz-feedback"), "feedback shown early in {html}");
}

#[test]
fn quiz_view_smoke_shows_feedback_after_wrong_answer() {
    let harness = setup_view_harness(|session| {
        session.navigate_to(QUIZ_PAGE).unwrap();
        session.answer_question(0).unwrap();
    });
    let html = harness.render();
    assert!(html.contains("Not quite!"), "missing feedback in {html}");
    assert!(html.contains("quiz-option correct"), "correct option not marked in {html}");
    assert!(html.contains("quiz-option wrong"), "chosen option not marked in {html}");
    assert!(html.contains("Next Question"), "missing advance control in {html}");
}

#[test]
fn quiz_view_smoke_shows_results() {
    let harness = setup_view_harness(|session| {
        session.navigate_to(QUIZ_PAGE).unwrap();
        play_quiz(session, 7);
    });
    let html = harness.render();
    assert!(html.contains("Great Job!"), "missing tier title in {html}");
    assert!(html.contains("⭐⭐⭐⭐"), "missing rating in {html}");
    assert!(html.contains("Try Again"), "missing restart in {html}");
    assert!(html.contains("⭐ 13"), "missing stars in {html}");
}

#[test]
fn practice_view_smoke_reveals_true_false() {
    let harness = setup_view_harness(|session| {
        session.navigate_to(PRACTICE_PAGE).unwrap();
        let page = session
            .content()
            .page(&PageId::from_static(PRACTICE_PAGE))
            .unwrap()
            .clone();
        let index = page
            .blocks
            .iter()
            .position(|block| matches!(block, Block::TrueFalse { .. }))
            .unwrap();
        let key = ExerciseKey::block(page.id.clone(), index);
        session.choose_true_false(&key, TfChoice::True).unwrap();
    });
    let html = harness.render();
    assert_eq!(html.matches("tf-reveal").count(), 1, "expected one reveal in {html}");
    assert!(html.contains("tf-btn correct"), "missing mark in {html}");
    assert!(html.contains("fill-input"), "missing blanks in {html}");
    assert!(html.contains("Take the Quiz"), "missing quiz link in {html}");
}

#[test]
fn report_view_smoke_before_and_after_quiz() {
    let harness = setup_view_harness(|session| {
        session.navigate_to(REPORT_PAGE).unwrap();
    });
    let html = harness.render();
    assert!(html.contains("0/6"), "missing concepts in {html}");
    assert!(html.contains("0 ⭐"), "missing stars in {html}");

    let harness = setup_view_harness(|session| {
        play_quiz(session, 10);
        session.navigate_to(REPORT_PAGE).unwrap();
    });
    let html = harness.render();
    assert!(html.contains("10/10 (100%)"), "missing quiz result in {html}");
    assert!(html.contains("2023-11-14 22:13 UTC"), "missing timestamp in {html}");
}

#[test]
fn practice_view_smoke_keeps_typed_blank_after_returning() {
    let harness = setup_view_harness(|session| {
        session.navigate_to(PRACTICE_PAGE).unwrap();
        let key = block_key(session.content(), PRACTICE_PAGE, |b| {
            matches!(b, Block::FillBlank { .. })
        });
        session.check_fill(&key, "href").unwrap();
        session.navigate_to(QUIZ_PAGE).unwrap();
        session.navigate_to(PRACTICE_PAGE).unwrap();
    });
    let html = harness.render();
    assert!(html.contains("value=\"href\""), "typed text lost in {html}");
    assert_eq!(html.matches("fill-input correct").count(), 1, "expected one correct blank in {html}");
}

#[test]
fn concept_view_smoke_keeps_widget_state_after_returning() {
    let harness = setup_view_harness(|session| {
        let deck = block_key(session.content(), "page-anchor", |b| matches!(b, Block::Flashcards(_)));
        let demo = block_key(session.content(), "page-anchor", |b| matches!(b, Block::AnchorDemo));
        session.navigate_to("page-anchor").unwrap();
        session.flip_flashcard(&deck).unwrap();
        session.set_anchor_text(&demo, "Home").unwrap();
        session.navigate_to(QUIZ_PAGE).unwrap();
        session.navigate_to("page-anchor").unwrap();
    });
    let html = harness.render();
    assert_eq!(html.matches("flashcard flipped").count(), 1, "expected one flipped card in {html}");
    assert!(html.contains("value=\"Home\""), "demo input lost in {html}");
    assert!(
        html.contains("Home&lt;/A&gt;") || html.contains("Home</A>"),
        "preview not rebuilt in {html}"
    );
}

#[test]
fn practice_view_smoke_keeps_open_explanations_after_returning() {
    let harness = setup_view_harness(|session| {
        let reveal = block_key(session.content(), PRACTICE_PAGE, |b| matches!(b, Block::Reveal { .. }));
        let long = block_key(session.content(), PRACTICE_PAGE, |b| {
            matches!(b, Block::LongAnswer { .. })
        });
        session.toggle_reveal(&reveal).unwrap();
        session.toggle_long_answer(&long).unwrap();
        session.navigate_to(PRACTICE_PAGE).unwrap();
    });
    let html = harness.render();
    assert!(html.contains("reveal-btn success"), "reveal closed in {html}");
    assert!(html.contains("rotate(180deg)"), "long answer collapsed in {html}");
    assert_eq!(html.matches("la-answer").count(), 1);
}
