use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use lesson_core::time::fixed_now;
use lesson_core::{Clock, LessonContent};
use services::{LessonSession, LessonSettings};

use super::{LessonShell, LessonUi};
use crate::context::{UiApp, build_app_context};

struct TestApp {
    content: Arc<LessonContent>,
}

impl UiApp for TestApp {
    fn content(&self) -> Arc<LessonContent> {
        Arc::clone(&self.content)
    }

    fn settings(&self) -> LessonSettings {
        LessonSettings::default()
    }

    fn clock(&self) -> Clock {
        Clock::fixed(fixed_now())
    }

    fn seed(&self) -> Option<u64> {
        Some(11)
    }
}

#[derive(Props, Clone)]
struct ShellHarnessProps {
    session: LessonSession,
}

impl PartialEq for ShellHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ShellHarness(props: ShellHarnessProps) -> Element {
    let session = use_signal(|| props.session.clone());
    use_context_provider(|| LessonUi::new(session));
    rsx! { LessonShell {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Render the lesson shell over a session prepared by `prepare`.
pub fn setup_view_harness(prepare: impl FnOnce(&mut LessonSession)) -> ViewHarness {
    let content = Arc::new(LessonContent::links_and_frames().expect("built-in lesson"));
    let app: Arc<dyn UiApp> = Arc::new(TestApp { content });
    let ctx = build_app_context(&app).expect("app context");

    let mut session = ctx.new_session();
    prepare(&mut session);

    let dom = VirtualDom::new_with_props(ShellHarness, ShellHarnessProps { session });
    let mut harness = ViewHarness { dom };
    harness.rebuild();
    harness
}

/// Answer every quiz question, the first `correct` of them correctly.
pub fn play_quiz(session: &mut LessonSession, correct: usize) {
    let answers: Vec<usize> = session
        .content()
        .questions()
        .iter()
        .map(|q| q.correct_index())
        .collect();
    for (i, right) in answers.into_iter().enumerate() {
        let chosen = if i < correct { right } else { (right + 1) % 4 };
        session.answer_question(chosen).expect("valid option");
        session.next_question();
    }
}
