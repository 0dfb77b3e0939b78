use std::collections::BTreeMap;
use std::time::Duration;

use dioxus::core::{Task, spawn_forever};
use dioxus::document::eval;
use dioxus::prelude::*;
use lesson_core::confetti::{Confetti, FrameStatus, Sprite, Surface};
use services::motivation::TOAST_MILLIS;
use services::{Effect, LessonError, LessonSession};
use tracing::{debug, warn};

use super::scripts::SCROLL_TO_TOP;

/// How long the star counter stays emphasized after an award.
pub const PULSE_MILLIS: u64 = 400;
/// Roughly one display refresh.
pub const FRAME_MILLIS: u64 = 16;
/// Confetti is simulated in this space and scaled to the window by the SVG viewBox.
pub const VIEWPORT: (f64, f64) = (1280.0, 800.0);

/// Session plus the transient presentation state driven by its effects.
///
/// Timers are spawned on the root scope so they survive the panel that
/// triggered them being swapped out.
#[derive(Clone, Copy)]
pub struct LessonUi {
    pub session: Signal<LessonSession>,
    pub pulse: Signal<bool>,
    pub toast: Signal<Option<&'static str>>,
    pub confetti: Signal<BTreeMap<u64, Vec<Sprite>>>,
    pulse_task: Signal<Option<Task>>,
    toast_task: Signal<Option<Task>>,
    next_run: Signal<u64>,
}

impl LessonUi {
    #[must_use]
    pub fn new(session: Signal<LessonSession>) -> Self {
        Self {
            session,
            pulse: Signal::new(false),
            toast: Signal::new(None),
            confetti: Signal::new(BTreeMap::new()),
            pulse_task: Signal::new(None),
            toast_task: Signal::new(None),
            next_run: Signal::new(0),
        }
    }

    /// Run a session operation and play the effects it returns.
    pub fn dispatch(self, op: impl FnOnce(&mut LessonSession) -> Vec<Effect>) {
        let mut session = self.session;
        let effects = {
            let mut guard = session.write();
            op(&mut *guard)
        };
        self.play(effects);
    }

    /// Like [`LessonUi::dispatch`] for fallible operations. Rejections are
    /// logged and leave the display as it was.
    pub fn try_dispatch(
        self,
        op: impl FnOnce(&mut LessonSession) -> Result<Vec<Effect>, LessonError>,
    ) {
        let mut session = self.session;
        let result = {
            let mut guard = session.write();
            op(&mut *guard)
        };
        match result {
            Ok(effects) => self.play(effects),
            Err(err) => warn!(%err, "lesson action rejected"),
        }
    }

    /// Apply a fallible update that has no effects to play.
    pub fn try_update(self, op: impl FnOnce(&mut LessonSession) -> Result<(), LessonError>) {
        self.try_dispatch(|session| op(session).map(|()| Vec::new()));
    }

    fn play(self, effects: Vec<Effect>) {
        for effect in effects {
            debug!(?effect, "play effect");
            match effect {
                Effect::PulseStars { .. } => self.pulse_stars(),
                Effect::Motivation(message) => self.show_toast(message),
                Effect::ScrollToTop => {
                    let _ = eval(SCROLL_TO_TOP);
                }
                Effect::Celebrate => self.celebrate(),
            }
        }
    }

    fn pulse_stars(self) {
        let mut pulse = self.pulse;
        let mut pulse_task = self.pulse_task;
        if let Some(task) = pulse_task.take() {
            task.cancel();
        }
        pulse.set(true);
        let task = spawn_forever(async move {
            tokio::time::sleep(Duration::from_millis(PULSE_MILLIS)).await;
            pulse.set(false);
        });
        pulse_task.set(task.into());
    }

    fn show_toast(self, message: &'static str) {
        let mut toast = self.toast;
        let mut toast_task = self.toast_task;
        if let Some(task) = toast_task.take() {
            task.cancel();
        }
        toast.set(Some(message));
        let task = spawn_forever(async move {
            tokio::time::sleep(Duration::from_millis(TOAST_MILLIS)).await;
            toast.set(None);
        });
        toast_task.set(task.into());
    }

    fn celebrate(self) {
        let mut confetti = self.confetti;
        let mut next_run = self.next_run;
        let run = next_run();
        next_run.set(run.wrapping_add(1));

        let (width, height) = VIEWPORT;
        let mut simulation = Confetti::launch(width, height, &mut rand::rng());
        debug!(run, particles = simulation.particles().len(), "confetti launched");

        let _ = spawn_forever(async move {
            loop {
                let mut frame = SpriteFrame::default();
                let status = simulation.tick(&mut frame);
                match status {
                    FrameStatus::Running => {
                        confetti.write().insert(run, frame.sprites);
                    }
                    FrameStatus::Finished => {
                        confetti.write().remove(&run);
                        break;
                    }
                }
                tokio::time::sleep(Duration::from_millis(FRAME_MILLIS)).await;
            }
        });
    }
}

/// Collects one frame's sprites for the SVG overlay.
#[derive(Default)]
struct SpriteFrame {
    sprites: Vec<Sprite>,
}

impl Surface for SpriteFrame {
    fn clear(&mut self) {
        self.sprites.clear();
    }

    fn draw(&mut self, sprite: Sprite) {
        self.sprites.push(sprite);
    }
}
