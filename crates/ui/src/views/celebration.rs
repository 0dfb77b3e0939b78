use dioxus::prelude::*;
use lesson_core::confetti::Sprite;

use super::LessonUi;
use super::state::VIEWPORT;

/// Full-window SVG overlay for every confetti run in flight.
#[component]
pub fn CelebrationOverlay() -> Element {
    let ui = use_context::<LessonUi>();
    let runs = ui.confetti.read();
    if runs.is_empty() {
        return rsx! {};
    }
    let (width, height) = VIEWPORT;
    let view_box = format!("0 0 {width} {height}");

    rsx! {
        svg {
            class: "confetti",
            view_box: "{view_box}",
            preserve_aspect_ratio: "none",
            for (run, sprites) in runs.iter() {
                g { key: "{run}",
                    for sprite in sprites.iter() {
                        {sprite_node(sprite)}
                    }
                }
            }
        }
    }
}

fn sprite_node(sprite: &Sprite) -> Element {
    match *sprite {
        Sprite::Circle { cx, cy, r, color } => rsx! {
            circle { cx: "{cx}", cy: "{cy}", r: "{r}", fill: "{color}" }
        },
        Sprite::Rect {
            cx,
            cy,
            width,
            height,
            rotation,
            color,
        } => {
            let x = cx - width / 2.0;
            let y = cy - height / 2.0;
            let degrees = rotation.to_degrees();
            rsx! {
                rect {
                    x: "{x}",
                    y: "{y}",
                    width: "{width}",
                    height: "{height}",
                    fill: "{color}",
                    transform: "rotate({degrees} {cx} {cy})",
                }
            }
        }
    }
}
