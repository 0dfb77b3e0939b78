use lesson_core::Mark;

/// CSS modifier for a graded control.
#[must_use]
pub fn mark_class(mark: Mark) -> &'static str {
    match mark {
        Mark::Neutral => "",
        Mark::Correct => "correct",
        Mark::Wrong => "wrong",
    }
}
