/// Side effects requested by a session operation.
///
/// The session never schedules anything itself; the UI interprets these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Emphasize the star counter, which now reads `total`.
    PulseStars { total: u32 },
    /// Show a transient encouragement toast.
    Motivation(&'static str),
    /// Smooth-scroll the viewport back to the top.
    ScrollToTop,
    /// Launch a confetti run.
    Celebrate,
}
