use rand::Rng;

pub const MESSAGES: [&str; 6] = [
    "🎉 Awesome! Keep going!",
    "⭐ You're a superstar!",
    "🚀 Rocketing through!",
    "💪 Crushing it!",
    "🌟 You're amazing!",
    "🔥 On fire today!",
];

/// How long a toast stays on screen.
pub const TOAST_MILLIS: u64 = 2_500;

pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    MESSAGES[rng.random_range(0..MESSAGES.len())]
}
