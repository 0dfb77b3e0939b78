/// Running total of reward stars.
///
/// The total only grows; `reset` is the single way back to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StarLedger {
    total: u32,
}

impl StarLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `stars` to the total and return the new total.
    ///
    /// Awarding zero stars leaves the ledger untouched.
    pub fn award(&mut self, stars: u32) -> u32 {
        self.total = self.total.saturating_add(stars);
        self.total
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn reset(&mut self) {
        self.total = 0;
    }
}
