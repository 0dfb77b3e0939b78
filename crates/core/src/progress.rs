use std::collections::BTreeSet;

use crate::model::PageId;

/// Number of concept pages that count toward lesson completion.
pub const TOTAL_PAGES: usize = 6;

/// `round(100 * part / whole)` with halves rounded up, clamped to 100.
///
/// Returns 0 when `whole` is 0.
#[must_use]
pub fn round_percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole) as u64;
    let whole = whole as u64;
    let pct = (200 * part + whole) / (2 * whole);
    u32::try_from(pct).unwrap_or(100)
}

/// Result of marking a page complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// First completion of a tracked page.
    Newly,
    /// The page was already complete.
    Already,
    /// The page does not count toward progress.
    NotTracked,
}

/// Derived completion figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub percent: u32,
}

impl Progress {
    /// `"X/TOTAL"`, as shown in the teacher report.
    #[must_use]
    pub fn fraction(&self) -> String {
        format!("{}/{}", self.completed, self.total)
    }
}

/// Set of completed pages, restricted to the pages that count toward progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressTracker {
    tracked: BTreeSet<PageId>,
    completed: BTreeSet<PageId>,
}

impl ProgressTracker {
    /// Track completion for `pages`. At most `TOTAL_PAGES` of them are kept.
    #[must_use]
    pub fn new(pages: impl IntoIterator<Item = PageId>) -> Self {
        let tracked = pages.into_iter().take(TOTAL_PAGES).collect();
        Self {
            tracked,
            completed: BTreeSet::new(),
        }
    }

    pub fn mark_complete(&mut self, page: &PageId) -> Completion {
        if !self.tracked.contains(page) {
            return Completion::NotTracked;
        }
        if self.completed.insert(page.clone()) {
            Completion::Newly
        } else {
            Completion::Already
        }
    }

    #[must_use]
    pub fn is_complete(&self, page: &PageId) -> bool {
        self.completed.contains(page)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        let completed = self.completed.len();
        Progress {
            completed,
            total: TOTAL_PAGES,
            percent: round_percent(completed, TOTAL_PAGES),
        }
    }

    pub fn reset(&mut self) {
        self.completed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concept_pages() -> Vec<PageId> {
        (1..=TOTAL_PAGES)
            .map(|n| PageId::new(format!("page-concept-{n}")))
            .collect()
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(round_percent(0, 6), 0);
        assert_eq!(round_percent(1, 6), 17);
        assert_eq!(round_percent(3, 6), 50);
        assert_eq!(round_percent(5, 6), 83);
        assert_eq!(round_percent(6, 6), 100);
        assert_eq!(round_percent(1, 8), 13);
        assert_eq!(round_percent(9, 10), 90);
        assert_eq!(round_percent(0, 0), 0);
    }

    #[test]
    fn percent_matches_formula_for_every_count() {
        let pages = concept_pages();
        let mut tracker = ProgressTracker::new(pages.clone());
        for (done, page) in pages.iter().enumerate() {
            tracker.mark_complete(page);
            let progress = tracker.progress();
            let expected = (100.0 * (done + 1) as f64 / TOTAL_PAGES as f64).round() as u32;
            assert_eq!(progress.percent, expected);
            assert!(progress.percent <= 100);
        }
    }

    #[test]
    fn repeated_completion_is_idempotent() {
        let pages = concept_pages();
        let mut tracker = ProgressTracker::new(pages.clone());
        assert_eq!(tracker.mark_complete(&pages[0]), Completion::Newly);
        assert_eq!(tracker.mark_complete(&pages[0]), Completion::Already);
        assert_eq!(tracker.completed_count(), 1);
        assert_eq!(tracker.progress().fraction(), "1/6");
    }

    #[test]
    fn untracked_pages_never_count() {
        let mut tracker = ProgressTracker::new(concept_pages());
        let quiz = PageId::from_static("page-quiz");
        assert_eq!(tracker.mark_complete(&quiz), Completion::NotTracked);
        assert_eq!(tracker.completed_count(), 0);
    }

    #[test]
    fn completed_never_exceeds_total_pages() {
        let many = (0..20).map(|n| PageId::new(format!("p{n}")));
        let mut tracker = ProgressTracker::new(many);
        for n in 0..20 {
            tracker.mark_complete(&PageId::new(format!("p{n}")));
        }
        assert!(tracker.completed_count() <= TOTAL_PAGES);
        assert_eq!(tracker.progress().percent, 100);
    }

    #[test]
    fn reset_clears_completion() {
        let pages = concept_pages();
        let mut tracker = ProgressTracker::new(pages.clone());
        tracker.mark_complete(&pages[2]);
        tracker.reset();
        assert!(!tracker.is_complete(&pages[2]));
        assert_eq!(tracker.progress().percent, 0);
    }
}
