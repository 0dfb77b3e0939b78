use thiserror::Error;
use tracing::{debug, warn};

use crate::model::PageId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NavigationError {
    #[error("page not found: {0}")]
    UnknownPage(String),
}

/// Tracks which panel is visible. Exactly one panel is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    pages: Vec<PageId>,
    home: PageId,
    active: PageId,
}

impl Navigator {
    /// # Errors
    ///
    /// Returns `NavigationError::UnknownPage` if `home` is not one of `pages`.
    pub fn new(pages: Vec<PageId>, home: &str) -> Result<Self, NavigationError> {
        let home = pages
            .iter()
            .find(|page| page.as_str() == home)
            .cloned()
            .ok_or_else(|| NavigationError::UnknownPage(home.to_string()))?;
        Ok(Self {
            active: home.clone(),
            home,
            pages,
        })
    }

    /// Resolve `page_id` against the known panels.
    #[must_use]
    pub fn resolve(&self, page_id: &str) -> Option<&PageId> {
        self.pages.iter().find(|page| page.as_str() == page_id)
    }

    /// Make `page_id` the only active panel.
    ///
    /// Unknown ids are logged and leave the active panel unchanged.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::UnknownPage` when `page_id` is not a known panel.
    pub fn navigate_to(&mut self, page_id: &str) -> Result<&PageId, NavigationError> {
        let Some(target) = self.resolve(page_id).cloned() else {
            warn!(page = page_id, "page not found");
            return Err(NavigationError::UnknownPage(page_id.to_string()));
        };
        debug!(from = %self.active, to = %target, "navigate");
        self.active = target;
        Ok(&self.active)
    }

    #[must_use]
    pub fn active(&self) -> &PageId {
        &self.active
    }

    #[must_use]
    pub fn is_active(&self, page: &PageId) -> bool {
        &self.active == page
    }

    #[must_use]
    pub fn home(&self) -> &PageId {
        &self.home
    }

    #[must_use]
    pub fn pages(&self) -> &[PageId] {
        &self.pages
    }

    pub fn go_home(&mut self) {
        self.active = self.home.clone();
    }
}
