use serde::{Deserialize, Serialize};

use lesson_core::content::HOME_PAGE;
use lesson_core::{FillAwardPolicy, PageId};

use crate::error::SettingsError;

/// Validated runtime configuration for a lesson session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonSettings {
    home_page: PageId,
    fill_award: FillAwardPolicy,
}

impl Default for LessonSettings {
    fn default() -> Self {
        Self {
            home_page: PageId::from_static(HOME_PAGE),
            fill_award: FillAwardPolicy::default(),
        }
    }
}

impl LessonSettings {
    #[must_use]
    pub fn home_page(&self) -> &PageId {
        &self.home_page
    }

    #[must_use]
    pub fn fill_award(&self) -> FillAwardPolicy {
        self.fill_award
    }
}

/// Raw settings as collected from flags and environment variables.
#[derive(Clone, Debug, Default)]
pub struct LessonSettingsDraft {
    pub home_page: Option<String>,
    pub fill_award: Option<String>,
}

impl LessonSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and normalize the draft. Blank values fall back to defaults.
    ///
    /// Whether the home page exists is checked when a session starts.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` for a home id containing whitespace or an
    /// unrecognized fill award policy.
    pub fn validate(self) -> Result<LessonSettings, SettingsError> {
        let home_page = match normalize_optional(self.home_page) {
            None => PageId::from_static(HOME_PAGE),
            Some(id) if id.chars().any(char::is_whitespace) => {
                return Err(SettingsError::InvalidHomePage(id));
            }
            Some(id) => PageId::new(id),
        };

        let fill_award = match normalize_optional(self.fill_award) {
            None => FillAwardPolicy::default(),
            Some(raw) => raw
                .parse()
                .map_err(|_| SettingsError::InvalidFillAward(raw))?,
        };

        Ok(LessonSettings {
            home_page,
            fill_award,
        })
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
