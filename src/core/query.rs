//! Query parameters for listing and showing resources

use crate::core::transform::IncludeSet;
use serde::Deserialize;

/// Default number of items per list page
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// Query parameters for paginated list endpoints
///
/// # Example
/// ```text
/// GET /teachers?page=2
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ListParams {
    /// Page number (starts at 1)
    #[serde(default = "default_page")]
    pub page: usize,
}

fn default_page() -> usize {
    1
}

impl ListParams {
    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }
}

/// Query parameters for show endpoints
///
/// # Example
/// ```text
/// GET /teachers/1?include=lessons
/// GET /lessons/4?include=teacher
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ShowParams {
    /// Comma-separated relation names to embed
    pub include: Option<String>,
}

impl ShowParams {
    /// Parse the raw `include` parameter into a typed set
    pub fn includes(&self) -> IncludeSet {
        match &self.include {
            Some(raw) => IncludeSet::parse(raw),
            None => IncludeSet::empty(),
        }
    }
}
