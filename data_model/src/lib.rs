//! Crate with Detective data structures which are transferred between the web app and the
//! analysis service.

use serde::{Deserialize, Serialize};

/// Body of the `analyze-url` request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Url to be analyzed, exactly as the user entered it.
    pub url: String,
}

impl AnalysisRequest {
    /// Create a new request for `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Number of headings on a page grouped by their level.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeadingsCount {
    pub h1: u32,
    pub h2: u32,
    pub h3: u32,
    pub h4: u32,
    pub h5: u32,
    pub h6: u32,
}

impl HeadingsCount {
    /// Counts ordered from `h1` to `h6`.
    #[must_use]
    pub const fn by_level(&self) -> [u32; 6] {
        [self.h1, self.h2, self.h3, self.h4, self.h5, self.h6]
    }
}

/// Number of links on a page grouped by whether they point to the same host.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinksCount {
    /// Links pointing to other hosts.
    pub external: u32,
    /// Links pointing to the analyzed host.
    pub internal: u32,
}

/// Report of the analysis of a single page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// HTML version mentioned in the doctype.
    pub html_version: String,
    /// Content of the `title` tag.
    pub page_title: String,
    pub headings_count: HeadingsCount,
    pub links_count: LinksCount,
    /// Links that didn't answer a `GET` with a 2xx status.
    pub inaccessible_links_count: u32,
    /// Whether the page contains a login form.
    pub has_login_form: bool,
}

/// Envelope of every `analyze-url` response.
///
/// The service fills `result` on success and `error` on failure. The other field is either
/// absent, `null` or empty.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub result: Option<AnalysisResult>,
    #[serde(default)]
    pub error: Option<String>,
    /// Mirrors the HTTP status, informational only.
    #[serde(default)]
    pub code: Option<i64>,
}

impl AnalysisResponse {
    /// Error message provided by the service, if it's not blank.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
    }
}
