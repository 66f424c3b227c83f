//! Module with [`ResultRenderer`] and the [`ResultView`] it projects onto the page.

use detective_data_model::AnalysisResult;
use tracing::debug;

/// Status banner variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BannerKind {
    Success,
    Failure,
}

impl BannerKind {
    /// CSS class of the banner.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Success => "alert alert-success",
            Self::Failure => "alert alert-danger",
        }
    }
}

/// Status banner on top of the result box.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

/// Slots of the heading-count table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeadingsTable {
    /// Counts from `h1` to `h6`.
    pub counts: [String; 6],
}

/// Slots of the detail table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DetailsTable {
    pub page_title: String,
    pub html_version: String,
    pub internal_links: String,
    pub external_links: String,
    pub inaccessible_links: String,
    /// `Yes` or `No`.
    pub has_login_form: &'static str,
}

/// Both result tables, only present after a successful analysis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tables {
    pub headings: HeadingsTable,
    pub details: DetailsTable,
}

/// Everything shown inside the result box.
///
/// The box itself is hidden until the first view is shown.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResultView {
    pub banner: Banner,
    /// `None` hides both tables.
    pub tables: Option<Tables>,
}

impl ResultView {
    /// View of a successful analysis of `url`.
    #[must_use]
    pub fn success(url: &str, result: &AnalysisResult) -> Self {
        let headings = HeadingsTable {
            counts: result.headings_count.by_level().map(|count| count.to_string()),
        };
        let details = DetailsTable {
            page_title: result.page_title.clone(),
            html_version: result.html_version.clone(),
            internal_links: result.links_count.internal.to_string(),
            external_links: result.links_count.external.to_string(),
            inaccessible_links: result.inaccessible_links_count.to_string(),
            has_login_form: yes_no(result.has_login_form),
        };

        Self {
            banner: Banner {
                kind: BannerKind::Success,
                message: format!("Success! Result for url: {url}"),
            },
            tables: Some(Tables { headings, details }),
        }
    }

    /// View of a failed analysis.
    #[must_use]
    pub fn failure(message: &str) -> Self {
        Self {
            banner: Banner {
                kind: BannerKind::Failure,
                message: format!("Failed! {message}"),
            },
            tables: None,
        }
    }

    /// Check if the result tables are visible.
    #[must_use]
    pub const fn tables_visible(&self) -> bool {
        self.tables.is_some()
    }
}

const fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// Part of the page showing analysis results.
#[cfg_attr(test, mockall::automock)]
pub trait ResultSink {
    /// Reveal the result box with `view`, replacing whatever was shown before.
    fn show(&self, view: ResultView);
}

/// Projects analysis outcomes onto a [`ResultSink`].
///
/// Holds no state of its own and never touches the form lock.
#[derive(Debug)]
pub struct ResultRenderer<S> {
    sink: S,
}

impl<S: ResultSink> ResultRenderer<S> {
    /// Create a new renderer writing into `sink`.
    pub const fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Show `result` of the analysis of `url`.
    pub fn render_success(&self, url: &str, result: &AnalysisResult) {
        debug!(url, "Rendering analysis result");
        self.sink.show(ResultView::success(url, result));
    }

    /// Show the failure `message` and hide the result tables.
    pub fn render_error(&self, message: &str) {
        debug!(message, "Rendering analysis failure");
        self.sink.show(ResultView::failure(message));
    }
}
