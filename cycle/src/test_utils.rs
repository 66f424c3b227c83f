//! Test doubles shared by the submodules.

#![cfg(test)]
#![allow(clippy::expect_used, reason = "it's ok in tests")]

use std::{
    cell::RefCell,
    collections::VecDeque,
    future::{Future, pending},
    rc::Rc,
    time::Duration,
};

use detective_data_model::{AnalysisRequest, AnalysisResult, HeadingsCount, LinksCount};

use crate::{
    dispatch::{AnalysisError, Dispatch},
    gate::LockSurface,
    render::{ResultSink, ResultView},
    watchdog::Clock,
};

/// Result from the literal payload of the `analyze-url` documentation.
pub fn sample_result() -> AnalysisResult {
    AnalysisResult {
        html_version: "HTML5".to_owned(),
        page_title: "Example".to_owned(),
        headings_count: HeadingsCount {
            h1: 1,
            h2: 2,
            h3: 0,
            h4: 0,
            h5: 0,
            h6: 0,
        },
        links_count: LinksCount {
            external: 3,
            internal: 5,
        },
        inaccessible_links_count: 1,
        has_login_form: true,
    }
}

/// [`Clock`] backed by the (possibly paused) `tokio` timer.
#[derive(Debug, Clone, Copy)]
pub struct TokioClock;

impl Clock for TokioClock {
    type Sleep = tokio::time::Sleep;

    fn sleep(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }
}

/// [`LockSurface`] remembering every flag it was given.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    history: Rc<RefCell<Vec<bool>>>,
}

impl RecordingSurface {
    pub fn history(&self) -> Vec<bool> {
        self.history.borrow().clone()
    }

    pub fn is_locked(&self) -> bool {
        self.history.borrow().last().copied().unwrap_or(false)
    }
}

impl LockSurface for RecordingSurface {
    fn set_locked(&self, locked: bool) {
        self.history.borrow_mut().push(locked);
    }
}

/// [`ResultSink`] remembering every view it was given.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    views: Rc<RefCell<Vec<ResultView>>>,
}

impl RecordingSink {
    pub fn views(&self) -> Vec<ResultView> {
        self.views.borrow().clone()
    }

    pub fn last(&self) -> Option<ResultView> {
        self.views.borrow().last().cloned()
    }
}

impl ResultSink for RecordingSink {
    fn show(&self, view: ResultView) {
        self.views.borrow_mut().push(view);
    }
}

/// Scripted answer of [`FakeDispatcher`].
#[derive(Debug, Clone)]
pub struct Reply {
    /// `None` means the response never arrives.
    delay: Option<Duration>,
    outcome: Result<AnalysisResult, AnalysisError>,
}

impl Reply {
    pub const fn after(delay: Duration, outcome: Result<AnalysisResult, AnalysisError>) -> Self {
        Self {
            delay: Some(delay),
            outcome,
        }
    }

    pub fn never() -> Self {
        Self {
            delay: None,
            outcome: Err(AnalysisError::new("unreachable")),
        }
    }
}

/// [`Dispatch`] answering with scripted [`Reply`]s in order.
#[derive(Debug, Clone)]
pub struct FakeDispatcher {
    replies: Rc<RefCell<VecDeque<Reply>>>,
    urls: Rc<RefCell<Vec<String>>>,
}

impl FakeDispatcher {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: Rc::new(RefCell::new(replies.into_iter().collect())),
            urls: Rc::default(),
        }
    }

    /// Urls of every submitted request.
    pub fn urls(&self) -> Vec<String> {
        self.urls.borrow().clone()
    }
}

impl Dispatch for FakeDispatcher {
    fn submit(
        &self,
        request: AnalysisRequest,
    ) -> impl Future<Output = Result<AnalysisResult, AnalysisError>> {
        self.urls.borrow_mut().push(request.url);
        let reply = self
            .replies
            .borrow_mut()
            .pop_front()
            .expect("Unexpected request");

        async move {
            match reply.delay {
                Some(delay) => tokio::time::sleep(delay).await,
                None => pending::<()>().await,
            }
            reply.outcome
        }
    }
}
