//! Module with [`SubmissionCycle`] which ties the gate, the dispatcher, the renderer and the
//! watchdog together.
//!
//! ```text
//! Idle --submit--> Locked --response--> Done   (disarm, render, unlock)
//!                  Locked --timeout---> Done   (unlock only)
//! ```
//!
//! `Done` is the `Idle` of the next cycle.

use std::pin::pin;

use detective_data_model::AnalysisRequest;
use futures_util::future::{Either, select};
use tracing::{info, instrument, warn};

use crate::{
    dispatch::Dispatch,
    gate::{FormGate, LockSurface},
    render::{ResultRenderer, ResultSink},
    watchdog::{Clock, WatchdogTimer},
};

/// How a single cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Another cycle was still running, nothing was sent.
    Refused,
    /// Result was rendered.
    Succeeded,
    /// Failure was rendered.
    Failed,
    /// Watchdog fired first, nothing was rendered.
    TimedOut,
}

/// Lifecycle of one "analyze url" submission.
#[derive(Debug)]
pub struct SubmissionCycle<D, C, L, S> {
    gate: FormGate<L>,
    dispatcher: D,
    watchdog: WatchdogTimer<C>,
    renderer: ResultRenderer<S>,
}

impl<D, C, L, S> SubmissionCycle<D, C, L, S>
where
    D: Dispatch,
    C: Clock,
    L: LockSurface,
    S: ResultSink,
{
    /// Assemble a new cycle from its parts.
    pub const fn new(
        gate: FormGate<L>,
        dispatcher: D,
        watchdog: WatchdogTimer<C>,
        renderer: ResultRenderer<S>,
    ) -> Self {
        Self {
            gate,
            dispatcher,
            watchdog,
            renderer,
        }
    }

    /// Gate of the form.
    pub const fn gate(&self) -> &FormGate<L> {
        &self.gate
    }

    /// Run the whole cycle for `url`.
    ///
    /// Refuses to start while the form is locked by a previous cycle. Otherwise the response and
    /// the watchdog race: the watchdog is disarmed in the same turn the response is observed, and
    /// a response still in flight when the watchdog fires is dropped and never rendered.
    #[instrument(skip(self))]
    pub async fn run(&self, url: String) -> Outcome {
        if self.gate.is_locked() {
            warn!("Another analysis is in progress, submission refused");
            return Outcome::Refused;
        }

        self.gate.lock();
        let mut watchdog = self.watchdog.arm();

        let response = {
            let submission = pin!(self.dispatcher.submit(AnalysisRequest::new(url.as_str())));
            match select(submission, &mut watchdog).await {
                Either::Left((response, _watchdog)) => Some(response),
                Either::Right(((), _submission)) => None,
            }
        };

        let Some(response) = response else {
            warn!(timeout = ?self.watchdog.timeout(), "No response in time, unlocking the form");
            self.gate.unlock();
            return Outcome::TimedOut;
        };

        self.watchdog.disarm(watchdog);
        let outcome = match response {
            Ok(result) => {
                info!("Analysis succeeded");
                self.renderer.render_success(&url, &result);
                Outcome::Succeeded
            }
            Err(error) => {
                self.renderer.render_error(&error.message);
                Outcome::Failed
            }
        };
        self.gate.unlock();

        outcome
    }
}
