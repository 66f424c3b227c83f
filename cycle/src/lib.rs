//! Request lifecycle of the Detective url analysis form.
//!
//! One [`SubmissionCycle`] locks the form with [`FormGate`], sends the url through a [`Dispatch`]
//! implementation and races the response against a [`WatchdogTimer`]. The response is projected
//! onto the page by [`ResultRenderer`]. Whatever happens first, the form ends up unlocked.
//!
//! Nothing here touches the browser directly: the page is reached through [`LockSurface`] and
//! [`ResultSink`], time through [`Clock`].

pub mod config;
pub mod cycle;
pub mod dispatch;
pub mod gate;
pub mod render;
pub mod watchdog;

#[cfg(test)]
mod test_utils;

pub use config::Config;
pub use cycle::{Outcome, SubmissionCycle};
pub use detective_data_model as data_model;
pub use dispatch::{AnalysisError, Dispatch, DispatchError};
pub use gate::{FormGate, LockSurface, UiState};
pub use render::{ResultRenderer, ResultSink, ResultView};
pub use watchdog::{Clock, WatchdogHandle, WatchdogTimer};
