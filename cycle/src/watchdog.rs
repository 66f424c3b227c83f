//! Module with [`WatchdogTimer`] which force-unlocks the form when a response never arrives.

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Duration,
};

use tracing::debug;

/// Time after which the form is force-unlocked.
pub const DEFAULT_WATCHDOG_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Source of timers.
pub trait Clock {
    /// Future completing after the requested duration.
    ///
    /// Dropping it must cancel the underlying timer.
    type Sleep: Future<Output = ()>;

    /// Create a timer firing after `duration`.
    fn sleep(&self, duration: Duration) -> Self::Sleep;
}

/// Arms the fallback unlock of a submission cycle.
#[derive(Debug)]
pub struct WatchdogTimer<C> {
    clock: C,
    timeout: Duration,
}

impl<C: Clock> WatchdogTimer<C> {
    /// Create a new watchdog firing `timeout` after being armed.
    pub const fn new(clock: C, timeout: Duration) -> Self {
        Self { clock, timeout }
    }

    /// Timeout measured from [`arm()`](Self::arm).
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Start the countdown.
    ///
    /// The returned handle completes when the watchdog fires.
    pub fn arm(&self) -> WatchdogHandle<C::Sleep> {
        debug!(timeout = ?self.timeout, "Watchdog armed");
        WatchdogHandle {
            sleep: Box::pin(self.clock.sleep(self.timeout)),
        }
    }

    /// Cancel the countdown of `handle`.
    pub fn disarm(&self, handle: WatchdogHandle<C::Sleep>) {
        drop(handle);
        debug!(timeout = ?self.timeout, "Watchdog disarmed");
    }
}

/// Pending countdown of an armed [`WatchdogTimer`].
///
/// Dropping the handle cancels the countdown.
#[must_use = "dropping the handle disarms the watchdog"]
pub struct WatchdogHandle<F> {
    sleep: Pin<Box<F>>,
}

impl<F> std::fmt::Debug for WatchdogHandle<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchdogHandle").finish_non_exhaustive()
    }
}

impl<F: Future<Output = ()>> Future for WatchdogHandle<F> {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.sleep.as_mut().poll(cx)
    }
}
