//! Module with [`FormGate`] which keeps the form locked while an analysis is outstanding.

use std::cell::Cell;

use tracing::info;

/// Whether the form accepts user input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiState {
    #[default]
    Unlocked,
    Locked,
}

impl UiState {
    /// Check if the state is [`UiState::Locked`].
    #[must_use]
    pub const fn is_locked(self) -> bool {
        matches!(self, Self::Locked)
    }
}

/// Part of the page controlled by [`FormGate`].
///
/// Implementors must derive the read-only status of every input, the submit control and the
/// overlay visibility from the single `locked` flag.
#[cfg_attr(test, mockall::automock)]
pub trait LockSurface {
    /// Show the overlay and make inputs read-only if `locked`, revert both otherwise.
    fn set_locked(&self, locked: bool);
}

/// Sole owner of [`UiState`].
///
/// Both [`lock()`](Self::lock) and [`unlock()`](Self::unlock) are idempotent: the surface is only
/// touched when the state actually changes.
#[derive(Debug)]
pub struct FormGate<S> {
    state: Cell<UiState>,
    surface: S,
}

impl<S: LockSurface> FormGate<S> {
    /// Create a new unlocked gate and bring `surface` in sync with it.
    pub fn new(surface: S) -> Self {
        surface.set_locked(false);
        Self {
            state: Cell::new(UiState::Unlocked),
            surface,
        }
    }

    /// Current state.
    pub fn state(&self) -> UiState {
        self.state.get()
    }

    /// Check if the form is currently locked.
    pub fn is_locked(&self) -> bool {
        self.state().is_locked()
    }

    /// Lock the form, showing the overlay.
    pub fn lock(&self) {
        if self.transition(UiState::Locked) {
            info!("Form locked");
        }
    }

    /// Unlock the form, hiding the overlay.
    ///
    /// Safe to call redundantly, only the first call after [`lock()`](Self::lock) has an effect.
    pub fn unlock(&self) {
        if self.transition(UiState::Unlocked) {
            info!("Form unlocked");
        }
    }

    /// Move to `target` and update the surface.
    ///
    /// Returns `false` if the gate was already in `target`.
    fn transition(&self, target: UiState) -> bool {
        if self.state.replace(target) == target {
            return false;
        }
        self.surface.set_locked(target.is_locked());
        true
    }
}
