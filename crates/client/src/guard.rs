//! Mount guards and navigation.
//!
//! A screen is handed a [`ViewGuard`] when it is mounted. Navigating away
//! advances the shared generation, so results of requests that were still in
//! flight are recognised as stale and dropped instead of being applied to a
//! screen nobody is looking at.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared mount generation. Cloning shares the counter.
#[derive(Debug, Clone, Default)]
pub struct MountCounter {
    generation: Arc<AtomicU64>,
}

impl MountCounter {
    /// A guard valid until the next [`advance`](Self::advance).
    pub fn mount(&self) -> ViewGuard {
        ViewGuard {
            generation: Arc::clone(&self.generation),
            mounted_at: self.generation.load(Ordering::Acquire),
        }
    }

    /// Invalidate every guard handed out so far.
    pub fn advance(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }
}

/// Proof that a screen is still the one on display.
#[derive(Debug, Clone)]
pub struct ViewGuard {
    generation: Arc<AtomicU64>,
    mounted_at: u64,
}

impl ViewGuard {
    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::Acquire) == self.mounted_at
    }

    /// A guard that never goes stale, for screens used outside a [`Navigator`].
    pub fn detached() -> Self {
        MountCounter::default().mount()
    }
}

/// The main views of the authenticated shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Dashboard,
    Plano,
    Regionais,
    Responsaveis,
}

impl View {
    pub const ALL: [View; 4] = [View::Dashboard, View::Plano, View::Regionais, View::Responsaveis];

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Plano => "Plano Anual",
            View::Regionais => "Regionais",
            View::Responsaveis => "Responsáveis",
        }
    }
}

/// Holds the current view and the mount generation of the shell.
#[derive(Debug, Default)]
pub struct Navigator {
    current: View,
    counter: MountCounter,
}

impl Navigator {
    pub fn current(&self) -> View {
        self.current
    }

    pub fn counter(&self) -> &MountCounter {
        &self.counter
    }

    /// Guard for the view currently on display.
    pub fn mount(&self) -> ViewGuard {
        self.counter.mount()
    }

    /// Switch to `view`, invalidating the previous view's guard.
    ///
    /// Re-selecting the current view remounts it as well.
    pub fn navigate(&mut self, view: View) -> ViewGuard {
        tracing::debug!(from = ?self.current, to = ?view, "Navigating");
        self.counter.advance();
        self.current = view;
        self.counter.mount()
    }

    /// Back to the dashboard with every guard invalidated (sign-out).
    pub fn reset(&mut self) {
        self.counter.advance();
        self.current = View::default();
    }
}
