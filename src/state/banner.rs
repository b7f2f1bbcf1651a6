//! Transient status banner shown after every user action.
//!
//! A banner stays up for the configured duration. Showing a new banner
//! replaces the old one and restarts the clock: every `show` bumps a
//! generation, and an expiry only hides the banner it was scheduled for.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

use std::time::Duration;

use crate::dispatch::ActionOutcome;

/// Class on the banner element while nothing is shown.
pub const HIDDEN_CLASS: &str = "hidden";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    /// CSS class applied to the banner element.
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl From<ActionOutcome> for Banner {
    fn from(outcome: ActionOutcome) -> Self {
        match outcome {
            ActionOutcome::Success(text) => Self { kind: BannerKind::Success, text },
            ActionOutcome::Error(text) => Self { kind: BannerKind::Error, text },
        }
    }
}

/// A scheduled hide: after `delay`, call [`BannerState::expire`] with `token`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BannerExpiry {
    pub token: u64,
    pub delay: Duration,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BannerState {
    current: Option<Banner>,
    generation: u64,
}

impl BannerState {
    pub fn current(&self) -> Option<&Banner> {
        self.current.as_ref()
    }

    /// Show `banner`, replacing whatever is up. Returns the token to pass to
    /// [`BannerState::expire`] when the display window ends.
    pub fn show(&mut self, banner: Banner) -> u64 {
        self.generation += 1;
        self.current = Some(banner);
        self.generation
    }

    /// Show `banner` for `duration_ms` milliseconds.
    pub fn show_for(&mut self, banner: Banner, duration_ms: u64) -> BannerExpiry {
        BannerExpiry { token: self.show(banner), delay: Duration::from_millis(duration_ms) }
    }

    /// The element's full class list: the banner kind, or hidden.
    pub fn class(&self) -> &'static str {
        self.current.as_ref().map_or(HIDDEN_CLASS, |banner| banner.kind.class())
    }

    /// Hide the banner shown with `token`. No-op if a newer banner replaced it.
    pub fn expire(&mut self, token: u64) -> bool {
        if token != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }
}
