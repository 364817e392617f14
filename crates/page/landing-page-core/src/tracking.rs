//! Link click logging and press feedback.

use serde::{Deserialize, Serialize};

/// Scale applied to a link while it is pressed.
pub const PRESS_SCALE: f64 = 0.95;
/// Delay before the pressed scale is released.
pub const PRESS_RELEASE_MS: f64 = 150.0;

/// Transform to apply now and when to clear it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PressFeedback {
    pub scale: f64,
    pub release_after_ms: f64,
}

/// A click on one of the page's link cards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinkClick {
    pub title: String,
    pub href: String,
}

impl LinkClick {
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
        }
    }

    /// Log the click and return the press animation to play.
    pub fn record(&self) -> PressFeedback {
        log::info!("link clicked: {} - {}", self.title, self.href);
        PressFeedback {
            scale: PRESS_SCALE,
            release_after_ms: PRESS_RELEASE_MS,
        }
    }
}
