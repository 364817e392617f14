//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RevealError};
use crate::geometry::RootMargin;

/// Configuration for the reveal engine.
/// Every field has a default, so hosts may pass a partial JSON object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub observer: ObserverConfig,
    pub counter: CounterConfig,
    /// Class added to a region's node when it is revealed.
    pub reveal_class: String,
}

/// Visibility observer options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    /// Fraction of a region's area that must be visible before it counts as entered.
    pub threshold: f32,
    pub root_margin: RootMargin,
}

/// Counter animation options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_ms: f64,
    /// Thousands separator used when rendering counter text. Empty disables grouping.
    pub group_separator: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            observer: ObserverConfig::default(),
            counter: CounterConfig::default(),
            reveal_class: "fade-in-up".to_string(),
        }
    }
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: RootMargin::new(0.0, 0.0, -50.0, 0.0),
        }
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000.0,
            group_separator: ",".to_string(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        let threshold = self.observer.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(RevealError::InvalidThreshold { value: threshold });
        }
        let ms = self.counter.duration_ms;
        if !ms.is_finite() || ms <= 0.0 {
            return Err(RevealError::InvalidDuration { ms });
        }
        Ok(())
    }
}
