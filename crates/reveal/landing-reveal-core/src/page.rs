//! Static page descriptors: which regions exist and the counters they hold.
//!
//! Mirrors the document markup the engine is attached to: every animated block
//! becomes a region and every `data-count` stat inside it a counter. Targets
//! may arrive as JSON numbers or as attribute strings.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RevealError};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSpec {
    #[serde(default)]
    pub regions: Vec<RegionSpec>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionSpec {
    pub key: String,
    #[serde(default)]
    pub counters: Vec<CounterSpec>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CounterSpec {
    pub key: String,
    #[serde(default)]
    pub target: Option<RawTarget>,
}

/// Counter target as written in the page source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTarget {
    Number(serde_json::Number),
    Text(String),
}

impl RawTarget {
    fn raw(&self) -> String {
        match self {
            RawTarget::Number(n) => n.to_string(),
            RawTarget::Text(s) => s.clone(),
        }
    }
}

impl CounterSpec {
    pub fn new(key: impl Into<String>, target: u64) -> Self {
        Self {
            key: key.into(),
            target: Some(RawTarget::Number(target.into())),
        }
    }

    /// Validated target: a non-negative integer. Integral floats (`1500.0`)
    /// are accepted; fractions, negatives and non-digit text are not.
    pub fn parse_target(&self) -> Result<u64> {
        let raw = self.target.as_ref().ok_or_else(|| RevealError::MissingTarget {
            counter: self.key.clone(),
        })?;
        let invalid = || RevealError::InvalidTarget {
            counter: self.key.clone(),
            raw: raw.raw(),
        };
        match raw {
            RawTarget::Number(n) => {
                if let Some(v) = n.as_u64() {
                    return Ok(v);
                }
                match n.as_f64() {
                    Some(f) if f >= 0.0 && f.fract() == 0.0 && f < u64::MAX as f64 => {
                        Ok(f as u64)
                    }
                    _ => Err(invalid()),
                }
            }
            RawTarget::Text(s) => {
                let t = s.trim();
                if t.is_empty() {
                    return Err(RevealError::MissingTarget {
                        counter: self.key.clone(),
                    });
                }
                if !t.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                t.parse::<u64>().map_err(|_| invalid())
            }
        }
    }
}

impl RegionSpec {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            counters: Vec::new(),
        }
    }

    pub fn with_counter(mut self, counter: CounterSpec) -> Self {
        self.counters.push(counter);
        self
    }
}

impl PageSpec {
    /// Check key uniqueness and that every counter target parses.
    pub fn validate(&self) -> Result<()> {
        let mut region_keys = HashSet::new();
        let mut counter_keys = HashSet::new();
        for region in &self.regions {
            if !region_keys.insert(region.key.as_str()) {
                return Err(RevealError::DuplicateKey {
                    kind: "region",
                    key: region.key.clone(),
                });
            }
            for counter in &region.counters {
                if !counter_keys.insert(counter.key.as_str()) {
                    return Err(RevealError::DuplicateKey {
                        kind: "counter",
                        key: counter.key.clone(),
                    });
                }
                counter.parse_target()?;
            }
        }
        Ok(())
    }
}

/// Parse and validate a page descriptor JSON document.
pub fn parse_page_json(s: &str) -> Result<PageSpec> {
    let page: PageSpec =
        serde_json::from_str(s).map_err(|e| RevealError::Parse(e.to_string()))?;
    page.validate()?;
    Ok(page)
}
