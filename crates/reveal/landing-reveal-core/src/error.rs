//! Error types for building and driving the reveal engine.

/// Errors produced while validating configuration or page descriptors.
///
/// Frame evaluation never produces an error; everything here is raised at
/// construction time or by the key-addressed host API.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RevealError {
    /// A counter descriptor carries no target value.
    #[error("counter '{counter}' has no target")]
    MissingTarget { counter: String },

    /// A counter target is not a non-negative integer.
    #[error("counter '{counter}' has invalid target '{raw}'")]
    InvalidTarget { counter: String, raw: String },

    #[error("threshold {value} is outside [0, 1]")]
    InvalidThreshold { value: f32 },

    #[error("counter duration must be positive and finite, got {ms} ms")]
    InvalidDuration { ms: f64 },

    #[error("invalid root margin '{raw}': {reason}")]
    InvalidMargin { raw: String, reason: String },

    #[error("duplicate {kind} key '{key}'")]
    DuplicateKey { kind: &'static str, key: String },

    #[error("unknown region '{key}'")]
    UnknownRegion { key: String },

    #[error("page descriptor parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, RevealError>;
