use std::fmt;

/// Rejected animation configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A field holds NaN or an infinity.
    NonFinite { field: &'static str },
    /// A field that must be strictly positive is not.
    NonPositive { field: &'static str, value: f32 },
    /// `low` must be strictly below `high`.
    ThresholdOrder { low: f32, high: f32 },
    /// The grow factor must exceed 1.
    GrowFactor(f32),
    /// The shrink factor must lie in (0, 1).
    ShrinkFactor(f32),
    /// Preset name not recognised.
    UnknownPreset(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonFinite { field } => write!(f, "`{field}` must be finite"),
            ConfigError::NonPositive { field, value } => {
                write!(f, "`{field}` must be positive, got {value}")
            }
            ConfigError::ThresholdOrder { low, high } => {
                write!(f, "pulse threshold low ({low}) must be below high ({high})")
            }
            ConfigError::GrowFactor(v) => write!(f, "grow factor must be > 1, got {v}"),
            ConfigError::ShrinkFactor(v) => write!(f, "shrink factor must be in (0, 1), got {v}"),
            ConfigError::UnknownPreset(name) => {
                write!(f, "unknown preset `{name}` (expected pulse, breathe or drift)")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
