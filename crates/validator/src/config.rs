//! Validator configuration.
//!
//! [`ValidatorConfig`] is plain data (serde-friendly, so it can sit inside an
//! application's own config file). [`Validator::new`](crate::Validator::new)
//! checks it and resolves the time zone once. The resolved zone travels with
//! the validator into every instant comparison. Only
//! [`TimeZoneSetting::Local`] consults the operating system's zone rules.

use chrono::{DateTime, FixedOffset, Local, Offset, Utc};
use serde::{Deserialize, Serialize};

/// Default limit on record nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count text length for `min` / `max` rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthMode {
    /// Count UTF-8 bytes.
    #[default]
    Bytes,
    /// Count Unicode scalar values.
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            Self::Bytes => input.len(),
            Self::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// TIME ZONE
// ============================================================================

/// Zone instants are normalized to before comparison and in messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimeZoneSetting {
    /// The process's local zone.
    #[default]
    Local,
    /// UTC.
    Utc,
    /// A fixed offset east of UTC.
    Fixed {
        /// Offset in seconds; must be strictly within one day.
        offset_seconds: i32,
    },
}

/// A [`TimeZoneSetting`] that has been checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResolvedZone {
    Local,
    Fixed(FixedOffset),
}

impl ResolvedZone {
    /// Converts `instant` into this zone.
    pub(crate) fn normalize(self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Self::Local => instant.with_timezone(&Local).fixed_offset(),
            Self::Fixed(offset) => instant.with_timezone(&offset),
        }
    }
}

impl TimeZoneSetting {
    pub(crate) fn resolve(self) -> Result<ResolvedZone, ConfigError> {
        match self {
            Self::Local => Ok(ResolvedZone::Local),
            Self::Utc => Ok(ResolvedZone::Fixed(Utc.fix())),
            Self::Fixed { offset_seconds } => FixedOffset::east_opt(offset_seconds)
                .map(ResolvedZone::Fixed)
                .ok_or(ConfigError::InvalidOffset { offset_seconds }),
        }
    }
}

// ============================================================================
// CONFIG
// ============================================================================

/// Settings for a [`Validator`](crate::Validator).
///
/// # Examples
///
/// ```rust
/// use binding_validator::{LengthMode, TimeZoneSetting, Validator, ValidatorConfig};
///
/// let config = ValidatorConfig::default()
///     .with_time_zone(TimeZoneSetting::Utc)
///     .with_length_mode(LengthMode::Chars)
///     .with_max_depth(8);
///
/// let validator = Validator::new(config).expect("valid config");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Zone used for instant comparisons and rendered bounds.
    pub time_zone: TimeZoneSetting,
    /// Maximum record nesting below the root.
    pub max_depth: usize,
    /// How text length is counted.
    pub length_mode: LengthMode,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            time_zone: TimeZoneSetting::Local,
            max_depth: DEFAULT_MAX_DEPTH,
            length_mode: LengthMode::Bytes,
        }
    }
}

impl ValidatorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time zone.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_time_zone(mut self, time_zone: TimeZoneSetting) -> Self {
        self.time_zone = time_zone;
        self
    }

    /// Sets the nesting limit.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the text length mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_length_mode(mut self, length_mode: LengthMode) -> Self {
        self.length_mode = length_mode;
        self
    }

    /// Checks the configuration without building a validator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        self.time_zone.resolve().map(|_| ())
    }
}

/// Invalid [`ValidatorConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The fixed offset is a day or more away from UTC.
    #[error("time zone offset {offset_seconds}s is out of range")]
    InvalidOffset {
        /// Rejected offset.
        offset_seconds: i32,
    },

    /// A zero depth would reject every record with a nested field.
    #[error("max_depth must be at least 1")]
    ZeroDepth,
}
