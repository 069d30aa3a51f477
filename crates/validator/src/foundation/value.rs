//! The closed value model every field is projected onto before evaluation.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::foundation::Record;

/// Unix timestamp of `0001-01-01T00:00:00Z`, the zero instant.
pub const ZERO_INSTANT_SECS: i64 = -62_135_596_800;

/// Returns the zero instant (`0001-01-01T00:00:00Z`).
///
/// An instant field holding this value is considered empty.
#[must_use]
pub fn zero_instant() -> DateTime<Utc> {
    DateTime::from_timestamp(ZERO_INSTANT_SECS, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Returns true if `instant` is exactly the zero instant.
#[must_use]
pub fn is_zero_instant(instant: &DateTime<Utc>) -> bool {
    instant.timestamp() == ZERO_INSTANT_SECS && instant.timestamp_subsec_nanos() == 0
}

// ============================================================================
// VALUE KIND
// ============================================================================

/// Semantic kind of a field value, known at the type level.
///
/// An absent optional carries its kind so the engine can compare against the
/// kind's zero value instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// `bool`.
    Bool,
    /// Any signed or unsigned integer up to 64 bits.
    Integer,
    /// `f32` / `f64`.
    Float,
    /// Strings.
    Text,
    /// Growable ordered collections (`Vec`, slices, `VecDeque`).
    Sequence,
    /// Keyed collections (maps and sets).
    Mapping,
    /// Fixed-size arrays; carries the array length.
    Array(usize),
    /// A point in time.
    Instant,
    /// A nested record.
    Composite,
}

impl ValueKind {
    /// The value an absent optional of this kind unwraps to for comparison.
    ///
    /// Composites have no zero value the engine can inspect, so they stay
    /// [`FieldValue::Null`].
    #[must_use]
    pub fn zero_value(self) -> FieldValue<'static> {
        match self {
            Self::Bool => FieldValue::Bool(false),
            Self::Integer => FieldValue::Integer(0),
            Self::Float => FieldValue::Float(0.0),
            Self::Text => FieldValue::Text(""),
            Self::Sequence => FieldValue::Sequence(0),
            Self::Mapping => FieldValue::Mapping(0),
            Self::Array(len) => FieldValue::Array(len),
            Self::Instant => FieldValue::Instant(zero_instant()),
            Self::Composite => FieldValue::Null(Self::Composite),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Integer => f.write_str("integer"),
            Self::Float => f.write_str("float"),
            Self::Text => f.write_str("text"),
            Self::Sequence => f.write_str("sequence"),
            Self::Mapping => f.write_str("mapping"),
            Self::Array(len) => write!(f, "array[{len}]"),
            Self::Instant => f.write_str("instant"),
            Self::Composite => f.write_str("composite"),
        }
    }
}

// ============================================================================
// FIELD VALUE
// ============================================================================

/// The runtime value of a field, borrowed from the record.
#[derive(Clone, Copy)]
pub enum FieldValue<'a> {
    /// A boolean.
    Bool(bool),
    /// An integer, widened so every `i64` and `u64` fits.
    Integer(i128),
    /// A floating point number.
    Float(f64),
    /// A string slice; its length is measured per the configured mode.
    Text(&'a str),
    /// Length of a growable ordered collection.
    Sequence(usize),
    /// Number of entries in a map or set.
    Mapping(usize),
    /// Length of a fixed-size array.
    Array(usize),
    /// A point in time, normalized to UTC.
    Instant(DateTime<Utc>),
    /// A nested record the walker descends into.
    Composite(&'a dyn Record),
    /// An absent optional of the given kind.
    Null(ValueKind),
}

impl FieldValue<'_> {
    /// The semantic kind of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Mapping(_) => ValueKind::Mapping,
            Self::Array(len) => ValueKind::Array(*len),
            Self::Instant(_) => ValueKind::Instant,
            Self::Composite(_) => ValueKind::Composite,
            Self::Null(kind) => *kind,
        }
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Self::Integer(v) => f.debug_tuple("Integer").field(v).finish(),
            Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Self::Text(v) => f.debug_tuple("Text").field(v).finish(),
            Self::Sequence(len) => f.debug_tuple("Sequence").field(len).finish(),
            Self::Mapping(len) => f.debug_tuple("Mapping").field(len).finish(),
            Self::Array(len) => f.debug_tuple("Array").field(len).finish(),
            Self::Instant(v) => f.debug_tuple("Instant").field(v).finish(),
            Self::Composite(record) => f.debug_tuple("Composite").field(&record.type_name()).finish(),
            Self::Null(kind) => f.debug_tuple("Null").field(kind).finish(),
        }
    }
}
