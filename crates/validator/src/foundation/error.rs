//! Error type for validation failures.
//!
//! A validation call fails with exactly one [`ValidationError`]: the first
//! violation found. The error keeps the path of record fields that led to the
//! failing field separately from the failure itself, so callers can render
//! either the full `parent.child message` text or inspect the pieces.
//!
//! Field names and rule tokens come from `'static` descriptor tables, so the
//! error only allocates for the formatted constraint and the path.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::foundation::ValueKind;

// ============================================================================
// ERROR KIND
// ============================================================================

/// What went wrong, without the enclosing path.
///
/// Every message starts with the failing field's name, so a rendered
/// [`ValidationError`] reads as a dotted path followed by the constraint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorKind {
    /// The validated value is not a record, even after unwrapping one
    /// optional level.
    #[error("only composite types are supported, got {found}")]
    UnsupportedRootType {
        /// Kind of the value that was passed in.
        found: ValueKind,
    },

    /// A `required` field was empty.
    #[error("{field} is required")]
    Required {
        /// Field name.
        field: &'static str,
    },

    /// A rule parameter could not be parsed for the field's kind.
    #[error("{field} has an invalid parameter for {operator}: {parameter:?}")]
    InvalidParameter {
        /// Field name.
        field: &'static str,
        /// Operator as written in the rule.
        operator: &'static str,
        /// Raw parameter text.
        parameter: &'static str,
    },

    /// A comparison failed.
    #[error("{field} {constraint}")]
    OutOfRange {
        /// Field name.
        field: &'static str,
        /// Operator as written in the rule.
        operator: &'static str,
        /// Human-readable bound, e.g. `must be at least 1`.
        constraint: String,
    },

    /// A parameterized rule targets a kind with no comparison semantics.
    #[error("{field}: type {found} is not supported for {operator}")]
    UnsupportedFieldType {
        /// Field name.
        field: &'static str,
        /// Operator as written in the rule.
        operator: &'static str,
        /// Kind of the field value.
        found: ValueKind,
    },

    /// Records nest deeper than the configured limit.
    #[error("{field} exceeds the maximum nesting depth of {max_depth}")]
    DepthExceeded {
        /// Field whose record would open the next level.
        field: &'static str,
        /// Configured limit.
        max_depth: usize,
    },
}

impl ErrorKind {
    /// Stable machine-readable code, matching the serialized `code` tag.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedRootType { .. } => "unsupported_root_type",
            Self::Required { .. } => "required",
            Self::InvalidParameter { .. } => "invalid_parameter",
            Self::OutOfRange { .. } => "out_of_range",
            Self::UnsupportedFieldType { .. } => "unsupported_field_type",
            Self::DepthExceeded { .. } => "depth_exceeded",
        }
    }

    /// Name of the failing field, if the failure is about a field.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::UnsupportedRootType { .. } => None,
            Self::Required { field }
            | Self::InvalidParameter { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::UnsupportedFieldType { field, .. }
            | Self::DepthExceeded { field, .. } => Some(*field),
        }
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// The first violation found by a validation call.
///
/// # Examples
///
/// ```rust
/// use binding_validator::{ErrorKind, ValidationError};
///
/// let error = ValidationError::new(ErrorKind::Required { field: "hobby" })
///     .with_parent("custom")
///     .with_parent("profile");
///
/// assert_eq!(error.to_string(), "profile.custom.hobby is required");
/// assert_eq!(error.field_path(), "profile.custom.hobby");
/// assert_eq!(error.code(), "required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Record fields from the validation root down to the failing field's
    /// parent.
    path: Vec<Cow<'static, str>>,

    #[serde(flatten)]
    kind: ErrorKind,
}

impl ValidationError {
    /// Creates an error at the root of the validation.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            path: Vec::new(),
            kind,
        }
    }

    /// Prefixes the path with an enclosing field name.
    ///
    /// Called once per record level while the error propagates outward.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_parent(mut self, segment: impl Into<Cow<'static, str>>) -> Self {
        self.path.insert(0, segment.into());
        self
    }

    /// The failure itself.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Consumes the error and returns the failure.
    #[must_use]
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    /// Names of the records enclosing the failing field.
    #[must_use]
    pub fn path(&self) -> &[Cow<'static, str>] {
        &self.path
    }

    /// Stable machine-readable code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Dotted path of the failing field, e.g. `custom.hobby`.
    ///
    /// For a root-type failure this is the enclosing path alone.
    #[must_use]
    pub fn field_path(&self) -> String {
        let mut segments: Vec<&str> = self.path.iter().map(AsRef::as_ref).collect();
        if let Some(field) = self.kind.field() {
            segments.push(field);
        }
        segments.join(".")
    }
}

impl From<ErrorKind> for ValidationError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.path {
            write!(f, "{segment}.")?;
        }
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
