//! The validation engine.
//!
//! [`Validator`] walks a record depth-first in field declaration order. For
//! each field it either descends into a nested record or evaluates the
//! field's rules, and it stops at the first violation. The walk keeps no
//! state between calls, so one validator can be shared freely across
//! threads.

mod compare;
mod emptiness;
mod validated;
mod walker;

pub use emptiness::is_empty;
pub use validated::Validated;

use std::borrow::Cow;

use crate::config::{ConfigError, DEFAULT_MAX_DEPTH, LengthMode, ResolvedZone, ValidatorConfig};
use crate::foundation::{Bindable, ErrorKind, FieldValue, ValidationError, ValidationResult};
use walker::Walker;

/// Resolved, immutable settings handed to every walk.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Settings {
    pub(crate) zone: ResolvedZone,
    pub(crate) max_depth: usize,
    pub(crate) length_mode: LengthMode,
}

/// Validates records against their field rules.
///
/// # Examples
///
/// ```rust,ignore
/// use binding_validator::prelude::*;
///
/// #[derive(Record)]
/// pub struct Order {
///     #[binding("required,gt=0")]
///     pub quantity: u32,
/// }
///
/// let validator = Validator::default();
/// assert!(validator.validate(&Order { quantity: 2 }).is_ok());
/// assert_eq!(
///     validator.validate(&Order { quantity: 0 }).unwrap_err().to_string(),
///     "quantity is required",
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    settings: Settings,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            settings: Settings {
                zone: ResolvedZone::Local,
                max_depth: DEFAULT_MAX_DEPTH,
                length_mode: LengthMode::Bytes,
            },
        }
    }
}

impl Validator {
    /// Builds a validator from a checked configuration.
    pub fn new(config: ValidatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            settings: Settings {
                zone: config.time_zone.resolve()?,
                max_depth: config.max_depth,
                length_mode: config.length_mode,
            },
        })
    }

    /// Validates `value`, returning the first violation.
    ///
    /// `value` must be a record, or an optional record. An absent optional
    /// is valid; anything else that is not a record fails with
    /// [`ErrorKind::UnsupportedRootType`].
    pub fn validate<T: Bindable + ?Sized>(&self, value: &T) -> ValidationResult {
        self.validate_at(value, &[])
    }

    /// Like [`Validator::validate`], reporting errors under `prefix`.
    ///
    /// Useful when `value` is itself part of a larger structure the caller
    /// is walking: the prefix segments are prepended to the error path.
    pub fn validate_at<T: Bindable + ?Sized>(&self, value: &T, prefix: &[&str]) -> ValidationResult {
        let result = match value.field_value() {
            FieldValue::Composite(record) => Walker::new(&self.settings).walk(record, 0),
            FieldValue::Null(_) => Ok(()),
            other => Err(ValidationError::new(ErrorKind::UnsupportedRootType {
                found: other.kind(),
            })),
        };

        result.map_err(|error| {
            let error = prefix.iter().rev().fold(error, |error, segment| {
                error.with_parent(Cow::Owned((*segment).to_owned()))
            });
            tracing::debug!(
                code = error.code(),
                path = %error.field_path(),
                "validation failed"
            );
            error
        })
    }

    /// Validates `value` and wraps it as proof that it passed.
    pub fn check<T: Bindable>(&self, value: T) -> Result<Validated<T>, ValidationError> {
        self.validate(&value)?;
        Ok(Validated::new(value))
    }
}

/// Validates `value` with the default [`Validator`].
pub fn validate<T: Bindable + ?Sized>(value: &T) -> ValidationResult {
    Validator::default().validate(value)
}

/// Method-call syntax for validation.
///
/// ```rust,ignore
/// use binding_validator::prelude::*;
///
/// signup.validate()?;
/// ```
pub trait BindingExt: Bindable {
    /// Validates `self` with the default [`Validator`].
    fn validate(&self) -> ValidationResult {
        validate(self)
    }

    /// Validates `self` with the given validator.
    fn validate_with(&self, validator: &Validator) -> ValidationResult {
        validator.validate(self)
    }
}

impl<T: Bindable + ?Sized> BindingExt for T {}
