//! Parameterized rule evaluation, dispatched on the value's kind.

use std::cmp::Ordering;
use std::fmt::Display;

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

use crate::engine::Settings;
use crate::foundation::{ErrorKind, FieldValue, ValidationError, ValidationResult};
use crate::rules::Operator;

/// One `operator=parameter` rule applied to one field.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Comparison {
    pub(crate) field: &'static str,
    pub(crate) operator: Operator<'static>,
    pub(crate) parameter: &'static str,
}

impl Comparison {
    /// Evaluates the rule against `value`.
    ///
    /// An absent optional is compared as its kind's zero value.
    pub(crate) fn evaluate(&self, value: FieldValue<'_>, settings: &Settings) -> ValidationResult {
        let value = match value {
            FieldValue::Null(kind) => kind.zero_value(),
            present => present,
        };

        match value {
            FieldValue::Integer(number) => self.integer(number),
            FieldValue::Float(number) => self.float(number),
            FieldValue::Text(text) => self.length(settings.length_mode.measure(text)),
            FieldValue::Sequence(len) | FieldValue::Mapping(len) | FieldValue::Array(len) => {
                self.length(len)
            }
            FieldValue::Instant(instant) => self.instant(instant, settings),
            // An absent record has nothing to compare against.
            FieldValue::Composite(_) | FieldValue::Null(_) => Ok(()),
            FieldValue::Bool(_) => Err(self.fail(ErrorKind::UnsupportedFieldType {
                field: self.field,
                operator: self.operator.as_str(),
                found: value.kind(),
            })),
        }
    }

    fn integer(&self, number: i128) -> ValidationResult {
        let bound: i64 = self.parse_parameter()?;
        let ordering = number.cmp(&i128::from(bound));
        self.check_bound(Some(ordering), bound)
    }

    fn float(&self, number: f64) -> ValidationResult {
        let bound: f64 = self.parse_parameter()?;
        self.check_bound(number.partial_cmp(&bound), bound)
    }

    fn length(&self, len: usize) -> ValidationResult {
        let bound: usize = self.parse_parameter()?;
        let constraint = match self.operator {
            Operator::Min if len < bound => format!("needs at least {bound} items/characters"),
            Operator::Max if len > bound => format!("can have at most {bound} items/characters"),
            _ => return Ok(()),
        };
        Err(self.out_of_range(constraint))
    }

    fn instant(&self, instant: DateTime<Utc>, settings: &Settings) -> ValidationResult {
        let bound = parse_timestamp(self.parameter)
            .ok_or_else(|| self.invalid_parameter())?
            .with_timezone(&Utc);

        let value = settings.zone.normalize(instant);
        let bound = settings.zone.normalize(bound);
        let shown = || bound.to_rfc3339_opts(SecondsFormat::AutoSi, true);

        let constraint = match self.operator {
            Operator::Min if value < bound => format!("must be after {}", shown()),
            Operator::Max if value > bound => format!("must be before {}", shown()),
            Operator::Gte if value < bound => format!("must be at or after {}", shown()),
            Operator::Lte if value > bound => format!("must be at or before {}", shown()),
            Operator::Gt if value <= bound => format!("must be strictly after {}", shown()),
            Operator::Lt if value >= bound => format!("must be strictly before {}", shown()),
            _ => return Ok(()),
        };
        Err(self.out_of_range(constraint))
    }

    /// Shared by integers and floats; an unordered pair (NaN) violates every
    /// bound.
    fn check_bound(&self, ordering: Option<Ordering>, bound: impl Display) -> ValidationResult {
        let violated = |fails: fn(Ordering) -> bool| ordering.is_none_or(fails);

        let constraint = match self.operator {
            Operator::Gt if violated(Ordering::is_le) => format!("must be > {bound}"),
            Operator::Gte if violated(Ordering::is_lt) => format!("must be >= {bound}"),
            Operator::Lt if violated(Ordering::is_ge) => format!("must be < {bound}"),
            Operator::Lte if violated(Ordering::is_gt) => format!("must be <= {bound}"),
            Operator::Min if violated(Ordering::is_lt) => format!("must be at least {bound}"),
            Operator::Max if violated(Ordering::is_gt) => format!("must be at most {bound}"),
            _ => return Ok(()),
        };
        Err(self.out_of_range(constraint))
    }

    fn parse_parameter<T: std::str::FromStr>(&self) -> Result<T, ValidationError> {
        self.parameter.parse().map_err(|_| self.invalid_parameter())
    }

    fn invalid_parameter(&self) -> ValidationError {
        self.fail(ErrorKind::InvalidParameter {
            field: self.field,
            operator: self.operator.as_str(),
            parameter: self.parameter,
        })
    }

    fn out_of_range(&self, constraint: String) -> ValidationError {
        self.fail(ErrorKind::OutOfRange {
            field: self.field,
            operator: self.operator.as_str(),
            constraint,
        })
    }

    fn fail(&self, kind: ErrorKind) -> ValidationError {
        kind.into()
    }
}

/// Parses an RFC 3339 timestamp in its strict form.
///
/// chrono also accepts a space or a lowercase `t` between date and time and a
/// lowercase `z`; those are rejected here.
fn parse_timestamp(text: &str) -> Option<DateTime<FixedOffset>> {
    if text.as_bytes().get(10) != Some(&b'T') || text.ends_with('z') {
        return None;
    }
    DateTime::parse_from_rfc3339(text).ok()
}
