use crate::foundation::FieldValue;
use crate::foundation::value::is_zero_instant;

/// Returns true if `value` counts as empty for `required` and `omitempty`.
///
/// - absent optionals are empty
/// - text and collections are empty at length 0
/// - `false`, `0` and `0.0` are empty
/// - an instant is empty only at the zero instant `0001-01-01T00:00:00Z`
/// - records are never empty; they are validated by descending into them
#[must_use]
pub fn is_empty(value: &FieldValue<'_>) -> bool {
    match *value {
        FieldValue::Null(_) => true,
        FieldValue::Text(text) => text.is_empty(),
        FieldValue::Sequence(len) | FieldValue::Mapping(len) | FieldValue::Array(len) => len == 0,
        FieldValue::Bool(flag) => !flag,
        FieldValue::Integer(number) => number == 0,
        FieldValue::Float(number) => number == 0.0,
        FieldValue::Instant(instant) => is_zero_instant(&instant),
        FieldValue::Composite(_) => false,
    }
}
