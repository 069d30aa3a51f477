//! Field descriptor tables and the traits that expose them.

use crate::foundation::{FieldValue, ValueKind};

/// One visible field of a record: its display name and raw rule string.
///
/// Descriptors are `const`-constructible so a record's table can live in a
/// `static` slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    /// Name used in error paths and messages.
    pub name: &'static str,
    /// Rule string from the `binding` attribute; `None` means no rules.
    pub rules: Option<&'static str>,
}

impl FieldDescriptor {
    /// Creates a descriptor without rules.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name, rules: None }
    }

    /// Attaches a rule string.
    #[must_use = "builder methods must be chained or built"]
    pub const fn with_rules(mut self, rules: &'static str) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Returns the rule string if it carries at least one character.
    #[must_use]
    pub fn rule_string(&self) -> Option<&'static str> {
        self.rules.filter(|rules| !rules.is_empty())
    }
}

/// A composite value with named fields.
///
/// The trait is object safe; nested records reach the walker as
/// `&dyn Record` through [`FieldValue::Composite`].
pub trait Record {
    /// Name of the implementing type, used in logs and `Debug` output.
    fn type_name(&self) -> &'static str;

    /// The visible fields in declaration order.
    fn fields(&self) -> &'static [FieldDescriptor];

    /// The value of the field at `index` in [`Record::fields`].
    ///
    /// Returns `None` for an index past the end of the table.
    fn field_value(&self, index: usize) -> Option<FieldValue<'_>>;
}

/// Projects a Rust value onto [`FieldValue`].
///
/// Implemented for integers, floats, `bool`, strings, collections, arrays,
/// `chrono::DateTime`, `Option<T>`, and transparent pointers. Records get an
/// implementation from `#[derive(Record)]`.
pub trait Bindable {
    /// The kind of every value of this type.
    fn kind() -> ValueKind;

    /// The runtime value.
    fn field_value(&self) -> FieldValue<'_>;
}
