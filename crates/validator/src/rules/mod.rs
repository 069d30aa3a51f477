//! Rule strings and their parsed form.
//!
//! A rule string is split on `,`; each trimmed token is one of:
//!
//! | Token        | Parsed as                                  |
//! |--------------|--------------------------------------------|
//! | `required`   | [`Rule::Required`]                         |
//! | `omitempty`  | sets [`RuleSet::omit_empty`]               |
//! | `op=param`   | [`Rule::Compare`], split on the first `=`  |
//! | anything else| dropped                                    |
//!
//! Dropping unknown tokens lets one string carry annotations for other tools.
//! The flip side is that a misspelled rule never runs.

mod parse;

pub use parse::parse;

use std::fmt;

use smallvec::SmallVec;

/// Comparison operator of a parameterized rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator<'a> {
    /// Strictly greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Strictly less than.
    Lt,
    /// Less than or equal.
    Lte,
    /// Inclusive lower bound; a length bound for text and collections.
    Min,
    /// Inclusive upper bound; a length bound for text and collections.
    Max,
    /// Any other operator. Its parameter is still parsed for the field's
    /// kind, but it never fails a comparison.
    Other(&'a str),
}

impl<'a> Operator<'a> {
    /// Maps an operator token to its variant.
    #[must_use]
    pub fn from_token(token: &'a str) -> Self {
        match token {
            "gt" => Self::Gt,
            "gte" => Self::Gte,
            "lt" => Self::Lt,
            "lte" => Self::Lte,
            "min" => Self::Min,
            "max" => Self::Max,
            other => Self::Other(other),
        }
    }

    /// The operator as written in a rule string.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        match self {
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::Min => "min",
            Self::Max => "max",
            Self::Other(token) => *token,
        }
    }
}

impl fmt::Display for Operator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule<'a> {
    /// The value must not be empty.
    Required,
    /// The value must satisfy `operator` against `parameter`.
    Compare {
        /// Comparison to run.
        operator: Operator<'a>,
        /// Unparsed parameter; its type depends on the field's kind.
        parameter: &'a str,
    },
}

/// The rules of one field, in the order they were written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet<'a> {
    /// Rules in evaluation order.
    pub rules: SmallVec<[Rule<'a>; 4]>,
    /// Whether an empty value skips every rule.
    pub omit_empty: bool,
}

impl<'a> RuleSet<'a> {
    /// Returns true if the field has nothing to evaluate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates the rules in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule<'a>> {
        self.rules.iter()
    }
}
