//! # binding-validator
//!
//! Declarative validation for plain Rust structs. Each field carries a rule
//! string under the `binding` attribute; the engine walks the struct in
//! declaration order, descends into nested records and reports the first
//! violation it finds.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use binding_validator::prelude::*;
//!
//! #[derive(Record)]
//! pub struct Signup {
//!     #[binding("required,min=1")]
//!     pub id: i64,
//!     #[binding("min=3,max=20")]
//!     pub username: String,
//!     #[binding("max=10,omitempty")]
//!     pub nickname: Option<String>,
//! }
//!
//! let signup = Signup { id: 0, username: "alice".into(), nickname: None };
//! let err = signup.validate().unwrap_err();
//! assert_eq!(err.to_string(), "id is required");
//! ```
//!
//! ## Rule grammar
//!
//! A rule string is a comma-separated list of tokens:
//!
//! - `required` - the value must not be empty
//! - `omitempty` - skip every rule of the field when its value is empty
//! - `gt=N`, `gte=N`, `lt=N`, `lte=N` - numeric and instant bounds
//! - `min=N`, `max=N` - inclusive bounds; lengths for text and collections
//!
//! Unrecognized tokens are ignored so the same string can carry annotations
//! meant for other tools.
//!
//! ## Records without the derive
//!
//! Implement [`Record`] and [`Bindable`] by hand with a `const` table of
//! [`FieldDescriptor`]s. See the [`foundation`] module docs.

// The error carries its path by value; boxing it would only add an
// allocation on the failure path.
#![allow(clippy::result_large_err)]

// Lets `#[derive(Record)]` resolve `::binding_validator` inside this crate.
extern crate self as binding_validator;

pub mod config;
pub mod engine;
pub mod foundation;
pub mod prelude;
pub mod rules;

pub use config::{ConfigError, LengthMode, TimeZoneSetting, ValidatorConfig};
pub use engine::{BindingExt, Validated, Validator, validate};
pub use foundation::{
    Bindable, ErrorKind, FieldDescriptor, FieldValue, Record, ValidationError, ValueKind,
};
pub use rules::{Operator, Rule, RuleSet};

#[cfg(feature = "derive")]
pub use binding_validator_macros::Record;
