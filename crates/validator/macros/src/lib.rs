//! # binding-validator-macros
//!
//! `#[derive(Record)]` for `binding-validator`. Use it through the
//! re-export in `binding_validator` rather than depending on this crate
//! directly.
//!
//! ## Examples
//!
//! ```ignore
//! use binding_validator::prelude::*;
//!
//! #[derive(Record)]
//! pub struct Signup {
//!     #[binding("required,min=1")]
//!     pub id: i64,
//!
//!     #[binding(rules = "min=3,max=20", name = "login")]
//!     pub username: String,
//!
//!     pub profile: Profile,
//!
//!     #[binding(skip)]
//!     pub raw: Vec<u8>,
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;

mod record;
mod support;

/// Derive macro for the `Record` and `Bindable` traits.
///
/// Generates a `const` descriptor table with one entry per non-private
/// field, in declaration order, and an accessor that projects each field
/// through its own `Bindable` impl. The struct itself binds as a composite,
/// so it can be validated directly or nested inside another record.
///
/// # Field attributes
///
/// - `#[binding("...")]` or `#[binding(rules = "...")]` - the rule string
/// - `#[binding(name = "...")]` - name used in error paths and messages
///   (default: the field identifier)
/// - `#[binding(skip)]` - leaves the field out of the table
///
/// Fields without a rule string are still listed, so nested records are
/// descended into.
///
/// # Example
///
/// ```ignore
/// #[derive(Record)]
/// pub struct Address {
///     #[binding("max=10,omitempty")]
///     pub street: String,
///
///     #[binding(name = "zip", rules = "required")]
///     pub postal_code: Option<String>,
/// }
/// ```
#[proc_macro_derive(Record, attributes(binding))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive(input)
}
