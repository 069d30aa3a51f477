//! Prelude module for convenient imports.
//!
//! Brings the derive, the traits it implements and the engine entry points
//! in with a single `use binding_validator::prelude::*;`.
//!
//! # Examples
//!
//! ```rust,ignore
//! use binding_validator::prelude::*;
//!
//! #[derive(Record)]
//! pub struct Comment {
//!     #[binding("required,max=280")]
//!     pub body: String,
//! }
//!
//! Comment { body: "hi".into() }.validate()?;
//! ```

// ============================================================================
// FOUNDATION: Records, values, errors
// ============================================================================

pub use crate::foundation::{
    Bindable, ErrorKind, FieldDescriptor, FieldValue, Record, ValidationError, ValidationResult,
    ValueKind,
};

// ============================================================================
// ENGINE: Entry points and configuration
// ============================================================================

pub use crate::config::{LengthMode, TimeZoneSetting, ValidatorConfig};
pub use crate::engine::{BindingExt, Validated, Validator};

// ============================================================================
// DERIVE
// ============================================================================

#[cfg(feature = "derive")]
pub use binding_validator_macros::Record;
