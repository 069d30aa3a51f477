//! Core types the engine is built on.
//!
//! - [`Record`] and [`FieldDescriptor`]: the per-type field table the walker
//!   iterates instead of reflecting over the struct at runtime.
//! - [`Bindable`]: maps a Rust value onto the closed [`FieldValue`] model.
//! - [`ValidationError`] / [`ErrorKind`]: the single error a validation call
//!   can return.
//!
//! # Registering a record by hand
//!
//! `#[derive(Record)]` writes this code for you. Without the derive, a record
//! is a `const` descriptor table plus an accessor that maps each index to the
//! field's value:
//!
//! ```rust
//! use binding_validator::{Bindable, FieldDescriptor, FieldValue, Record, ValueKind};
//!
//! pub struct Login {
//!     pub user: String,
//!     pub attempts: u32,
//! }
//!
//! impl Record for Login {
//!     fn type_name(&self) -> &'static str {
//!         "Login"
//!     }
//!
//!     fn fields(&self) -> &'static [FieldDescriptor] {
//!         const FIELDS: &[FieldDescriptor] = &[
//!             FieldDescriptor::new("user").with_rules("required,max=32"),
//!             FieldDescriptor::new("attempts").with_rules("lte=5"),
//!         ];
//!         FIELDS
//!     }
//!
//!     fn field_value(&self, index: usize) -> Option<FieldValue<'_>> {
//!         match index {
//!             0 => Some(self.user.field_value()),
//!             1 => Some(self.attempts.field_value()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! impl Bindable for Login {
//!     fn kind() -> ValueKind {
//!         ValueKind::Composite
//!     }
//!
//!     fn field_value(&self) -> FieldValue<'_> {
//!         FieldValue::Composite(self)
//!     }
//! }
//!
//! let login = Login { user: "root".into(), attempts: 9 };
//! let err = binding_validator::validate(&login).unwrap_err();
//! assert_eq!(err.to_string(), "attempts must be <= 5");
//! ```

mod bindable;
pub mod error;
pub mod record;
pub mod value;

pub use error::{ErrorKind, ValidationError};
pub use record::{Bindable, FieldDescriptor, Record};
pub use value::{FieldValue, ValueKind};

/// A validation result using the engine's [`ValidationError`].
pub type ValidationResult<T = ()> = Result<T, ValidationError>;
