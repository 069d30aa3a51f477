use std::ops::Deref;

/// A value that passed validation.
///
/// Only [`Validator::check`](crate::Validator::check) constructs one, so a
/// function taking `Validated<T>` cannot be handed an unchecked `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated<T> {
    value: T,
}

impl<T> Validated<T> {
    pub(crate) fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns the checked value.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Borrows the checked value.
    pub fn get(&self) -> &T {
        &self.value
    }
}

impl<T> Deref for Validated<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> AsRef<T> for Validated<T> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
