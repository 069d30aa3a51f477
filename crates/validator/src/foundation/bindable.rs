//! [`Bindable`] implementations for std and chrono types.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use crate::foundation::{Bindable, FieldValue, ValueKind};

// ============================================================================
// SCALARS
// ============================================================================

macro_rules! bind_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Bindable for $ty {
                #[inline]
                fn kind() -> ValueKind {
                    ValueKind::Integer
                }

                #[inline]
                fn field_value(&self) -> FieldValue<'_> {
                    FieldValue::Integer(i128::from(*self))
                }
            }
        )*
    };
}

bind_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

impl Bindable for isize {
    fn kind() -> ValueKind {
        ValueKind::Integer
    }

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Integer(*self as i128)
    }
}

impl Bindable for usize {
    fn kind() -> ValueKind {
        ValueKind::Integer
    }

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Integer(*self as i128)
    }
}

impl Bindable for f32 {
    fn kind() -> ValueKind {
        ValueKind::Float
    }

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(f64::from(*self))
    }
}

impl Bindable for f64 {
    fn kind() -> ValueKind {
        ValueKind::Float
    }

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(*self)
    }
}

impl Bindable for bool {
    fn kind() -> ValueKind {
        ValueKind::Bool
    }

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}

// ============================================================================
// TEXT
// ============================================================================

impl Bindable for str {
    fn kind() -> ValueKind {
        ValueKind::Text
    }

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl Bindable for String {
    fn kind() -> ValueKind {
        ValueKind::Text
    }

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl Bindable for Cow<'_, str> {
    fn kind() -> ValueKind {
        ValueKind::Text
    }

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

// ============================================================================
// COLLECTIONS
// ============================================================================

macro_rules! bind_len {
    ($variant:ident => $($ty:ty [$($gen:tt)*]),* $(,)?) => {
        $(
            impl<$($gen)*> Bindable for $ty {
                fn kind() -> ValueKind {
                    ValueKind::$variant
                }

                fn field_value(&self) -> FieldValue<'_> {
                    FieldValue::$variant(self.len())
                }
            }
        )*
    };
}

bind_len!(Sequence => [T] [T], Vec<T> [T], VecDeque<T> [T]);
bind_len!(Mapping =>
    HashMap<K, V, S> [K, V, S],
    BTreeMap<K, V> [K, V],
    HashSet<T, S> [T, S],
    BTreeSet<T> [T],
);

impl<T, const N: usize> Bindable for [T; N] {
    fn kind() -> ValueKind {
        ValueKind::Array(N)
    }

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Array(N)
    }
}

// ============================================================================
// TIME
// ============================================================================

impl<Tz: TimeZone> Bindable for DateTime<Tz> {
    fn kind() -> ValueKind {
        ValueKind::Instant
    }

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Instant(self.with_timezone(&Utc))
    }
}

// ============================================================================
// INDIRECTION
// ============================================================================

impl<T: Bindable> Bindable for Option<T> {
    fn kind() -> ValueKind {
        T::kind()
    }

    fn field_value(&self) -> FieldValue<'_> {
        match self {
            Some(value) => value.field_value(),
            None => FieldValue::Null(T::kind()),
        }
    }
}

macro_rules! bind_pointer {
    ($($ptr:ident),* $(,)?) => {
        $(
            impl<T: Bindable + ?Sized> Bindable for $ptr<T> {
                fn kind() -> ValueKind {
                    T::kind()
                }

                fn field_value(&self) -> FieldValue<'_> {
                    (**self).field_value()
                }
            }
        )*
    };
}

bind_pointer!(Box, Rc, Arc);

impl<T: Bindable + ?Sized> Bindable for &T {
    fn kind() -> ValueKind {
        T::kind()
    }

    fn field_value(&self) -> FieldValue<'_> {
        (**self).field_value()
    }
}
