//! Same-value equality for stored values.
//!
//! [`ExtendedMap`](super::ExtendedMap) compares values in three places:
//! [`has_value`](super::ExtendedMap::has_value), and the checked forms of
//! [`delete`](super::ExtendedMap::delete) and
//! [`replace`](super::ExtendedMap::replace). None of them use structural
//! equality. Two values are the *same value* when they are the identical
//! primitive, or the identical reference for reference values.
//!
//! | Type                         | Same value when                            |
//! |------------------------------|--------------------------------------------|
//! | integers, `bool`, `char`     | `==`                                       |
//! | `f32`, `f64`                 | bitwise equal, or both `NaN`               |
//! | `str`, `String`              | identical contents                         |
//! | `Rc<T>`, `Arc<T>`            | pointer identity (`Rc::ptr_eq`)            |
//! | `Option<T>`                  | both `None`, or both `Some` and same value |
//! | tuples                       | every component is the same value          |
//!
//! Compound values such as `Vec`, `Box` or user structs get no impl: their
//! contents are not their identity. Share them through `Rc` or `Arc` to
//! compare by reference, or opt a value type into structural equality with
//! [`impl_same_value_by_eq!`](crate::impl_same_value_by_eq).
//!
//! Floats follow `Object.is`: `NaN` is the same value as `NaN`, while `0.0`
//! and `-0.0` are different values.
//!
//! # Absent values
//!
//! [`SameValue::is_absent`] marks a stored value that stands for "no value".
//! Only `Option::None` is absent. The compute family reads such an entry as
//! if it were missing.
//!
//! # Examples
//!
//! ```rust
//! use std::rc::Rc;
//! use extended_collections::collections::SameValue;
//!
//! assert!(1_i32.same_value(&1));
//! assert!(f64::NAN.same_value(&f64::NAN));
//! assert!(!0.0_f64.same_value(&-0.0));
//!
//! let first = Rc::new(vec![1, 2, 3]);
//! let second = Rc::new(vec![1, 2, 3]);
//! assert!(first.same_value(&Rc::clone(&first)));
//! assert!(!first.same_value(&second));
//! ```

use std::rc::Rc;
use std::sync::Arc;

/// Equality by identity for primitives and references.
///
/// See the [module documentation](self) for the semantics per type.
pub trait SameValue {
    /// Returns `true` if `self` and `other` are the same value.
    fn same_value(&self, other: &Self) -> bool;

    /// Returns `true` if this value stands for a missing entry.
    ///
    /// Defaults to `false`. `Option::None` is the only absent value.
    #[inline]
    fn is_absent(&self) -> bool {
        false
    }
}

/// Implements [`SameValue`] through `PartialEq`.
///
/// For value types whose structural equality is the identity that matters.
///
/// # Examples
///
/// ```rust
/// use extended_collections::collections::SameValue;
/// use extended_collections::impl_same_value_by_eq;
///
/// #[derive(PartialEq)]
/// struct Celsius(i32);
///
/// impl_same_value_by_eq!(Celsius);
///
/// assert!(Celsius(21).same_value(&Celsius(21)));
/// ```
#[macro_export]
macro_rules! impl_same_value_by_eq {
    ($($value_type:ty),+ $(,)?) => {
        $(
            impl $crate::collections::SameValue for $value_type {
                #[inline]
                fn same_value(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )+
    };
}

impl_same_value_by_eq!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, (), str, String,
);

macro_rules! impl_same_value_for_float {
    ($($float:ty),+) => {
        $(
            impl SameValue for $float {
                #[inline]
                fn same_value(&self, other: &Self) -> bool {
                    self.to_bits() == other.to_bits() || (self.is_nan() && other.is_nan())
                }
            }
        )+
    };
}

impl_same_value_for_float!(f32, f64);

impl<T: SameValue + ?Sized> SameValue for &T {
    #[inline]
    fn same_value(&self, other: &Self) -> bool {
        (**self).same_value(*other)
    }

    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: SameValue> SameValue for Option<T> {
    fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(left), Some(right)) => left.same_value(right),
            _ => false,
        }
    }

    #[inline]
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> SameValue for Rc<T> {
    #[inline]
    fn same_value(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl<T: ?Sized> SameValue for Arc<T> {
    #[inline]
    fn same_value(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

macro_rules! impl_same_value_for_tuple {
    ($(($($name:ident : $index:tt),+)),+) => {
        $(
            impl<$($name: SameValue),+> SameValue for ($($name,)+) {
                #[inline]
                fn same_value(&self, other: &Self) -> bool {
                    $(self.$index.same_value(&other.$index))&&+
                }
            }
        )+
    };
}

impl_same_value_for_tuple!(
    (A: 0),
    (A: 0, B: 1),
    (A: 0, B: 1, C: 2),
    (A: 0, B: 1, C: 2, D: 3)
);
