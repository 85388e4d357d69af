//! Numeric conversion and comparison with host VM semantics.
//!
//! # Conversions
//!
//! | From → To         | Nature                                              |
//! |-------------------|-----------------------------------------------------|
//! | `i32 → i64`       | exact, sign-extending                               |
//! | `i64 → i32`       | truncating, two's-complement wraparound             |
//! | `i32 → f32`       | round to nearest                                    |
//! | `i32 → f64`       | exact                                               |
//! | `i64 → f32/f64`   | round to nearest                                    |
//! | `f32/f64 → i32/i64` | toward zero, NaN → 0, saturating                  |
//! | `f32 → f64`       | exact                                               |
//! | `f64 → f32`       | round to nearest, overflow → ±∞                     |

use std::convert::identity;

use crate::condition::Condition;
use crate::float::{
    flt32_to_int32, flt32_to_int64, flt64_to_int32, flt64_to_int64, int32_to_flt32,
    int32_to_flt64, int64_to_flt32, int64_to_flt64, is_nan_f32, is_nan_f64,
};
use crate::value::{Addr, Payload};

/// Conversion from `Self` to `D` by the host VM's rules.
///
/// Converting a kind to itself is the identity.
pub trait ConvertNumber<D: Payload>: Payload {
    fn convert(self) -> D;
}

macro_rules! impl_convert {
    ($($from:ty => $to:ty : $f:expr;)*) => {
        $(
            impl ConvertNumber<$to> for $from {
                #[inline]
                fn convert(self) -> $to {
                    $f(self)
                }
            }
        )*
    };
}

impl_convert! {
    i32 => i32: identity;
    i64 => i64: identity;
    f32 => f32: identity;
    f64 => f64: identity;
    i32 => i64: i64::from;
    i32 => f32: int32_to_flt32;
    i32 => f64: int32_to_flt64;
    i64 => i32: truncate_64_to_32;
    i64 => f32: int64_to_flt32;
    i64 => f64: int64_to_flt64;
    f32 => i32: flt32_to_int32;
    f32 => i64: flt32_to_int64;
    f32 => f64: f64::from;
    f64 => i32: flt64_to_int32;
    f64 => i64: flt64_to_int64;
    f64 => f32: narrow_64_to_32;
}

/// Convert `arg` to `D` using the host VM's conversion rules.
#[inline]
pub fn convert_number<S, D>(arg: S) -> D
where
    S: ConvertNumber<D>,
    D: Payload,
{
    arg.convert()
}

/// Sign-extend an int to a long.
#[inline]
pub fn widen_32_to_64(v: i32) -> i64 {
    i64::from(v)
}

/// Keep the low 32 bits of a long.
#[inline]
#[expect(
    clippy::cast_possible_truncation,
    reason = "wraparound is the host VM's l2i"
)]
pub fn truncate_64_to_32(v: i64) -> i32 {
    v as i32
}

#[inline]
#[expect(
    clippy::cast_possible_truncation,
    reason = "round-to-nearest is the host VM's d2f"
)]
fn narrow_64_to_32(v: f64) -> f32 {
    v as f32
}

/// Three-/four-way comparison producing a raw [`Condition`].
pub trait Compare: Payload {
    /// Compare `self` with `other`.
    ///
    /// `unsigned` reinterprets integer operands as unsigned; other kinds
    /// ignore it.
    fn compare(self, other: Self, unsigned: bool) -> Condition;
}

/// Map an ordered pair onto `Lt`/`Eq`/`Gt`.
#[inline]
fn ordered<T: PartialOrd>(a: &T, b: &T) -> Condition {
    if a > b {
        Condition::Gt
    } else if a == b {
        Condition::Eq
    } else {
        Condition::Lt
    }
}

impl Compare for i32 {
    #[inline]
    fn compare(self, other: Self, unsigned: bool) -> Condition {
        if unsigned {
            ordered(&self.cast_unsigned(), &other.cast_unsigned())
        } else {
            ordered(&self, &other)
        }
    }
}

impl Compare for i64 {
    #[inline]
    fn compare(self, other: Self, unsigned: bool) -> Condition {
        if unsigned {
            ordered(&self.cast_unsigned(), &other.cast_unsigned())
        } else {
            ordered(&self, &other)
        }
    }
}

impl Compare for f32 {
    #[inline]
    fn compare(self, other: Self, _unsigned: bool) -> Condition {
        if is_nan_f32(self) || is_nan_f32(other) {
            Condition::Un
        } else {
            ordered(&self, &other)
        }
    }
}

impl Compare for f64 {
    #[inline]
    fn compare(self, other: Self, _unsigned: bool) -> Condition {
        if is_nan_f64(self) || is_nan_f64(other) {
            Condition::Un
        } else {
            ordered(&self, &other)
        }
    }
}

/// Addresses never compare unordered. Their order is the numeric order of
/// the raw address, which only means something within one object.
impl Compare for Addr {
    #[inline]
    fn compare(self, other: Self, _unsigned: bool) -> Condition {
        ordered(&self, &other)
    }
}

/// Compare `arg1` with `arg2`.
#[inline]
pub fn compare<T: Compare>(arg1: T, arg2: T, unsigned: bool) -> Condition {
    arg1.compare(arg2, unsigned)
}
