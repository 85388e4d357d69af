//! Algebraic laws over payload values.
//!
//! Each predicate answers whether a constant satisfies a law for **every**
//! operand of its type, so algebraic simplification can rewrite `v op x`
//! without looking at `x`. "Identical" means bitwise identical, which is
//! why signed zeros and NaNs make the float answers differ from the
//! integer ones:
//!
//! - `+0.0` is not an additive identity: `+0.0 + -0.0` is `+0.0`.
//! - No float zero is a multiplicative annihilator: `0.0 * -1.0` is `-0.0`.
//! - NaN annihilates both addition and multiplication.

use crate::condition::Condition;
use crate::float::{
    is_nan_f32, is_nan_f64, is_negative_zero_f32, is_negative_zero_f64, DOUBLE_NAN,
    DOUBLE_NEGATIVE_ZERO, FLOAT_NAN, FLOAT_NEGATIVE_ZERO,
};
use crate::value::{Addr, Memory, Payload};

/// Queries defined for every payload type.
pub trait Predicates: Payload {
    /// Numerically zero: `0`, `±0.0`, null, or `Eq`.
    fn is_zero(self) -> bool;

    fn is_infinite(self) -> bool {
        false
    }

    fn is_nan(self) -> bool {
        false
    }
}

impl Predicates for Addr {
    fn is_zero(self) -> bool {
        self.is_null()
    }
}

impl Predicates for Condition {
    fn is_zero(self) -> bool {
        self == Condition::Eq
    }
}

/// Only the constant region can be a value, and it counts as zero.
impl Predicates for Memory {
    fn is_zero(self) -> bool {
        true
    }
}

/// Identity, annihilator and negator laws for the four numeric kinds.
pub trait Arithmetic: Predicates {
    /// `v + x` is identical to `v` for all `x`.
    fn is_additive_annihilator(self) -> bool;

    /// `v + x` is identical to `x` for all `x`.
    fn is_additive_identity(self) -> bool;

    /// `v * x` is identical to `v` for all `x`.
    fn is_multiplicative_annihilator(self) -> bool;

    /// `v * x` is identical to `x` for all `x`.
    fn is_multiplicative_identity(self) -> bool;

    /// `v * x` is identical to `-x` for all `x`.
    fn is_multiplicative_negator(self) -> bool;

    /// The positive zero.
    fn zero() -> Self;

    /// The element satisfying [`is_additive_identity`](Self::is_additive_identity).
    fn additive_identity() -> Self;

    /// The canonical NaN.
    ///
    /// # Panics
    ///
    /// For integer types, which have no NaN.
    fn nan() -> Self;
}

macro_rules! impl_int_laws {
    ($($ty:ty),*) => {
        $(
            impl Predicates for $ty {
                #[inline]
                fn is_zero(self) -> bool {
                    self == 0
                }
            }

            impl Arithmetic for $ty {
                #[inline]
                fn is_additive_annihilator(self) -> bool {
                    false
                }

                #[inline]
                fn is_additive_identity(self) -> bool {
                    self == 0
                }

                #[inline]
                fn is_multiplicative_annihilator(self) -> bool {
                    self == 0
                }

                #[inline]
                fn is_multiplicative_identity(self) -> bool {
                    self == 1
                }

                #[inline]
                fn is_multiplicative_negator(self) -> bool {
                    self == -1
                }

                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn additive_identity() -> Self {
                    0
                }

                fn nan() -> Self {
                    panic!("no {} NaN: integer kinds have no NaN", <$ty as Payload>::KIND)
                }
            }
        )*
    };
}

impl_int_laws!(i32, i64);

macro_rules! impl_float_laws {
    ($($ty:ty => $is_nan:ident, $is_neg_zero:ident, $nan:ident, $neg_zero:ident);*) => {
        $(
            impl Predicates for $ty {
                #[inline]
                fn is_zero(self) -> bool {
                    self == 0.0
                }

                #[inline]
                fn is_infinite(self) -> bool {
                    <$ty>::is_infinite(self)
                }

                #[inline]
                fn is_nan(self) -> bool {
                    $is_nan(self)
                }
            }

            impl Arithmetic for $ty {
                #[inline]
                fn is_additive_annihilator(self) -> bool {
                    $is_nan(self)
                }

                #[inline]
                fn is_additive_identity(self) -> bool {
                    $is_neg_zero(self)
                }

                #[inline]
                fn is_multiplicative_annihilator(self) -> bool {
                    $is_nan(self)
                }

                #[inline]
                fn is_multiplicative_identity(self) -> bool {
                    self == 1.0
                }

                #[inline]
                fn is_multiplicative_negator(self) -> bool {
                    self == -1.0
                }

                #[inline]
                fn zero() -> Self {
                    0.0
                }

                #[inline]
                fn additive_identity() -> Self {
                    $neg_zero
                }

                #[inline]
                fn nan() -> Self {
                    $nan
                }
            }
        )*
    };
}

impl_float_laws! {
    f32 => is_nan_f32, is_negative_zero_f32, FLOAT_NAN, FLOAT_NEGATIVE_ZERO;
    f64 => is_nan_f64, is_negative_zero_f64, DOUBLE_NAN, DOUBLE_NEGATIVE_ZERO
}
