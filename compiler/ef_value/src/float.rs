//! Floating-point primitives.
//!
//! The numeric building blocks the value model is defined in terms of:
//! NaN and negative-zero queries, the canonical constants, and the
//! int↔float conversions with the host VM's rounding and overflow rules.
//!
//! # Conversion rules
//!
//! - int → float rounds to nearest, ties to even. `i32 → f64` is exact.
//! - float → int rounds toward zero. NaN converts to 0 and out-of-range
//!   values saturate at the integer's minimum or maximum.
//!
//! Rust's `as` casts between integers and floats implement exactly these
//! rules, so the primitives are thin wrappers that name the conversion.

/// Canonical single-precision NaN (`0x7FC0_0000`).
pub const FLOAT_NAN: f32 = f32::NAN;

/// Canonical double-precision NaN (`0x7FF8_0000_0000_0000`).
pub const DOUBLE_NAN: f64 = f64::NAN;

/// Single-precision negative zero.
pub const FLOAT_NEGATIVE_ZERO: f32 = -0.0;

/// Double-precision negative zero.
pub const DOUBLE_NEGATIVE_ZERO: f64 = -0.0;

#[inline]
pub fn is_nan_f32(v: f32) -> bool {
    v.is_nan()
}

#[inline]
pub fn is_nan_f64(v: f64) -> bool {
    v.is_nan()
}

/// True only for `-0.0`; `+0.0` and every other value is false.
#[inline]
pub fn is_negative_zero_f32(v: f32) -> bool {
    v == 0.0 && v.is_sign_negative()
}

/// True only for `-0.0`; `+0.0` and every other value is false.
#[inline]
pub fn is_negative_zero_f64(v: f64) -> bool {
    v == 0.0 && v.is_sign_negative()
}

#[inline]
#[expect(
    clippy::cast_precision_loss,
    reason = "round-to-nearest is the host VM's i2f"
)]
pub fn int32_to_flt32(v: i32) -> f32 {
    v as f32
}

/// Exact: every `i32` is representable as an `f64`.
#[inline]
pub fn int32_to_flt64(v: i32) -> f64 {
    f64::from(v)
}

#[inline]
#[expect(
    clippy::cast_precision_loss,
    reason = "round-to-nearest is the host VM's l2f"
)]
pub fn int64_to_flt32(v: i64) -> f32 {
    v as f32
}

#[inline]
#[expect(
    clippy::cast_precision_loss,
    reason = "round-to-nearest is the host VM's l2d"
)]
pub fn int64_to_flt64(v: i64) -> f64 {
    v as f64
}

#[inline]
#[expect(
    clippy::cast_possible_truncation,
    reason = "saturating, NaN-to-zero truncation is the host VM's f2i"
)]
pub fn flt32_to_int32(v: f32) -> i32 {
    v as i32
}

#[inline]
#[expect(
    clippy::cast_possible_truncation,
    reason = "saturating, NaN-to-zero truncation is the host VM's f2l"
)]
pub fn flt32_to_int64(v: f32) -> i64 {
    v as i64
}

#[inline]
#[expect(
    clippy::cast_possible_truncation,
    reason = "saturating, NaN-to-zero truncation is the host VM's d2i"
)]
pub fn flt64_to_int32(v: f64) -> i32 {
    v as i32
}

#[inline]
#[expect(
    clippy::cast_possible_truncation,
    reason = "saturating, NaN-to-zero truncation is the host VM's d2l"
)]
pub fn flt64_to_int64(v: f64) -> i64 {
    v as i64
}
