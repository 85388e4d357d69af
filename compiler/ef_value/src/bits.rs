//! Immediate-operand queries on integer constants.
//!
//! Instruction selectors ask whether a constant fits an immediate field
//! of a given width, and strength reduction wants bit counts. The
//! `extract_*` functions read the `Int32` payload and return the narrowed
//! value when it fits.

use crate::value::Value;

#[inline]
fn int32_payload(v: &Value) -> Option<i32> {
    v.get::<i32>()
}

/// The payload as an unsigned byte, if it lies in `0..=0xFF`.
pub fn extract_u8(v: &Value) -> Option<u8> {
    int32_payload(v).and_then(|i| u8::try_from(i).ok())
}

/// The payload as an unsigned halfword, if it lies in `0..=0xFFFF`.
pub fn extract_u16(v: &Value) -> Option<u16> {
    int32_payload(v).and_then(|i| u16::try_from(i).ok())
}

/// The payload as a signed halfword, if it lies in `-32768..=32767`.
///
/// Both bounds are inclusive.
pub fn extract_s16(v: &Value) -> Option<i16> {
    int32_payload(v).and_then(|i| i16::try_from(i).ok())
}

/// The payload's bits as an unsigned word. Always fits.
pub fn extract_u32(v: &Value) -> Option<u32> {
    int32_payload(v).map(i32::cast_unsigned)
}

#[inline]
pub const fn is_power_of_two(v: u32) -> bool {
    v.is_power_of_two()
}

/// Number of leading zero bits; 32 for zero.
#[inline]
pub const fn leading_zeros(v: u32) -> u32 {
    v.leading_zeros()
}

/// Index of the least significant set bit, or `None` for zero.
#[inline]
pub const fn least_sig_bit(v: u32) -> Option<u32> {
    if v == 0 {
        None
    } else {
        Some(v.trailing_zeros())
    }
}

/// Whether the word is the sign extension of its low byte.
#[inline]
pub const fn is_one_byte_signed(v: u32) -> bool {
    let high = v >> 7;
    high == 0 || high == 0x01FF_FFFF
}

#[cfg(test)]
mod tests;
