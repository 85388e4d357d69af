use super::*;
use proptest::prelude::*;

#[test]
fn extract_u8_range() {
    assert_eq!(extract_u8(&Value::Int32(0)), Some(0));
    assert_eq!(extract_u8(&Value::Int32(0xFF)), Some(0xFF));
    assert_eq!(extract_u8(&Value::Int32(0x100)), None);
    assert_eq!(extract_u8(&Value::Int32(-1)), None);
}

#[test]
fn extract_u16_range() {
    assert_eq!(extract_u16(&Value::Int32(0xFFFF)), Some(0xFFFF));
    assert_eq!(extract_u16(&Value::Int32(0x1_0000)), None);
    assert_eq!(extract_u16(&Value::Int32(i32::MIN)), None);
}

#[test]
fn extract_s16_bounds_are_inclusive() {
    assert_eq!(extract_s16(&Value::Int32(-32_768)), Some(i16::MIN));
    assert_eq!(extract_s16(&Value::Int32(32_767)), Some(i16::MAX));
    assert_eq!(extract_s16(&Value::Int32(-32_769)), None);
    assert_eq!(extract_s16(&Value::Int32(32_768)), None);
    assert_eq!(extract_s16(&Value::Int32(0)), Some(0));
}

#[test]
fn extract_u32_reinterprets() {
    assert_eq!(extract_u32(&Value::Int32(-1)), Some(u32::MAX));
    assert_eq!(extract_u32(&Value::Int32(7)), Some(7));
}

#[test]
fn extract_requires_int32_payload() {
    assert_eq!(extract_u8(&Value::Int64(1)), None);
    assert_eq!(extract_s16(&Value::Float32(1.0)), None);
    assert_eq!(extract_u32(&Value::Int64(1)), None);
}

#[test]
fn power_of_two() {
    assert!(is_power_of_two(1));
    assert!(is_power_of_two(0x8000_0000));
    assert!(!is_power_of_two(0));
    assert!(!is_power_of_two(6));
}

#[test]
fn bit_counts() {
    assert_eq!(leading_zeros(0), 32);
    assert_eq!(leading_zeros(1), 31);
    assert_eq!(leading_zeros(0x8000_0000), 0);
    assert_eq!(least_sig_bit(0), None);
    assert_eq!(least_sig_bit(1), Some(0));
    assert_eq!(least_sig_bit(0b1011_0000), Some(4));
    assert_eq!(least_sig_bit(0x8000_0000), Some(31));
}

#[test]
fn one_byte_signed() {
    assert!(is_one_byte_signed(0));
    assert!(is_one_byte_signed(127));
    assert!(!is_one_byte_signed(128));
    assert!(is_one_byte_signed((-128_i32).cast_unsigned()));
    assert!(!is_one_byte_signed((-129_i32).cast_unsigned()));
    assert!(is_one_byte_signed(u32::MAX));
}

proptest! {
    #[test]
    fn extract_s16_accepts_exactly_i16(x in any::<i32>()) {
        let fits = (-32_768..=32_767).contains(&x);
        prop_assert_eq!(extract_s16(&Value::Int32(x)).is_some(), fits);
    }

    #[test]
    fn one_byte_signed_matches_i8_range(x in any::<i32>()) {
        prop_assert_eq!(is_one_byte_signed(x.cast_unsigned()), i8::try_from(x).is_ok());
    }
}
