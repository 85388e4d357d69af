use super::*;
use crate::value::{Addr, Memory};
use pretty_assertions::assert_eq;

// === Compare ===

#[test]
fn compare_dispatches_on_kind() {
    assert_eq!(Value::Int32(5).compare(&Value::Int32(5), false), Ok(Condition::Eq));
    assert_eq!(Value::Int32(-1).compare(&Value::Int32(1), true), Ok(Condition::Gt));
    assert_eq!(
        Value::Float64(f64::NAN).compare(&Value::Float64(1.0), false),
        Ok(Condition::Un)
    );
    assert_eq!(
        Value::Addr(Addr::NULL).compare(&Value::Addr(Addr::new(1)), false),
        Ok(Condition::Lt)
    );
}

#[test]
fn compare_rejects_mixed_kinds() {
    assert_eq!(
        Value::Int32(1).compare(&Value::Int64(1), false),
        Err(ValueError::KindMismatch {
            expected: ValueKind::Int32,
            found: ValueKind::Int64,
        })
    );
}

#[test]
fn compare_rejects_unordered_kinds() {
    assert_eq!(
        Value::Cond(Condition::Lt).compare(&Value::Cond(Condition::Gt), false),
        Err(ValueError::NotComparable(ValueKind::Cond))
    );
    assert_eq!(
        Value::Memory(Memory::Constant).compare(&Value::Memory(Memory::Constant), false),
        Err(ValueError::NotComparable(ValueKind::Memory))
    );
}

#[test]
fn fold_test_applies_condition2() {
    let one = Value::Int32(1);
    let two = Value::Int32(2);
    assert_eq!(fold_test(Condition2::LT, &one, &two, false), Ok(true));
    assert_eq!(fold_test(Condition2::GE, &one, &two, false), Ok(false));
    assert_eq!(fold_test(Condition2::GE.reverse(), &two, &one, false), Ok(false));

    let nan = Value::Float32(f32::NAN);
    assert_eq!(fold_test(Condition2::NE, &nan, &nan, false), Ok(true));
    assert_eq!(fold_test(Condition2::EQ, &nan, &nan, false), Ok(false));
    assert_eq!(
        fold_test(Condition2::ULT, &nan, &Value::Float32(1.0), false),
        Ok(true)
    );
    assert_eq!(
        fold_test(Condition2::LT, &nan, &Value::Float32(1.0), false),
        Ok(false)
    );
}

#[test]
fn fold_ternary_matches_host_vm_compares() {
    let nan = Value::Float64(f64::NAN);
    let one = Value::Float64(1.0);
    // fcmpl / fcmpg
    assert_eq!(fold_ternary(Condition3::NanLow, &nan, &one), Ok(-1));
    assert_eq!(fold_ternary(Condition3::NanHigh, &nan, &one), Ok(1));
    assert_eq!(fold_ternary(Condition3::NanLow, &one, &one), Ok(0));
    // lcmp
    assert_eq!(
        fold_ternary(Condition3::NanLow, &Value::Int64(3), &Value::Int64(9)),
        Ok(-1)
    );
    assert_eq!(
        fold_ternary(Condition3::SwappedNanLow, &Value::Int64(3), &Value::Int64(9)),
        Ok(1)
    );
}

#[test]
fn fold_ternary_propagates_errors() {
    assert_eq!(
        fold_ternary(Condition3::NanLow, &Value::Int32(0), &Value::Float32(0.0)),
        Err(ValueError::KindMismatch {
            expected: ValueKind::Int32,
            found: ValueKind::Float32,
        })
    );
}

// === Convert ===

#[test]
fn convert_between_numeric_kinds() {
    assert_eq!(Value::Int32(-1).convert(ValueKind::Int64), Ok(Value::Int64(-1)));
    assert_eq!(
        Value::Int64(0x1_0000_0002).convert(ValueKind::Int32),
        Ok(Value::Int32(2))
    );
    assert_eq!(
        Value::Float64(f64::NAN).convert(ValueKind::Int32),
        Ok(Value::Int32(0))
    );
    assert_eq!(
        Value::Float32(2.5).convert(ValueKind::Float64),
        Ok(Value::Float64(2.5))
    );
    assert_eq!(
        Value::Int32(7).convert(ValueKind::Float32),
        Ok(Value::Float32(7.0))
    );
}

#[test]
fn convert_to_own_kind_is_bitwise_identity() {
    let v = Value::Float64(-0.0);
    assert_eq!(v.convert(ValueKind::Float64), Ok(v));
    let nan = Value::Float32(f32::from_bits(0x7FC0_0001));
    assert_eq!(nan.convert(ValueKind::Float32), Ok(nan));
}

#[test]
fn convert_rejects_non_numeric() {
    assert_eq!(
        Value::Addr(Addr::NULL).convert(ValueKind::Int64),
        Err(ValueError::NotNumeric(ValueKind::Addr))
    );
    assert_eq!(
        Value::Int32(1).convert(ValueKind::Addr),
        Err(ValueError::NotNumeric(ValueKind::Addr))
    );
    assert_eq!(
        Value::Int32(1).convert(ValueKind::Void),
        Err(ValueError::NotNumeric(ValueKind::Void))
    );
}

// === Identity rewrites ===

#[test]
fn integer_rewrites() {
    assert_eq!(identity_rewrite(ArithOp::Add, &Value::Int32(0)), Some(Rewrite::Identity));
    assert_eq!(identity_rewrite(ArithOp::Mul, &Value::Int64(0)), Some(Rewrite::Annihilate));
    assert_eq!(identity_rewrite(ArithOp::Mul, &Value::Int32(1)), Some(Rewrite::Identity));
    assert_eq!(identity_rewrite(ArithOp::Mul, &Value::Int64(-1)), Some(Rewrite::Negate));
    assert_eq!(identity_rewrite(ArithOp::Add, &Value::Int32(3)), None);
}

#[test]
fn float_rewrites_respect_signed_zero() {
    assert_eq!(identity_rewrite(ArithOp::Add, &Value::Float64(-0.0)), Some(Rewrite::Identity));
    assert_eq!(identity_rewrite(ArithOp::Add, &Value::Float64(0.0)), None);
    assert_eq!(identity_rewrite(ArithOp::Mul, &Value::Float32(0.0)), None);
    assert_eq!(identity_rewrite(ArithOp::Mul, &Value::Float32(-1.0)), Some(Rewrite::Negate));
}

#[test]
fn nan_annihilates_both_operators() {
    let nan = Value::Float32(f32::NAN);
    assert_eq!(identity_rewrite(ArithOp::Add, &nan), Some(Rewrite::Annihilate));
    assert_eq!(identity_rewrite(ArithOp::Mul, &nan), Some(Rewrite::Annihilate));
}

#[test]
fn non_numeric_constants_never_rewrite() {
    assert_eq!(identity_rewrite(ArithOp::Add, &Value::Addr(Addr::NULL)), None);
    assert_eq!(identity_rewrite(ArithOp::Mul, &Value::Cond(Condition::Eq)), None);
}
