//! Kind-dispatched folding over constant values.
//!
//! Constant folding and algebraic simplification see operands as
//! [`Value`]s, not as typed payloads. This module dispatches on the value
//! kinds to the typed conversion, comparison and identity laws.
//!
//! # Scope
//!
//! - Compare two constants and evaluate a [`Condition2`] or [`Condition3`]
//!   on the outcome.
//! - Convert a constant to another numeric kind.
//! - Classify a constant operand of `+` or `*` that makes the operation
//!   independent of the other operand.
//!
//! Rewriting the graph with the result is the caller's job.

use crate::condition::{Condition, Condition2, Condition3};
use crate::convert::{compare, convert_number, ConvertNumber};
use crate::error::ValueError;
use crate::kind::ValueKind;
use crate::numeric::Arithmetic;
use crate::value::Value;

impl Value {
    /// Compare two constants of the same kind.
    ///
    /// Integers, floats and addresses are comparable; conditions and memory
    /// are not.
    pub fn compare(&self, other: &Value, unsigned: bool) -> Result<Condition, ValueError> {
        let result = match (*self, *other) {
            (Self::Int32(a), Self::Int32(b)) => compare(a, b, unsigned),
            (Self::Int64(a), Self::Int64(b)) => compare(a, b, unsigned),
            (Self::Float32(a), Self::Float32(b)) => compare(a, b, unsigned),
            (Self::Float64(a), Self::Float64(b)) => compare(a, b, unsigned),
            (Self::Addr(a), Self::Addr(b)) => compare(a, b, unsigned),
            (a, b) if a.kind() != b.kind() => {
                return Err(ValueError::KindMismatch {
                    expected: a.kind(),
                    found: b.kind(),
                })
            }
            (a, _) => return Err(ValueError::NotComparable(a.kind())),
        };
        tracing::trace!(lhs = %self, rhs = %other, unsigned, %result, "folded compare");
        Ok(result)
    }

    /// Convert a numeric constant to `dest`.
    ///
    /// Converting to the value's own kind returns it unchanged.
    pub fn convert(&self, dest: ValueKind) -> Result<Value, ValueError> {
        let result = match *self {
            Self::Int32(v) => convert_to(v, dest)?,
            Self::Int64(v) => convert_to(v, dest)?,
            Self::Float32(v) => convert_to(v, dest)?,
            Self::Float64(v) => convert_to(v, dest)?,
            _ => return Err(ValueError::NotNumeric(self.kind())),
        };
        tracing::trace!(from = %self, to = %result, "folded conversion");
        Ok(result)
    }
}

/// Dispatch a typed payload to the conversion for `dest`.
fn convert_to<S>(v: S, dest: ValueKind) -> Result<Value, ValueError>
where
    S: ConvertNumber<i32> + ConvertNumber<i64> + ConvertNumber<f32> + ConvertNumber<f64>,
{
    Ok(match dest {
        ValueKind::Int32 => Value::Int32(convert_number(v)),
        ValueKind::Int64 => Value::Int64(convert_number(v)),
        ValueKind::Float32 => Value::Float32(convert_number(v)),
        ValueKind::Float64 => Value::Float64(convert_number(v)),
        _ => return Err(ValueError::NotNumeric(dest)),
    })
}

/// Fold `lhs test rhs` to a boolean.
pub fn fold_test(
    test: Condition2,
    lhs: &Value,
    rhs: &Value,
    unsigned: bool,
) -> Result<bool, ValueError> {
    Ok(test.apply(lhs.compare(rhs, unsigned)?))
}

/// Fold a three-way comparison of two constants to -1, 0 or 1.
pub fn fold_ternary(cmp: Condition3, lhs: &Value, rhs: &Value) -> Result<i32, ValueError> {
    Ok(cmp.apply(lhs.compare(rhs, false)?))
}

/// Arithmetic operator with identity laws.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ArithOp {
    Add,
    Mul,
}

/// How `constant op x` simplifies for every `x`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Rewrite {
    /// The result is the constant itself.
    Annihilate,
    /// The result is `x`.
    Identity,
    /// The result is `-x`.
    Negate,
}

/// Classify a constant operand of a commutative `op`.
///
/// Returns `None` when the constant is not numeric or satisfies none of the
/// laws, in which case the operation must be kept.
pub fn identity_rewrite(op: ArithOp, constant: &Value) -> Option<Rewrite> {
    let rewrite = match *constant {
        Value::Int32(v) => classify(op, v),
        Value::Int64(v) => classify(op, v),
        Value::Float32(v) => classify(op, v),
        Value::Float64(v) => classify(op, v),
        _ => None,
    };
    if let Some(rewrite) = rewrite {
        tracing::debug!(?op, %constant, ?rewrite, "identity rewrite");
    }
    rewrite
}

fn classify<T: Arithmetic>(op: ArithOp, v: T) -> Option<Rewrite> {
    match op {
        ArithOp::Add if v.is_additive_annihilator() => Some(Rewrite::Annihilate),
        ArithOp::Add if v.is_additive_identity() => Some(Rewrite::Identity),
        ArithOp::Mul if v.is_multiplicative_annihilator() => Some(Rewrite::Annihilate),
        ArithOp::Mul if v.is_multiplicative_identity() => Some(Rewrite::Identity),
        ArithOp::Mul if v.is_multiplicative_negator() => Some(Rewrite::Negate),
        ArithOp::Add | ArithOp::Mul => None,
    }
}

#[cfg(test)]
mod tests;
