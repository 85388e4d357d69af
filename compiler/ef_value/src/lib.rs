//! EF Value - value model of the compiler back end
//!
//! This crate holds the constant-value layer every back-end phase shares:
//! - `ValueKind`: the machine-level value categories and their
//!   operand-stack accounting
//! - `Value`: a tagged constant holding exactly one typed payload
//! - `Condition`, `Condition2`, `Condition3`: compare outcomes and the
//!   boolean and three-way tests built on them
//! - Algebraic laws (`Predicates`, `Arithmetic`) for simplification
//! - Conversion and comparison with the host VM's numeric semantics
//!
//! # Design Philosophy
//!
//! - **Bit-exact**: "identical" means bitwise identical. NaN equals itself
//!   and `+0.0` differs from `-0.0` wherever identity is asked.
//! - **Kind in the type**: payload access is checked against the value's
//!   kind; kind-agnostic callers use the explicit-kind `*_as` entry points,
//!   which fail fast on a mismatch.
//! - **Plain data**: every type is `Copy`, immutable, and shareable across
//!   threads.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod bits;
mod condition;
mod convert;
mod error;
pub mod float;
pub mod fold;
mod kind;
mod numeric;
mod value;

pub use condition::{Condition, Condition2, Condition3};
pub use convert::{
    compare, convert_number, truncate_64_to_32, widen_32_to_64, Compare, ConvertNumber,
};
pub use error::ValueError;
pub use fold::{fold_ternary, fold_test, identity_rewrite, ArithOp, Rewrite};
pub use kind::ValueKind;
pub use numeric::{Arithmetic, Predicates};
pub use value::{value_kind, Addr, Memory, Payload, Value};
