//! Comparison conditions.
//!
//! Comparing two values yields exactly one raw [`Condition`]. Consumers of
//! that result use one of two derived encodings:
//!
//! - [`Condition2`]: a boolean test, "is the raw condition in this set".
//!   A 4-bit mask over `{Lt, Eq, Gt, Un}`, so all 16 tests are expressible.
//! - [`Condition3`]: a three-way comparator yielding -1, 0 or 1, as the host
//!   VM's `lcmp`/`fcmpl`/`fcmpg` family does. The variants differ in which
//!   way an unordered (NaN) comparison falls and in operand order.
//!
//! Both encodings support `reverse` (the test to use after swapping the
//! operands) and `invert` (the negated test).

use std::fmt;

use bitflags::bitflags;

/// Raw outcome of comparing `arg1` with `arg2`.
///
/// The discriminants are disjoint bits so a `Condition` can be tested
/// against a [`Condition2`] mask with a single AND.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Condition {
    /// `arg1 < arg2`
    Lt = 1,
    /// `arg1 = arg2`
    Eq = 2,
    /// `arg1 > arg2`
    Gt = 4,
    /// Either argument is a NaN.
    Un = 8,
}

impl Condition {
    pub const ALL: [Condition; 4] = [Self::Lt, Self::Eq, Self::Gt, Self::Un];

    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// The outcome of the same comparison with the operands swapped.
    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Lt => Self::Gt,
            Self::Gt => Self::Lt,
            Self::Eq => Self::Eq,
            Self::Un => Self::Un,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Lt => "lt",
            Self::Eq => "eq",
            Self::Gt => "gt",
            Self::Un => "un",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Two-way conditional: true iff the raw condition is in the set.
    ///
    /// ```text
    /// 0000 never    0100 gt     1000 unord  1100 ugt
    /// 0001 lt       0101 lgt    1001 ult    1101 ne
    /// 0010 eq       0110 ge     1010 ueq    1110 uge
    /// 0011 le       0111 ord    1011 ule    1111 always
    /// ```
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
    pub struct Condition2: u8 {
        const LT = Condition::Lt.bits();
        const EQ = Condition::Eq.bits();
        const GT = Condition::Gt.bits();
        const UN = Condition::Un.bits();
    }
}

impl Condition2 {
    /// Always false.
    pub const NEVER: Self = Self::empty();
    /// `arg1 <= arg2`
    pub const LE: Self = Self::LT.union(Self::EQ);
    /// `arg1 <> arg2`
    pub const LGT: Self = Self::LT.union(Self::GT);
    /// `arg1 >= arg2`
    pub const GE: Self = Self::GT.union(Self::EQ);
    /// The arguments are ordered.
    pub const ORD: Self = Self::LT.union(Self::EQ).union(Self::GT);
    /// The arguments are unordered.
    pub const UNORD: Self = Self::UN;
    /// `arg1 ?< arg2`
    pub const ULT: Self = Self::UN.union(Self::LT);
    /// `arg1 ?= arg2`
    pub const UEQ: Self = Self::UN.union(Self::EQ);
    /// `arg1 ?<= arg2`
    pub const ULE: Self = Self::UN.union(Self::LE);
    /// `arg1 ?> arg2`
    pub const UGT: Self = Self::UN.union(Self::GT);
    /// `arg1 != arg2`
    pub const NE: Self = Self::UN.union(Self::LGT);
    /// `arg1 ?>= arg2`
    pub const UGE: Self = Self::UN.union(Self::GE);
    /// Always true.
    pub const ALWAYS: Self = Self::all();

    /// The condition `c'` such that `(arg1 c arg2) == (arg2 c' arg1)`.
    ///
    /// Exchanges the `Lt` and `Gt` bits; `Eq` and `Un` are symmetric.
    #[inline]
    pub const fn reverse(self) -> Self {
        let c = self.bits();
        Self::from_bits_retain((c & 0b1010) | ((c & 0b0100) >> 2) | ((c & 0b0001) << 2))
    }

    /// The condition `c'` such that `!(arg1 c arg2) == (arg1 c' arg2)`.
    #[inline]
    pub const fn invert(self) -> Self {
        Self::from_bits_retain(self.bits() ^ Self::ALWAYS.bits())
    }

    /// Evaluate this test on a raw comparison outcome.
    #[inline]
    pub const fn apply(self, c: Condition) -> bool {
        self.bits() & c.bits() != 0
    }

    pub const fn name(self) -> &'static str {
        match self.bits() {
            0b0000 => "never",
            0b0001 => "lt",
            0b0010 => "eq",
            0b0011 => "le",
            0b0100 => "gt",
            0b0101 => "lgt",
            0b0110 => "ge",
            0b0111 => "ord",
            0b1000 => "unord",
            0b1001 => "ult",
            0b1010 => "ueq",
            0b1011 => "ule",
            0b1100 => "ugt",
            0b1101 => "ne",
            0b1110 => "uge",
            _ => "always",
        }
    }
}

impl From<Condition> for Condition2 {
    fn from(c: Condition) -> Self {
        Self::from_bits_retain(c.bits())
    }
}

impl fmt::Display for Condition2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Three-way conditional.
///
/// ```text
///                   lt  eq  gt  un
/// NanLow            -1   0   1  -1
/// NanHigh           -1   0   1   1
/// SwappedNanLow      1   0  -1  -1
/// SwappedNanHigh     1   0  -1   1
/// ```
///
/// Bit 1 of the discriminant selects operand order and bit 0 selects the
/// NaN direction.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Condition3 {
    /// Ordinary compare; unordered counts as less.
    NanLow = 0,
    /// Ordinary compare; unordered counts as greater.
    NanHigh = 1,
    /// Operands swapped; unordered yields -1.
    SwappedNanLow = 2,
    /// Operands swapped; unordered yields 1.
    SwappedNanHigh = 3,
}

/// Raw outcomes that make each `Condition3` yield 1, indexed by
/// discriminant. Every other outcome except `Eq` yields -1.
const POSITIVE_OUTCOMES: [Condition2; 4] = [
    Condition2::GT,
    Condition2::GT.union(Condition2::UN),
    Condition2::LT,
    Condition2::LT.union(Condition2::UN),
];

impl Condition3 {
    pub const ALL: [Condition3; 4] = [
        Self::NanLow,
        Self::NanHigh,
        Self::SwappedNanLow,
        Self::SwappedNanHigh,
    ];

    /// The condition `c'` such that `(arg1 c arg2) == (arg2 c' arg1)`.
    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Self::NanLow => Self::SwappedNanLow,
            Self::NanHigh => Self::SwappedNanHigh,
            Self::SwappedNanLow => Self::NanLow,
            Self::SwappedNanHigh => Self::NanHigh,
        }
    }

    /// The condition `c'` such that `-(arg1 c arg2) == (arg1 c' arg2)`.
    ///
    /// Negation swaps the Lt/Gt outcomes and flips the NaN direction.
    #[inline]
    pub const fn invert(self) -> Self {
        match self {
            Self::NanLow => Self::SwappedNanHigh,
            Self::NanHigh => Self::SwappedNanLow,
            Self::SwappedNanLow => Self::NanHigh,
            Self::SwappedNanHigh => Self::NanLow,
        }
    }

    /// Evaluate this comparator on a raw comparison outcome.
    #[inline]
    pub const fn apply(self, c: Condition) -> i32 {
        if matches!(c, Condition::Eq) {
            0
        } else if POSITIVE_OUTCOMES[self as usize].apply(c) {
            1
        } else {
            -1
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::NanLow => "cmpl",
            Self::NanHigh => "cmpg",
            Self::SwappedNanLow => "ccmpl",
            Self::SwappedNanHigh => "ccmpg",
        }
    }
}

impl fmt::Display for Condition3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
