//! Value kind taxonomy.
//!
//! Every value flowing through the primitive graph has a `ValueKind` that
//! determines its machine representation. The classifications below are
//! pure functions of the kind:
//!
//! | Kind    | concrete | java | reg-or-mem | storable | stack slots |
//! |---------|----------|------|------------|----------|-------------|
//! | Void    | yes      | yes  | no         | no       | -           |
//! | Int32   | yes      | yes  | yes        | yes      | 1           |
//! | Int64   | yes      | yes  | yes        | yes      | 2           |
//! | Float32 | yes      | yes  | yes        | yes      | 1           |
//! | Float64 | yes      | yes  | yes        | yes      | 2           |
//! | Addr    | yes      | yes  | yes        | yes      | 1           |
//! | Cond    | yes      | no   | yes        | no       | -           |
//! | Memory  | no       | no   | yes        | no       | -           |
//! | Tuple   | no       | no   | no         | no       | -           |
//!
//! # Stack slots
//!
//! Word/doubleword classification follows the host VM's operand-stack model,
//! not the machine: an `Addr` is one slot even on targets where an address
//! occupies two machine words.

use std::fmt;

/// Kind of a value in the primitive graph.
///
/// Discriminants are ordered so that the range-based classifications
/// (`is_concrete`, `is_java`, ...) are single comparisons.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ValueKind {
    /// No value.
    Void = 0,
    /// 32-bit integer, or the high or low half of a 64-bit integer.
    Int32 = 1,
    /// 64-bit integer.
    Int64 = 2,
    /// 32-bit IEEE float.
    Float32 = 3,
    /// 64-bit IEEE float.
    Float64 = 4,
    /// Pointer.
    Addr = 5,
    /// The result of a compare.
    Cond = 6,
    /// All of memory, as threaded through data-flow edges.
    Memory = 7,
    /// A tuple of other values.
    Tuple = 8,
}

impl ValueKind {
    /// Number of value kinds.
    pub const COUNT: usize = 9;

    /// All kinds in discriminant order.
    pub const ALL: [ValueKind; Self::COUNT] = [
        Self::Void,
        Self::Int32,
        Self::Int64,
        Self::Float32,
        Self::Float64,
        Self::Addr,
        Self::Cond,
        Self::Memory,
        Self::Tuple,
    ];

    /// Has a representable runtime value (everything up to `Cond`).
    #[inline]
    pub const fn is_concrete(self) -> bool {
        (self as u8) <= (Self::Cond as u8)
    }

    /// One of the host VM's operand-stack types (`Void` through `Addr`).
    #[inline]
    pub const fn is_java(self) -> bool {
        (self as u8) <= (Self::Addr as u8)
    }

    /// Can live in a register or in memory.
    #[inline]
    pub const fn is_reg_or_mem(self) -> bool {
        !matches!(self, Self::Void) && (self as u8) <= (Self::Memory as u8)
    }

    /// Can be stored to and loaded from memory.
    #[inline]
    pub const fn is_storable(self) -> bool {
        !matches!(self, Self::Void) && (self as u8) <= (Self::Addr as u8)
    }

    #[inline]
    pub const fn is_void(self) -> bool {
        matches!(self, Self::Void)
    }

    #[inline]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Int32 | Self::Int64)
    }

    #[inline]
    pub const fn is_floating_point(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    /// `Int32`, `Int64`, `Float32` or `Float64`.
    #[inline]
    pub const fn is_numeric(self) -> bool {
        self.is_integer() || self.is_floating_point()
    }

    #[inline]
    pub const fn is_memory(self) -> bool {
        matches!(self, Self::Memory)
    }

    /// Takes one slot on the host VM's operand stack.
    #[inline]
    pub const fn is_word(self) -> bool {
        matches!(self, Self::Int32 | Self::Float32 | Self::Addr)
    }

    /// Takes two slots on the host VM's operand stack.
    #[inline]
    pub const fn is_doubleword(self) -> bool {
        matches!(self, Self::Int64 | Self::Float64)
    }

    /// Operand-stack slots taken by a value of this kind, or `None` for
    /// kinds that never live on the operand stack.
    #[inline]
    pub const fn stack_slots(self) -> Option<u8> {
        if self.is_word() {
            Some(1)
        } else if self.is_doubleword() {
            Some(2)
        } else {
            None
        }
    }

    /// Whether a `Value` of this kind carries a payload.
    ///
    /// `Void` and `Tuple` have nothing to store.
    #[inline]
    pub const fn has_payload(self) -> bool {
        !matches!(self, Self::Void | Self::Tuple)
    }

    /// One-character name used in IR dumps.
    pub const fn short_name(self) -> char {
        match self {
            Self::Void => 'v',
            Self::Int32 => 'i',
            Self::Int64 => 'l',
            Self::Float32 => 'f',
            Self::Float64 => 'd',
            Self::Addr => 'a',
            Self::Cond => 'c',
            Self::Memory => 'm',
            Self::Tuple => 't',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Int32 => "int",
            Self::Int64 => "long",
            Self::Float32 => "float",
            Self::Float64 => "double",
            Self::Addr => "addr",
            Self::Cond => "cond",
            Self::Memory => "memory",
            Self::Tuple => "tuple",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
