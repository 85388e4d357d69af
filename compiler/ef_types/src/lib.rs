//! Host VM type kinds.
//!
//! The type system classifies every field, local and operand by a
//! [`TypeKind`]. The back end only cares about the machine representation,
//! so each type kind maps to exactly one [`ValueKind`] through a fixed
//! table. The table is an array sized by [`TypeKind::COUNT`], so adding a
//! type kind without a table entry does not compile.

use std::fmt;

use ef_value::ValueKind;

/// Kind of a host VM type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TypeKind {
    Void = 0,
    Boolean = 1,
    /// Unsigned byte (internal use only).
    UByte = 2,
    Byte = 3,
    Char = 4,
    Short = 5,
    Int = 6,
    Long = 7,
    Float = 8,
    Double = 9,
    /// Instance of a class.
    Object = 10,
    /// Internal object with no class (vtables, monitors).
    Special = 11,
    Array = 12,
    Interface = 13,
}

/// Value kind for each type kind, indexed by discriminant.
const TYPE_KIND_VALUE_KINDS: [ValueKind; TypeKind::COUNT] = [
    ValueKind::Void,    // Void
    ValueKind::Int32,   // Boolean
    ValueKind::Int32,   // UByte
    ValueKind::Int32,   // Byte
    ValueKind::Int32,   // Char
    ValueKind::Int32,   // Short
    ValueKind::Int32,   // Int
    ValueKind::Int64,   // Long
    ValueKind::Float32, // Float
    ValueKind::Float64, // Double
    ValueKind::Addr,    // Object
    ValueKind::Addr,    // Special
    ValueKind::Addr,    // Array
    ValueKind::Addr,    // Interface
];

impl TypeKind {
    /// Number of type kinds.
    pub const COUNT: usize = 14;

    /// All type kinds in discriminant order.
    pub const ALL: [TypeKind; Self::COUNT] = [
        Self::Void,
        Self::Boolean,
        Self::UByte,
        Self::Byte,
        Self::Char,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Object,
        Self::Special,
        Self::Array,
        Self::Interface,
    ];

    /// Type kind with the given discriminant.
    #[inline]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        if (ordinal as usize) < Self::COUNT {
            Some(Self::ALL[ordinal as usize])
        } else {
            None
        }
    }

    /// Machine representation of values of this type kind.
    #[inline]
    pub const fn value_kind(self) -> ValueKind {
        TYPE_KIND_VALUE_KINDS[self as usize]
    }

    /// Primitive (non-reference) type.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        (self as u8) <= (Self::Double as u8)
    }

    /// Reference type: held as an address.
    #[inline]
    pub const fn is_reference(self) -> bool {
        !self.is_primitive()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Boolean => "boolean",
            Self::UByte => "ubyte",
            Self::Byte => "byte",
            Self::Char => "char",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Object => "object",
            Self::Special => "special",
            Self::Array => "array",
            Self::Interface => "interface",
        }
    }
}

/// Machine representation of values of type kind `tk`.
#[inline]
pub const fn type_kind_to_value_kind(tk: TypeKind) -> ValueKind {
    tk.value_kind()
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
