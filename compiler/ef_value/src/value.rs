//! Runtime value cells.
//!
//! A [`Value`] holds exactly one typed payload and knows its own
//! [`ValueKind`], so reading a payload as the wrong kind is rejected instead
//! of reinterpreting bits. Typed access goes through the [`Payload`] trait,
//! which ties each Rust payload type to its kind at compile time.
//!
//! Kind-agnostic code that tracks kinds alongside values (bulk folding over
//! node operands, for example) uses the `*_as` entry points, which take the
//! caller's kind explicitly and fail fast if it disagrees with the payload.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::condition::Condition;
use crate::error::ValueError;
use crate::kind::ValueKind;

/// A machine address.
///
/// Only equality is meaningful across the address space; the ordering
/// exists so constant addresses can be compared at all.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Addr(u64);

impl Addr {
    pub const NULL: Addr = Addr(0);

    #[inline]
    pub const fn new(raw: u64) -> Self {
        Addr(raw)
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Memory region carried by a `Memory`-kind value.
///
/// Most memory regions are mutable and never appear as constants, so the
/// constant region is the only one a value can hold.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Memory {
    /// Region of immutable values.
    #[default]
    Constant,
}

/// A constant runtime value.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Addr(Addr),
    Cond(Condition),
    Memory(Memory),
}

// `Value` is copied into every constant node.
crate::static_assert_size!(Value, 16);

impl Value {
    #[inline]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Int32(_) => ValueKind::Int32,
            Self::Int64(_) => ValueKind::Int64,
            Self::Float32(_) => ValueKind::Float32,
            Self::Float64(_) => ValueKind::Float64,
            Self::Addr(_) => ValueKind::Addr,
            Self::Cond(_) => ValueKind::Cond,
            Self::Memory(_) => ValueKind::Memory,
        }
    }

    /// The (positive) zero of a payload kind: `0`, `+0.0`, null, `Eq` or
    /// the constant memory region.
    pub fn zero(kind: ValueKind) -> Result<Self, ValueError> {
        Ok(match kind {
            ValueKind::Int32 => Self::Int32(0),
            ValueKind::Int64 => Self::Int64(0),
            ValueKind::Float32 => Self::Float32(0.0),
            ValueKind::Float64 => Self::Float64(0.0),
            ValueKind::Addr => Self::Addr(Addr::NULL),
            ValueKind::Cond => Self::Cond(Condition::Eq),
            ValueKind::Memory => Self::Memory(Memory::Constant),
            ValueKind::Void | ValueKind::Tuple => return Err(ValueError::NoPayload(kind)),
        })
    }

    /// The payload as `T`, or `None` if this value has a different kind.
    #[inline]
    pub fn get<T: Payload>(&self) -> Option<T> {
        T::from_value(self)
    }

    pub fn try_get<T: Payload>(&self) -> Result<T, ValueError> {
        T::from_value(self).ok_or(ValueError::KindMismatch {
            expected: T::KIND,
            found: self.kind(),
        })
    }

    /// The payload as `T`.
    ///
    /// # Panics
    ///
    /// If this value is not of kind `T::KIND`.
    #[inline]
    pub fn payload<T: Payload>(&self) -> T {
        match self.try_get() {
            Ok(v) => v,
            Err(e) => panic!("payload access: {e}"),
        }
    }

    /// Replace the payload. The value takes the kind of `v`.
    #[inline]
    pub fn set<T: Payload>(&mut self, v: T) {
        *self = v.into_value();
    }

    /// Numeric "not zero".
    ///
    /// Both `+0.0` and `-0.0` count as zero. A condition is zero iff it is
    /// `Eq`. Memory is always nonzero.
    ///
    /// For addresses the answer is true when the address **is** null. This
    /// polarity is the reverse of every other kind and is kept as-is until
    /// the consumers that depend on it are audited.
    pub fn is_nonzero(&self) -> bool {
        match *self {
            Self::Int32(v) => v != 0,
            Self::Int64(v) => v != 0,
            Self::Float32(v) => v != 0.0,
            Self::Float64(v) => v != 0.0,
            Self::Addr(a) => a.is_null(),
            Self::Cond(c) => c != Condition::Eq,
            Self::Memory(_) => true,
        }
    }

    /// Bitwise identity.
    ///
    /// Floats compare their bit patterns: a NaN is identical to itself and
    /// `+0.0` is not identical to `-0.0`, unlike IEEE `==`. Values of
    /// different kinds are never identical.
    pub fn eq_bits(&self, other: &Value) -> bool {
        match (*self, *other) {
            (Self::Int32(a), Self::Int32(b)) => a == b,
            (Self::Int64(a), Self::Int64(b)) => a == b,
            (Self::Float32(a), Self::Float32(b)) => a.to_bits() == b.to_bits(),
            (Self::Float64(a), Self::Float64(b)) => a.to_bits() == b.to_bits(),
            (Self::Addr(a), Self::Addr(b)) => a == b,
            (Self::Cond(a), Self::Cond(b)) => a == b,
            (Self::Memory(_), Self::Memory(_)) => true,
            _ => false,
        }
    }

    /// [`is_nonzero`](Self::is_nonzero) with a caller-tracked kind.
    ///
    /// Payload-less kinds (`Void`, `Tuple`) report true.
    ///
    /// # Panics
    ///
    /// If `kind` carries a payload and is not this value's kind.
    pub fn is_nonzero_as(&self, kind: ValueKind) -> bool {
        if !kind.has_payload() {
            return true;
        }
        self.check_kind(kind);
        self.is_nonzero()
    }

    /// [`eq_bits`](Self::eq_bits) with a caller-tracked kind.
    ///
    /// Payload-less kinds (`Void`, `Tuple`) report true.
    ///
    /// # Panics
    ///
    /// If `kind` carries a payload and either value is of another kind.
    pub fn eq_as(&self, kind: ValueKind, other: &Value) -> bool {
        if !kind.has_payload() {
            return true;
        }
        self.check_kind(kind);
        other.check_kind(kind);
        self.eq_bits(other)
    }

    #[inline]
    fn check_kind(&self, kind: ValueKind) {
        if self.kind() != kind {
            let e = ValueError::KindMismatch {
                expected: kind,
                found: self.kind(),
            };
            panic!("value accessed with caller-tracked kind: {e}");
        }
    }
}

/// Values compare with [`Value::eq_bits`], so `Eq` holds and a value can
/// key a constant pool.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.eq_bits(other)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match *self {
            Self::Int32(v) => v.hash(state),
            Self::Int64(v) => v.hash(state),
            Self::Float32(v) => v.to_bits().hash(state),
            Self::Float64(v) => v.to_bits().hash(state),
            Self::Addr(a) => a.hash(state),
            Self::Cond(c) => c.hash(state),
            Self::Memory(m) => m.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int32(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}L"),
            Self::Float32(v) => write!(f, "{v:?}f"),
            Self::Float64(v) => write!(f, "{v:?}"),
            Self::Addr(a) => write!(f, "{a}"),
            Self::Cond(c) => write!(f, "{c}"),
            Self::Memory(_) => f.write_str("constmem"),
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A Rust type that can be stored in a [`Value`].
///
/// Each implementor maps to exactly one [`ValueKind`].
pub trait Payload: Copy + sealed::Sealed {
    const KIND: ValueKind;

    fn from_value(v: &Value) -> Option<Self>;

    fn into_value(self) -> Value;
}

macro_rules! impl_payload {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Payload for $ty {
                const KIND: ValueKind = ValueKind::$variant;

                #[inline]
                fn from_value(v: &Value) -> Option<Self> {
                    match *v {
                        Value::$variant(x) => Some(x),
                        _ => None,
                    }
                }

                #[inline]
                fn into_value(self) -> Value {
                    Value::$variant(self)
                }
            }

            impl From<$ty> for Value {
                #[inline]
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_payload! {
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
    Addr => Addr,
    Condition => Cond,
    Memory => Memory,
}

/// Kind of the payload type `T`.
#[inline]
pub const fn value_kind<T: Payload>() -> ValueKind {
    T::KIND
}
