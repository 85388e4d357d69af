//! Errors from the checked value operations.

use std::fmt;

use crate::kind::ValueKind;

/// Error from a kind-checked operation on a [`Value`](crate::Value).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ValueError {
    /// A payload was read as a kind other than the one it was built with.
    KindMismatch {
        expected: ValueKind,
        found: ValueKind,
    },
    /// The kind has no payload (`Void`, `Tuple`).
    NoPayload(ValueKind),
    /// The kind has no ordering.
    NotComparable(ValueKind),
    /// The kind is not one of the four numeric kinds.
    NotNumeric(ValueKind),
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueError::KindMismatch { expected, found } => {
                write!(f, "expected a {expected} value, found {found}")
            }
            ValueError::NoPayload(kind) => write!(f, "{kind} values carry no payload"),
            ValueError::NotComparable(kind) => write!(f, "{kind} values cannot be compared"),
            ValueError::NotNumeric(kind) => write!(f, "{kind} is not a numeric kind"),
        }
    }
}

impl std::error::Error for ValueError {}
