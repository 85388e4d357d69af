use super::*;
use pretty_assertions::assert_eq;

#[test]
fn all_is_in_discriminant_order() {
    for (i, tk) in TypeKind::ALL.iter().enumerate() {
        assert_eq!(*tk as usize, i);
    }
}

#[test]
fn from_ordinal_round_trips() {
    for tk in TypeKind::ALL {
        assert_eq!(TypeKind::from_ordinal(tk as u8), Some(tk));
    }
    assert_eq!(TypeKind::from_ordinal(14), None);
    assert_eq!(TypeKind::from_ordinal(u8::MAX), None);
}

#[test]
fn small_integers_widen_to_int32() {
    for tk in [
        TypeKind::Boolean,
        TypeKind::UByte,
        TypeKind::Byte,
        TypeKind::Char,
        TypeKind::Short,
        TypeKind::Int,
    ] {
        assert_eq!(type_kind_to_value_kind(tk), ValueKind::Int32, "{tk}");
    }
}

#[test]
fn wide_and_float_kinds() {
    assert_eq!(type_kind_to_value_kind(TypeKind::Void), ValueKind::Void);
    assert_eq!(type_kind_to_value_kind(TypeKind::Long), ValueKind::Int64);
    assert_eq!(type_kind_to_value_kind(TypeKind::Float), ValueKind::Float32);
    assert_eq!(type_kind_to_value_kind(TypeKind::Double), ValueKind::Float64);
}

#[test]
fn references_are_addresses() {
    for tk in TypeKind::ALL.into_iter().filter(|tk| tk.is_reference()) {
        assert_eq!(tk.value_kind(), ValueKind::Addr, "{tk}");
    }
    assert_eq!(
        TypeKind::ALL.iter().filter(|tk| tk.is_reference()).count(),
        4
    );
}

#[test]
fn every_type_kind_maps_to_a_java_kind() {
    for tk in TypeKind::ALL {
        assert!(tk.value_kind().is_java(), "{tk}");
    }
}

#[test]
fn stack_slots_follow_value_kind() {
    assert_eq!(TypeKind::Long.value_kind().stack_slots(), Some(2));
    assert_eq!(TypeKind::Double.value_kind().stack_slots(), Some(2));
    assert_eq!(TypeKind::Object.value_kind().stack_slots(), Some(1));
    assert_eq!(TypeKind::Void.value_kind().stack_slots(), None);
}

#[test]
fn names() {
    assert_eq!(TypeKind::Interface.to_string(), "interface");
    assert_eq!(TypeKind::UByte.name(), "ubyte");
}
