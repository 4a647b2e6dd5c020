// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::arg::{Callback, Chan, DynError, Variadic};
use rstest::rstest;
use std::collections::HashMap;

#[rstest]
#[case(i32::type_desc(), Kind::Value)]
#[case(String::type_desc(), Kind::Value)]
#[case(Option::<u8>::type_desc(), Kind::Pointer)]
#[case(Vec::<u8>::type_desc(), Kind::Sequence)]
#[case(HashMap::<String, u8>::type_desc(), Kind::Mapping)]
#[case(Chan::<u8>::type_desc(), Kind::Channel)]
#[case(Callback::<u8, u8>::type_desc(), Kind::Callable)]
#[case(DynError::type_desc(), Kind::Interface)]
#[case(Value::type_desc(), Kind::Interface)]
fn test_kind_of(#[case] desc: TypeDesc, #[case] kind: Kind) {
    assert_eq!(desc.kind(), kind);
}

#[test]
fn test_nilable_kinds() {
    assert!(!Kind::Value.is_nilable());
    for kind in [
        Kind::Pointer,
        Kind::Sequence,
        Kind::Mapping,
        Kind::Channel,
        Kind::Callable,
        Kind::Interface,
    ] {
        assert!(kind.is_nilable(), "{kind:?}");
    }
}

#[test]
fn test_identity_compared_kinds() {
    assert!(Kind::Value.is_comparable());
    assert!(Kind::Pointer.is_comparable());
    assert!(Kind::Interface.is_comparable());
    assert!(!Kind::Sequence.is_comparable());
    assert!(!Kind::Mapping.is_comparable());
    assert!(!Kind::Channel.is_comparable());
    assert!(!Kind::Callable.is_comparable());
}

#[test]
fn test_equality_is_by_type() {
    assert_eq!(i32::type_desc(), i32::type_desc());
    assert_ne!(i32::type_desc(), i64::type_desc());
    assert_eq!(
        u8::type_desc(),
        u8::type_desc().with_default::<u8>().variadic()
    );
}

#[test]
fn test_short_name_strips_paths() {
    assert_eq!(String::type_desc().short_name(), "String");
    assert_eq!(Vec::<String>::type_desc().short_name(), "Vec<String>");
    assert_eq!(
        HashMap::<String, Option<u8>>::type_desc().short_name(),
        "HashMap<String, Option<u8>>"
    );
}

#[test]
fn test_variadic_display_uses_element() {
    let desc = Variadic::<Value>::type_desc();
    assert!(desc.is_variadic());
    assert_eq!(desc.to_string(), "...Value");
    assert_eq!(desc.elem().unwrap(), Value::type_desc());
}

#[test]
fn test_zero_values() {
    assert_eq!(i32::type_desc().zero().unwrap().get::<i32>(), Some(0));
    assert!(Option::<u8>::type_desc().zero().unwrap().is_nil());
    assert!(DynError::type_desc().zero().unwrap().is_nil());
    assert_eq!(Vec::<u8>::type_desc().zero().unwrap().get::<Vec<u8>>(), Some(vec![]));
}

#[test]
fn test_with_default_supplies_zero() {
    #[derive(Clone, Debug, Default, PartialEq)]
    struct Bare(u8);
    impl Arg for Bare {
        fn into_value(self) -> Value {
            Value::new(self)
        }
    }

    assert!(Bare::type_desc().zero().is_none());
    let desc = Bare::type_desc().with_default::<Bare>();
    assert_eq!(desc.zero().unwrap().get::<Bare>(), Some(Bare(0)));
}

#[test]
fn test_open_interface_accepts_everything() {
    let any = Value::type_desc();
    assert!(any.accepts(&i32::type_desc()));
    assert!(any.accepts(&Vec::<u8>::type_desc()));

    let error = DynError::type_desc();
    assert!(error.accepts(&DynError::type_desc()));
    assert!(!error.accepts(&String::type_desc()));
}
