// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::arg::DynError;
use rstest::rstest;

fn sig() -> Signature {
    Signature::builder().name("f").param::<i32>().build()
}

fn check(input: Input, declared: TypeDesc) -> Result<Value, MockError> {
    check_input(input, declared, &sig(), "argument 0")
}

#[test]
fn test_args_macro_converts_each_item() {
    let inputs = crate::args![ANY, NIL, 3_i32, "x".to_string()];
    assert!(matches!(inputs[0], Input::Any));
    assert!(matches!(inputs[1], Input::Nil));
    assert!(matches!(&inputs[2], Input::Value(v) if v.get::<i32>() == Some(3)));
    assert!(matches!(&inputs[3], Input::Value(v) if v.declared() == String::type_desc()));
}

#[test]
fn test_exact_type_accepted() {
    let value = check(3_i32.into_input(), i32::type_desc()).unwrap();
    assert_eq!(value, Value::of(3_i32));
}

#[test]
fn test_wrong_type_rejected() {
    let err = check(3_i64.into_input(), i32::type_desc()).unwrap_err();
    assert!(err.is_type_mismatch());
    assert!(err.to_string().contains("argument 0"), "{err}");
    assert!(err.to_string().contains("mismatched types"), "{err}");
}

#[rstest]
#[case(Option::<u8>::type_desc())]
#[case(Vec::<u8>::type_desc())]
#[case(DynError::type_desc())]
#[case(Value::type_desc())]
fn test_nil_accepted_for_nilable(#[case] declared: TypeDesc) {
    let value = check(NIL, declared).unwrap();
    assert!(value.is_nil());
    assert_eq!(value.declared(), declared);
}

#[test]
fn test_nil_rejected_for_plain_value() {
    let err = check(NIL, i32::type_desc()).unwrap_err();
    assert!(err.is_type_mismatch());
    assert!(err.to_string().contains("cannot use nil"), "{err}");
}

#[test]
fn test_wildcard_rejected() {
    let err = check(ANY, i32::type_desc()).unwrap_err();
    assert!(err.to_string().contains("wildcard"), "{err}");
}

#[test]
fn test_open_interface_takes_any_concrete_value() {
    let value = check(7_u8.into_input(), Value::type_desc()).unwrap();
    assert_eq!(value.declared(), Value::type_desc());
    assert_eq!(value.concrete(), u8::type_desc());
}

#[test]
fn test_closed_interface_rejects_other_types() {
    let err = check("boom".to_string().into_input(), DynError::type_desc()).unwrap_err();
    assert!(err.to_string().contains("does not implement"), "{err}");
}

#[test]
fn test_input_into_input_is_identity() {
    assert!(matches!(ANY.into_input(), Input::Any));
}
