// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::arg::{Callback, Variadic};
use crate::args;
use crate::input::{ANY, NIL};
use proptest::prelude::*;
use rstest::rstest;
use std::collections::{BTreeMap, HashMap};

fn pair() -> Signature {
    Signature::builder()
        .name("pair")
        .param::<String>()
        .param::<i32>()
        .build()
}

fn sprintf() -> Signature {
    Signature::builder()
        .name("sprintf")
        .param::<String>()
        .param::<Variadic<i32>>()
        .result::<String>()
        .build()
}

fn vals(format: &str, tail: &[i32]) -> Vec<Value> {
    let mut out = vec![Value::of(format.to_string())];
    out.extend(tail.iter().map(|n| Value::of(*n)));
    out
}

// =========================================================================
// Compilation
// =========================================================================

#[test]
fn test_compile_exact() {
    let pattern = Pattern::compile(args!["a".to_string(), 1_i32], &pair()).unwrap();
    assert_eq!(pattern.matchers().len(), 2);
    assert!(!pattern.has_rest());
}

#[rstest]
#[case(args!["a".to_string()])]
#[case(args!["a".to_string(), 1_i32, 2_i32])]
fn test_compile_arity_mismatch(#[case] inputs: Vec<Input>) {
    let err = Pattern::compile(inputs, &pair()).unwrap_err();
    assert!(matches!(err, MockError::ArityMismatch { expected: 2, .. }));
    assert!(err.is_configuration());
}

#[test]
fn test_compile_type_mismatch_names_position() {
    let err = Pattern::compile(args!["a".to_string(), 1_u32], &pair()).unwrap_err();
    assert!(err.is_type_mismatch());
    assert!(err.to_string().contains("argument 1"), "{err}");
}

#[test]
fn test_compile_variadic_too_few() {
    let err = Pattern::compile(Vec::new(), &sprintf()).unwrap_err();
    assert!(matches!(err, MockError::ArityMismatch { expected: 1, actual: 0, .. }));
}

#[test]
fn test_compile_variadic_checks_element_type() {
    let err = Pattern::compile(args!["%d".to_string(), "x".to_string()], &sprintf()).unwrap_err();
    assert!(err.is_type_mismatch());
}

#[rstest]
#[case::sequence(args![vec![1_u8, 2]], Signature::builder().param::<Vec<u8>>().build())]
#[case::mapping(
    args![HashMap::from([("k".to_string(), 1_u8)])],
    Signature::builder().param::<HashMap<String, u8>>().build()
)]
#[case::ordered_mapping(
    args![BTreeMap::from([(1_u8, 1_u8)])],
    Signature::builder().param::<BTreeMap<u8, u8>>().build()
)]
#[case::inside_interface(args![vec![1_u8]], Signature::builder().param::<Value>().build())]
fn test_compile_rejects_non_nil_collections(
    #[case] inputs: Vec<Input>,
    #[case] sig: Signature,
) {
    let err = Pattern::compile(inputs, &sig).unwrap_err();
    assert!(err.is_type_mismatch());
    assert!(err.to_string().contains("compares by identity"), "{err}");
}

#[test]
fn test_compile_accepts_nil_and_wildcard_collections() {
    let sig = Signature::builder().param::<Vec<u8>>().build();
    assert!(Pattern::compile(args![NIL], &sig).is_ok());
    assert!(Pattern::compile(args![ANY], &sig).is_ok());
    assert!(Pattern::compile(args![Vec::<u8>::new()], &sig).is_ok());
}

#[test]
fn test_compile_accepts_shared_identity() {
    let double = Callback::new(|x: u8| x * 2);
    let sig = Signature::builder().param::<Callback<u8, u8>>().build();
    let pattern = Pattern::compile(args![double.clone()], &sig).unwrap();
    assert!(pattern.matches(&[Value::of(double)]));
}

#[test]
fn test_trailing_wildcard_becomes_rest() {
    let pattern = Pattern::compile(args!["%d".to_string(), ANY], &sprintf()).unwrap();
    assert!(pattern.has_rest());
    assert_eq!(pattern.matchers().len(), 1);
}

// =========================================================================
// Matching
// =========================================================================

#[test]
fn test_wildcard_matches_anything() {
    let pattern = Pattern::compile(args![ANY, 1_i32], &pair()).unwrap();
    assert!(pattern.matches(&[Value::of("x".to_string()), Value::of(1_i32)]));
    assert!(pattern.matches(&[Value::of("y".to_string()), Value::of(1_i32)]));
    assert!(!pattern.matches(&[Value::of("y".to_string()), Value::of(2_i32)]));
}

#[rstest]
#[case(&[], true)]
#[case(&[1], false)]
fn test_fixed_only_variadic_pattern(#[case] tail: &[i32], #[case] expected: bool) {
    let pattern = Pattern::compile(args!["%d".to_string()], &sprintf()).unwrap();
    assert_eq!(pattern.matches(&vals("%d", tail)), expected);
}

#[rstest]
#[case(&[], true)]
#[case(&[1], true)]
#[case(&[1, 2, 3], true)]
fn test_rest_pattern_accepts_any_tail(#[case] tail: &[i32], #[case] expected: bool) {
    let pattern = Pattern::compile(args!["%d".to_string(), ANY], &sprintf()).unwrap();
    assert_eq!(pattern.matches(&vals("%d", tail)), expected);
}

#[rstest]
#[case(&[1, 2], true)]
#[case(&[1, 3], false)]
#[case(&[1], false)]
#[case(&[1, 2, 3], false)]
fn test_explicit_tail_matches_one_per_input(#[case] tail: &[i32], #[case] expected: bool) {
    let pattern = Pattern::compile(args!["%d".to_string(), 1_i32, 2_i32], &sprintf()).unwrap();
    assert_eq!(pattern.matches(&vals("%d", tail)), expected);
}

#[test]
fn test_two_wildcards_match_exactly_two() {
    let pattern = Pattern::compile(args!["%d".to_string(), ANY, ANY], &sprintf()).unwrap();
    assert!(!pattern.has_rest());
    assert!(pattern.matches(&vals("%d", &[5, 6])));
    assert!(!pattern.matches(&vals("%d", &[5])));
}

#[test]
fn test_catch_all() {
    let pattern = Pattern::catch_all();
    assert!(pattern.matches(&[]));
    assert!(pattern.matches(&vals("x", &[1, 2])));
}

#[test]
fn test_equal_inputs_give_equal_patterns() {
    let a = Pattern::compile(args!["a".to_string(), ANY], &pair()).unwrap();
    let b = Pattern::compile(args!["a".to_string(), ANY], &pair()).unwrap();
    let c = Pattern::compile(args!["b".to_string(), ANY], &pair()).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

proptest! {
    #[test]
    fn prop_exact_pattern_matches_only_its_value(a in any::<i32>(), b in any::<i32>()) {
        let pattern = Pattern::compile(args!["k".to_string(), a], &pair()).unwrap();
        let args = [Value::of("k".to_string()), Value::of(b)];
        prop_assert_eq!(pattern.matches(&args), a == b);
    }
}
