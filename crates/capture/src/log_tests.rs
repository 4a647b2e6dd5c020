// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use proptest::prelude::*;
use rstest::rstest;
use std::thread;

#[test]
fn test_record_and_retrieve() {
    let log = CallLog::new();

    log.record(0, vec!["hello".to_string()]);

    assert_eq!(log.count(), 1);
    assert_eq!(log.len(), 1);
    assert_eq!(log.get(0), Some(vec!["hello".to_string()]));
    assert_eq!(log.get(1), None);
}

#[test]
fn test_offsets_are_per_condition() {
    let log = CallLog::new();

    assert_eq!(log.record(1, "a"), 0);
    assert_eq!(log.record(2, "b"), 0);
    assert_eq!(log.record(1, "c"), 1);
    assert_eq!(log.record(1, "d"), 2);
    assert_eq!(log.record(2, "e"), 1);

    assert_eq!(log.hits(1), 3);
    assert_eq!(log.hits(2), 2);
    assert_eq!(log.hits(3), 0);
    assert_eq!(log.count(), 5);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(7)]
fn test_entries_restart_from_first(#[case] total: usize) {
    let log = CallLog::new();
    for i in 0..total {
        log.record(0, i);
    }

    let first: Vec<usize> = log.entries().collect();
    let second: Vec<usize> = log.entries().collect();

    assert_eq!(first, (0..total).collect::<Vec<_>>());
    assert_eq!(first, second);
}

#[test]
fn test_entries_stop_early() {
    let log = CallLog::new();
    log.record(0, 100);
    log.record(0, 200);

    let mut entries = log.entries();
    assert_eq!(entries.next(), Some(100));
    drop(entries);

    assert_eq!(log.entries().next(), Some(100));
    assert_eq!(log.count(), 2);
}

#[test]
fn test_entries_are_lazy() {
    let log = CallLog::new();
    log.record(0, 1);

    let mut entries = log.entries();
    assert_eq!(entries.next(), Some(1));
    assert_eq!(entries.next(), None);

    log.record(0, 2);
    assert_eq!(entries.next(), Some(2));
}

#[test]
fn test_captured_snapshot() {
    let log = CallLog::new();
    log.record(3, 10);
    log.record(0, 20);

    let calls = log.captured(|n| n.to_string());

    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].seq, 0);
    assert_eq!(calls[0].condition, 3);
    assert_eq!(calls[0].args, "10");
    assert_eq!(calls[1].seq, 1);
    assert_eq!(calls[1].condition, 0);
}

#[test]
fn test_clone_shares_state() {
    let log1 = CallLog::new();
    let log2 = log1.clone();

    log1.record(0, "from log1");
    assert_eq!(log2.count(), 1);

    log2.record(0, "from log2");
    assert_eq!(log1.count(), 2);
    assert_eq!(log1.hits(0), 2);
}

#[test]
fn test_default() {
    let log: CallLog<u8> = CallLog::default();
    assert!(log.is_empty());
    assert_eq!(log.count(), 0);
}

#[test]
fn test_thread_safety() {
    let log = CallLog::new();
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let log = log.clone();
            thread::spawn(move || {
                let mut offsets = Vec::new();
                for i in 0..100 {
                    offsets.push(log.record(0, (t, i)));
                }
                offsets
            })
        })
        .collect();

    let mut offsets: Vec<u64> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    offsets.sort_unstable();

    assert_eq!(log.count(), 400);
    assert_eq!(log.len(), 400);
    assert_eq!(offsets, (0..400).collect::<Vec<u64>>());
}

proptest! {
    #[test]
    fn count_equals_len(keys in proptest::collection::vec(0usize..4, 0..100)) {
        let log = CallLog::new();
        for (i, key) in keys.iter().enumerate() {
            log.record(*key, i);
        }
        prop_assert_eq!(log.count(), keys.len() as u64);
        prop_assert_eq!(log.len(), keys.len());
        let hits: u64 = (0..4).map(|k| log.hits(k)).sum();
        prop_assert_eq!(hits, keys.len() as u64);
    }
}
