// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Call log implementation.

use crate::call::CapturedCall;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

struct Entry<T> {
    condition: usize,
    args: T,
}

struct State<T> {
    count: u64,
    entries: Vec<Entry<T>>,
    offsets: HashMap<usize, u64>,
}

/// Shared, append-only log of intercepted calls.
///
/// Clones share the same underlying log.
pub struct CallLog<T> {
    state: Arc<Mutex<State<T>>>,
}

impl<T> CallLog<T> {
    /// Create an empty log
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                count: 0,
                entries: Vec::new(),
                offsets: HashMap::new(),
            })),
        }
    }

    /// Record a call that resolved to `condition`.
    ///
    /// Returns how many earlier calls resolved to the same condition. The
    /// counter, the log and the offset advance together under one lock.
    pub fn record(&self, condition: usize, args: T) -> u64 {
        let mut state = self.state.lock();
        state.count += 1;
        state.entries.push(Entry { condition, args });
        let offset = state.offsets.entry(condition).or_insert(0);
        let prior = *offset;
        *offset += 1;
        prior
    }

    /// Total number of recorded calls
    pub fn count(&self) -> u64 {
        self.state.lock().count
    }

    /// Number of calls that resolved to `condition`
    pub fn hits(&self, condition: usize) -> u64 {
        self.state
            .lock()
            .offsets
            .get(&condition)
            .copied()
            .unwrap_or(0)
    }

    /// Number of entries in the log
    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.state.lock().entries.is_empty()
    }
}

impl<T: Clone> CallLog<T> {
    /// Arguments of the call at `index`, if recorded
    pub fn get(&self, index: usize) -> Option<T> {
        self.state.lock().entries.get(index).map(|e| e.args.clone())
    }

    /// Lazy iterator over recorded arguments, starting from the first call.
    ///
    /// Calls recorded while iterating are picked up.
    pub fn entries(&self) -> Entries<T> {
        Entries {
            log: self.clone(),
            next: 0,
        }
    }

    /// Snapshot the log, rendering each argument list with `render`
    pub fn captured<U, F>(&self, render: F) -> Vec<CapturedCall<U>>
    where
        F: Fn(&T) -> U,
    {
        self.state
            .lock()
            .entries
            .iter()
            .enumerate()
            .map(|(seq, e)| CapturedCall {
                seq: seq as u64,
                condition: e.condition,
                args: render(&e.args),
            })
            .collect()
    }
}

impl<T> Default for CallLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for CallLog<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T> std::fmt::Debug for CallLog<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallLog")
            .field("count", &self.count())
            .finish_non_exhaustive()
    }
}

/// Iterator returned by [`CallLog::entries`]
pub struct Entries<T> {
    log: CallLog<T>,
    next: usize,
}

impl<T: Clone> Iterator for Entries<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let args = self.log.get(self.next)?;
        self.next += 1;
        Some(args)
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
