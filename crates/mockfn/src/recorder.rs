// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Call history of one interceptor.

use crate::behavior::{DynFn, Fault};
use crate::condition::Condition;
use crate::signature::Signature;
use crate::value::Value;
use mockfn_capture::{CallLog, CapturedCall, Entries};
use std::sync::Arc;

/// Read side of an interceptor's call log.
///
/// The count always agrees with the calls visible through [`replay`](Self::replay).
#[derive(Clone)]
pub struct DynRecorder {
    log: CallLog<Vec<Value>>,
    signature: Arc<Signature>,
}

impl DynRecorder {
    pub(crate) fn new(log: CallLog<Vec<Value>>, signature: Arc<Signature>) -> Self {
        Self { log, signature }
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Number of calls made so far
    pub fn count(&self) -> u64 {
        self.log.count()
    }

    /// Number of calls that resolved to `condition`
    pub fn hits(&self, condition: &Condition) -> u64 {
        self.log.hits(condition.id())
    }

    /// Recorded calls in invocation order
    pub fn replay(&self) -> Replay {
        Replay {
            entries: self.log.entries(),
        }
    }

    /// Snapshot of every call with debug-rendered arguments
    pub fn calls(&self) -> Vec<CapturedCall<Vec<String>>> {
        self.log
            .captured(|args| args.iter().map(|v| format!("{v:?}")).collect())
    }
}

impl std::fmt::Debug for DynRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynRecorder")
            .field("signature", &self.signature.to_string())
            .field("count", &self.count())
            .finish()
    }
}

/// Iterator over recorded calls; see [`DynRecorder::replay`]
pub struct Replay {
    entries: Entries<Vec<Value>>,
}

impl Iterator for Replay {
    type Item = Replayed;

    fn next(&mut self) -> Option<Replayed> {
        self.entries.next().map(|args| Replayed { args })
    }
}

/// One recorded call.
#[derive(Clone, Debug)]
pub struct Replayed {
    args: Vec<Value>,
}

impl Replayed {
    /// Arguments exactly as passed, before variadic flattening
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    pub fn into_args(self) -> Vec<Value> {
        self.args
    }

    /// Call `f` with the recorded arguments
    pub fn call(&self, f: &DynFn) -> Result<Vec<Value>, Fault> {
        f(&self.args)
    }
}

#[cfg(test)]
#[path = "recorder_tests.rs"]
mod tests;
