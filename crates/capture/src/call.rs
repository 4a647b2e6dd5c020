// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Captured call record.

use serde::{Deserialize, Serialize};

/// One recorded invocation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CapturedCall<T> {
    /// Sequence number, starting at zero
    pub seq: u64,

    /// Key of the condition the call resolved to
    pub condition: usize,

    /// Arguments as received
    pub args: T,
}

#[cfg(test)]
#[path = "call_tests.rs"]
mod tests;
