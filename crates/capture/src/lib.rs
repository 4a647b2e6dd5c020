// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Call capture for mock interceptors.
//!
//! A [`CallLog`] keeps the total call count, the ordered argument log and the
//! per-condition consumption offsets behind a single lock, so every reader
//! sees a count that agrees with the entries it can replay.

mod call;
mod log;

pub use call::CapturedCall;
pub use log::{CallLog, Entries};
