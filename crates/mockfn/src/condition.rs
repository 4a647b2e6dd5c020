// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Conditions: a pattern with its behavior queue.

use crate::behavior::{Behavior, DynFn, Fault};
use crate::error::MockError;
use crate::input::{check_input, Input};
use crate::pattern::Pattern;
use crate::signature::Signature;
use crate::value::Value;
use parking_lot::RwLock;
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

#[derive(Default)]
struct Behaviors {
    once: Vec<Behavior>,
    default: Option<Behavior>,
}

/// A pattern bound to once-only behaviors and an optional repeating default.
///
/// Once-only behaviors are consumed in order. After the queue runs out the
/// default applies; without a default the last queued behavior repeats.
pub struct Condition {
    id: usize,
    pattern: Pattern,
    signature: Arc<Signature>,
    behaviors: RwLock<Behaviors>,
}

impl Condition {
    pub(crate) fn new(id: usize, pattern: Pattern, signature: Arc<Signature>) -> Self {
        Self {
            id,
            pattern,
            signature,
            behaviors: RwLock::new(Behaviors::default()),
        }
    }

    /// Identifier, unique within its mock; the catch-all condition is `0`
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Return `results` on every call once the queue is exhausted
    pub fn returns(&self, results: Vec<Input>) -> Result<&Self, MockError> {
        let values = self.check_results(results)?;
        self.set_default(Behavior::Values(values))
    }

    /// Queue `results` for one call
    pub fn returns_once(&self, results: Vec<Input>) -> Result<&Self, MockError> {
        let values = self.check_results(results)?;
        Ok(self.push_once(Behavior::Values(values)))
    }

    /// Call `f` with the original arguments on every call once the queue is
    /// exhausted
    pub fn delegate(&self, f: DynFn) -> Result<&Self, MockError> {
        self.set_default(Behavior::Delegate(f))
    }

    /// Queue a call to `f` for one call
    pub fn delegate_once(&self, f: DynFn) -> &Self {
        self.push_once(Behavior::Delegate(f))
    }

    /// Fault with `payload` on every call once the queue is exhausted
    pub fn fault<P: Any + Send + Sync>(&self, payload: P) -> Result<&Self, MockError> {
        self.set_default(Behavior::Fault(Fault::new(payload)))
    }

    /// Queue a fault with `payload` for one call
    pub fn fault_once<P: Any + Send + Sync>(&self, payload: P) -> &Self {
        self.push_once(Behavior::Fault(Fault::new(payload)))
    }

    /// Number of queued once-only behaviors
    pub fn queued(&self) -> usize {
        self.behaviors.read().once.len()
    }

    pub fn has_default(&self) -> bool {
        self.behaviors.read().default.is_some()
    }

    pub(crate) fn push_once(&self, behavior: Behavior) -> &Self {
        debug!(
            signature = %self.signature,
            condition = self.id,
            behavior = behavior.label(),
            "queued once-only behavior"
        );
        self.behaviors.write().once.push(behavior);
        self
    }

    pub(crate) fn set_default(&self, behavior: Behavior) -> Result<&Self, MockError> {
        let mut behaviors = self.behaviors.write();
        if behaviors.default.is_some() {
            return Err(MockError::BehaviorAlreadySet {
                signature: self.signature.to_string(),
                condition: self.id,
            });
        }
        debug!(
            signature = %self.signature,
            condition = self.id,
            behavior = behavior.label(),
            "set default behavior"
        );
        behaviors.default = Some(behavior);
        Ok(self)
    }

    /// Behavior for the call that is the `offset`-th to reach this condition
    pub(crate) fn select(&self, offset: u64) -> Option<Behavior> {
        let behaviors = self.behaviors.read();
        let queued = usize::try_from(offset)
            .ok()
            .and_then(|i| behaviors.once.get(i));
        if let Some(behavior) = queued {
            return Some(behavior.clone());
        }
        if let Some(behavior) = &behaviors.default {
            return Some(behavior.clone());
        }
        behaviors.once.last().cloned()
    }

    fn check_results(&self, results: Vec<Input>) -> Result<Vec<Value>, MockError> {
        let declared = self.signature.results();
        if results.len() != declared.len() {
            return Err(MockError::ArityMismatch {
                signature: self.signature.to_string(),
                expected: declared.len(),
                actual: results.len(),
            });
        }
        results
            .into_iter()
            .zip(declared)
            .enumerate()
            .map(|(i, (input, ty))| {
                check_input(input, *ty, &self.signature, &format!("result {i}"))
            })
            .collect()
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition")
            .field("id", &self.id)
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "condition_tests.rs"]
mod tests;
