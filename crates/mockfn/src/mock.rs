// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Untyped mock configuration.

use crate::behavior::DynFn;
use crate::condition::Condition;
use crate::error::MockError;
use crate::input::Input;
use crate::interceptor::Interceptor;
use crate::pattern::Pattern;
use crate::recorder::DynRecorder;
use crate::signature::Signature;
use crate::value::Value;
use mockfn_capture::CallLog;
use parking_lot::RwLock;
use std::any::Any;
use std::sync::Arc;
use tracing::debug;

struct MockState {
    signature: Arc<Signature>,
    conditions: RwLock<Vec<Arc<Condition>>>,
    fallback: Arc<Condition>,
}

/// Configures conditions and behaviors for one signature.
///
/// Conditions are tried in registration order; a call matching none of them
/// resolves to the implicit catch-all condition, configured through the
/// behavior methods on the mock itself. Clones share configuration.
#[derive(Clone)]
pub struct DynMock {
    inner: Arc<MockState>,
}

impl DynMock {
    pub fn new(signature: Signature) -> Self {
        let signature = Arc::new(signature);
        let fallback = Arc::new(Condition::new(
            0,
            Pattern::catch_all(),
            Arc::clone(&signature),
        ));
        Self {
            inner: Arc::new(MockState {
                signature,
                conditions: RwLock::new(Vec::new()),
                fallback,
            }),
        }
    }

    pub fn signature(&self) -> &Signature {
        &self.inner.signature
    }

    pub fn name(&self) -> &str {
        self.inner.signature.name()
    }

    /// Condition for calls whose arguments match `inputs`.
    ///
    /// Asking twice with equal inputs returns the same condition.
    pub fn when(&self, inputs: Vec<Input>) -> Result<Arc<Condition>, MockError> {
        let pattern = Pattern::compile(inputs, &self.inner.signature)?;
        let mut conditions = self.inner.conditions.write();
        if let Some(existing) = conditions.iter().find(|c| *c.pattern() == pattern) {
            return Ok(Arc::clone(existing));
        }
        let condition = Arc::new(Condition::new(
            conditions.len() + 1,
            pattern,
            Arc::clone(&self.inner.signature),
        ));
        debug!(
            signature = %self.inner.signature,
            condition = condition.id(),
            pattern = ?condition.pattern(),
            "registered condition"
        );
        conditions.push(Arc::clone(&condition));
        Ok(condition)
    }

    /// The catch-all condition
    pub fn fallback(&self) -> &Condition {
        &self.inner.fallback
    }

    pub fn conditions(&self) -> Vec<Arc<Condition>> {
        self.inner.conditions.read().clone()
    }

    pub fn returns(&self, results: Vec<Input>) -> Result<&Self, MockError> {
        self.inner.fallback.returns(results)?;
        Ok(self)
    }

    pub fn returns_once(&self, results: Vec<Input>) -> Result<&Self, MockError> {
        self.inner.fallback.returns_once(results)?;
        Ok(self)
    }

    pub fn delegate(&self, f: DynFn) -> Result<&Self, MockError> {
        self.inner.fallback.delegate(f)?;
        Ok(self)
    }

    pub fn delegate_once(&self, f: DynFn) -> &Self {
        self.inner.fallback.delegate_once(f);
        self
    }

    pub fn fault<P: Any + Send + Sync>(&self, payload: P) -> Result<&Self, MockError> {
        self.inner.fallback.fault(payload)?;
        Ok(self)
    }

    pub fn fault_once<P: Any + Send + Sync>(&self, payload: P) -> &Self {
        self.inner.fallback.fault_once(payload);
        self
    }

    /// Produce an interceptor bound to a fresh recorder.
    ///
    /// Every pair has its own call history and once-only consumption.
    pub fn make(&self) -> (Interceptor, DynRecorder) {
        let log = CallLog::new();
        let interceptor = Interceptor::new(self.clone(), log.clone());
        let recorder = DynRecorder::new(log, Arc::clone(&self.inner.signature));
        (interceptor, recorder)
    }

    pub(crate) fn select(&self, args: &[Value]) -> Arc<Condition> {
        self.inner
            .conditions
            .read()
            .iter()
            .find(|c| c.pattern().matches(args))
            .map_or_else(|| Arc::clone(&self.inner.fallback), Arc::clone)
    }

    /// Zero value of every declared result
    pub(crate) fn zero_results(&self) -> Vec<Value> {
        self.inner
            .signature
            .results()
            .iter()
            .map(|ty| ty.zero().unwrap_or_default())
            .collect()
    }
}

impl std::fmt::Debug for DynMock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynMock")
            .field("signature", &self.inner.signature.to_string())
            .field("conditions", &self.inner.conditions.read().len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "mock_tests.rs"]
mod tests;
