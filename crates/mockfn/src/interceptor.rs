// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The fabricated function body.

use crate::behavior::Fault;
use crate::error::MockError;
use crate::mock::DynMock;
use crate::signature::Signature;
use crate::value::Value;
use mockfn_capture::CallLog;
use tracing::{debug, trace};

/// Handles every call to a fabricated function.
///
/// Each call is matched against the mock's conditions, recorded, and then
/// answered by the selected behavior. Safe to call from many threads.
#[derive(Clone)]
pub struct Interceptor {
    mock: DynMock,
    log: CallLog<Vec<Value>>,
}

impl Interceptor {
    pub(crate) fn new(mock: DynMock, log: CallLog<Vec<Value>>) -> Self {
        Self { mock, log }
    }

    pub fn signature(&self) -> &Signature {
        self.mock.signature()
    }

    pub fn name(&self) -> &str {
        self.mock.name()
    }

    /// Intercept one call with the wrapped arguments `args`.
    ///
    /// The call is logged before its behavior runs, so a fault never hides
    /// it from the recorder. Arguments or delegate results that do not fit
    /// the signature come back as a fault carrying the [`MockError`].
    pub fn invoke(&self, args: Vec<Value>) -> Result<Vec<Value>, Fault> {
        self.try_invoke(args).map_err(|err| match err {
            MockError::Fault(fault) => fault,
            err => Fault::new(err),
        })
    }

    /// Like [`invoke`](Self::invoke), with signature errors kept apart from
    /// faults.
    ///
    /// Arguments that do not fit the signature are rejected before the call
    /// is recorded.
    pub fn try_invoke(&self, args: Vec<Value>) -> Result<Vec<Value>, MockError> {
        self.signature().check_args(&args).inspect_err(|err| {
            debug!(signature = %self.signature(), %err, "rejected call");
        })?;
        let condition = {
            let flat = self.flatten(&args);
            self.mock.select(&flat)
        };
        let offset = self.log.record(condition.id(), args.clone());
        let behavior = condition.select(offset);
        trace!(
            signature = %self.signature(),
            condition = condition.id(),
            offset,
            behavior = behavior.as_ref().map_or("zero", |b| b.label()),
            "intercepted call"
        );
        let Some(behavior) = behavior else {
            return Ok(self.mock.zero_results());
        };
        let results = behavior.evaluate(&args).inspect_err(|fault| {
            debug!(
                signature = %self.signature(),
                condition = condition.id(),
                %fault,
                "raising fault"
            );
        })?;
        self.signature().check_results(&results).inspect_err(|err| {
            debug!(
                signature = %self.signature(),
                condition = condition.id(),
                %err,
                "delegate results do not fit"
            );
        })?;
        Ok(results)
    }

    /// Spread a trailing variadic argument into individual values
    fn flatten(&self, args: &[Value]) -> Vec<Value> {
        if !self.signature().is_variadic() {
            return args.to_vec();
        }
        match args.split_last() {
            Some((tail, fixed)) => {
                let mut flat = fixed.to_vec();
                match tail.elements() {
                    Some(items) => flat.extend(items),
                    None => flat.push(tail.clone()),
                }
                flat
            }
            None => Vec::new(),
        }
    }
}

impl std::fmt::Debug for Interceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interceptor")
            .field("signature", &self.signature().to_string())
            .field("calls", &self.log.count())
            .finish()
    }
}

#[cfg(test)]
#[path = "interceptor_tests.rs"]
mod tests;
