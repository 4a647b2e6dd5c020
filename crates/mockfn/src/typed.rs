// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed front end over [`DynMock`].

use crate::behavior::Behavior;
use crate::condition::Condition;
use crate::error::MockError;
use crate::func::{delegate_fn, Delegate, Func, Method};
use crate::input::Input;
use crate::mock::DynMock;
use crate::recorder::{DynRecorder, Replay};
use crate::value::Value;
use mockfn_capture::CapturedCall;
use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Mock of a function with the shape `F`, such as `fn(String) -> u64`.
///
/// ```
/// use mockfn::{args, Mock, ANY};
///
/// let mock = Mock::<fn(String) -> u64>::named("size");
/// mock.when(args!["big".to_string()]).unwrap().returns(1 << 20).unwrap();
/// mock.when(args![ANY]).unwrap().returns(7).unwrap();
///
/// let (size, recorder) = mock.make();
/// assert_eq!(size("big".to_string()), 1 << 20);
/// assert_eq!(size("small".to_string()), 7);
/// assert_eq!(recorder.count(), 2);
/// ```
pub struct Mock<F: Func> {
    inner: DynMock,
    marker: PhantomData<fn() -> F>,
}

impl<F: Func> Mock<F> {
    /// Anonymous mock
    pub fn new() -> Self {
        Self::from_dyn(DynMock::new(F::signature("", false)))
    }

    /// Mock standing in for the function `name`
    pub fn named(name: &str) -> Self {
        Self::from_dyn(DynMock::new(F::signature(name, false)))
    }

    fn from_dyn(inner: DynMock) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Condition for calls whose arguments match `inputs`
    pub fn when(&self, inputs: Vec<Input>) -> Result<When<F>, MockError> {
        let condition = self.inner.when(inputs)?;
        Ok(When {
            condition,
            marker: PhantomData,
        })
    }

    /// Return `output` from unmatched calls once their queue is exhausted
    pub fn returns(&self, output: F::Output) -> Result<&Self, MockError> {
        set_values::<F>(self.inner.fallback(), output)?;
        Ok(self)
    }

    pub fn returns_once(&self, output: F::Output) -> &Self {
        queue_values::<F>(self.inner.fallback(), output);
        self
    }

    pub fn delegate<D>(&self, delegate: D) -> Result<&Self, MockError>
    where
        D: Delegate<F> + Send + Sync + 'static,
    {
        self.inner.delegate(delegate_fn::<F, D>(delegate))?;
        Ok(self)
    }

    pub fn delegate_once<D>(&self, delegate: D) -> &Self
    where
        D: Delegate<F> + Send + Sync + 'static,
    {
        self.inner.delegate_once(delegate_fn::<F, D>(delegate));
        self
    }

    pub fn fault<P: Any + Send + Sync>(&self, payload: P) -> Result<&Self, MockError> {
        self.inner.fault(payload)?;
        Ok(self)
    }

    pub fn fault_once<P: Any + Send + Sync>(&self, payload: P) -> &Self {
        self.inner.fault_once(payload);
        self
    }

    /// Produce the mock function and its recorder
    pub fn make(&self) -> (Arc<F::Handle>, Recorder<F>) {
        let (interceptor, recorder) = self.inner.make();
        (
            F::synthesize(interceptor),
            Recorder {
                inner: recorder,
                marker: PhantomData,
            },
        )
    }

    /// The untyped mock, shared with this one
    pub fn as_dyn(&self) -> &DynMock {
        &self.inner
    }
}

impl<F: Method> Mock<F> {
    /// Mock of the method `name`; the first parameter of `F` is its receiver
    pub fn method(name: &str) -> Self {
        Self::from_dyn(DynMock::new(F::signature(name, true)))
    }
}

impl<F: Func> Default for Mock<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Func> Clone for Mock<F> {
    fn clone(&self) -> Self {
        Self::from_dyn(self.inner.clone())
    }
}

impl<F: Func> fmt::Debug for Mock<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Mock").field(&self.inner).finish()
    }
}

/// Typed handle to a [`Condition`].
pub struct When<F: Func> {
    condition: Arc<Condition>,
    marker: PhantomData<fn() -> F>,
}

impl<F: Func> When<F> {
    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    pub fn returns(&self, output: F::Output) -> Result<&Self, MockError> {
        set_values::<F>(&self.condition, output)?;
        Ok(self)
    }

    pub fn returns_once(&self, output: F::Output) -> &Self {
        queue_values::<F>(&self.condition, output);
        self
    }

    pub fn delegate<D>(&self, delegate: D) -> Result<&Self, MockError>
    where
        D: Delegate<F> + Send + Sync + 'static,
    {
        self.condition.delegate(delegate_fn::<F, D>(delegate))?;
        Ok(self)
    }

    pub fn delegate_once<D>(&self, delegate: D) -> &Self
    where
        D: Delegate<F> + Send + Sync + 'static,
    {
        self.condition.delegate_once(delegate_fn::<F, D>(delegate));
        self
    }

    pub fn fault<P: Any + Send + Sync>(&self, payload: P) -> Result<&Self, MockError> {
        self.condition.fault(payload)?;
        Ok(self)
    }

    pub fn fault_once<P: Any + Send + Sync>(&self, payload: P) -> &Self {
        self.condition.fault_once(payload);
        self
    }
}

impl<F: Func> fmt::Debug for When<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("When").field(&self.condition).finish()
    }
}

fn set_values<F: Func>(condition: &Condition, output: F::Output) -> Result<(), MockError> {
    condition
        .set_default(Behavior::Values(F::output_values(output)))
        .map(|_| ())
}

fn queue_values<F: Func>(condition: &Condition, output: F::Output) {
    condition.push_once(Behavior::Values(F::output_values(output)));
}

/// Typed call history of a mock function.
pub struct Recorder<F: Func> {
    inner: DynRecorder,
    marker: PhantomData<fn() -> F>,
}

impl<F: Func> Recorder<F> {
    pub fn count(&self) -> u64 {
        self.inner.count()
    }

    /// Number of calls that resolved to `when`
    pub fn hits(&self, when: &When<F>) -> u64 {
        self.inner.hits(&when.condition)
    }

    /// Recorded calls in invocation order
    pub fn replay(&self) -> ReplayIter<F> {
        ReplayIter {
            inner: self.inner.replay(),
            marker: PhantomData,
        }
    }

    pub fn calls(&self) -> Vec<CapturedCall<Vec<String>>> {
        self.inner.calls()
    }

    pub fn as_dyn(&self) -> &DynRecorder {
        &self.inner
    }
}

impl<F: Func> Clone for Recorder<F> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            marker: PhantomData,
        }
    }
}

impl<F: Func> fmt::Debug for Recorder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Recorder").field(&self.inner).finish()
    }
}

/// Iterator returned by [`Recorder::replay`]
pub struct ReplayIter<F: Func> {
    inner: Replay,
    marker: PhantomData<fn() -> F>,
}

impl<F: Func> Iterator for ReplayIter<F> {
    type Item = ReplayCall<F>;

    fn next(&mut self) -> Option<ReplayCall<F>> {
        self.inner.next().map(|call| ReplayCall {
            args: call.into_args(),
            marker: PhantomData,
        })
    }
}

/// One recorded call of shape `F`.
pub struct ReplayCall<F: Func> {
    args: Vec<Value>,
    marker: PhantomData<fn() -> F>,
}

impl<F: Func> ReplayCall<F> {
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Call `f` with the recorded arguments and return its output.
    ///
    /// Fails with [`MockError::TypeMismatch`] when a recorded argument is not
    /// of the parameter type of `F`.
    pub fn call<D: Delegate<F>>(&self, f: D) -> Result<F::Output, MockError> {
        f.call_values(&self.args)
    }
}

impl<F: Func> fmt::Debug for ReplayCall<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReplayCall").field(&self.args).finish()
    }
}

#[cfg(test)]
#[path = "typed_tests.rs"]
mod tests;
