// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behaviors evaluated when a condition is selected.

use crate::error::MockError;
use crate::value::Value;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Replacement function operating on wrapped values.
pub type DynFn = Arc<dyn Fn(&[Value]) -> Result<Vec<Value>, Fault> + Send + Sync>;

/// A deliberately injected abnormal exit.
///
/// Typed mock functions raise it with [`std::panic::panic_any`], so a
/// `catch_unwind` at the call site receives this `Fault` as the panic payload.
#[derive(Clone)]
pub struct Fault {
    payload: Arc<dyn Any + Send + Sync>,
}

impl Fault {
    pub fn new<P: Any + Send + Sync>(payload: P) -> Self {
        Self {
            payload: Arc::new(payload),
        }
    }

    pub fn payload(&self) -> &(dyn Any + Send + Sync) {
        &*self.payload
    }

    pub fn downcast_ref<P: Any>(&self) -> Option<&P> {
        self.payload.downcast_ref::<P>()
    }

    /// The payload as text, when it is a string
    pub fn message(&self) -> Option<&str> {
        if let Some(s) = self.payload.downcast_ref::<&'static str>() {
            return Some(*s);
        }
        self.payload.downcast_ref::<String>().map(String::as_str)
    }

    /// Unwind the current call with this fault
    pub fn raise(self) -> ! {
        std::panic::panic_any(self)
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => f.debug_tuple("Fault").field(&message).finish(),
            None => write!(f, "Fault(..)"),
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(message) = self.message() {
            return write!(f, "fault: {message}");
        }
        match self.downcast_ref::<MockError>() {
            Some(err) => write!(f, "fault: {err}"),
            None => write!(f, "fault"),
        }
    }
}

impl std::error::Error for Fault {}

/// Action taken for a matched call.
#[derive(Clone)]
pub enum Behavior {
    /// Return a fixed result list
    Values(Vec<Value>),
    /// Call a replacement with the original arguments
    Delegate(DynFn),
    /// Abort the call with a fault
    Fault(Fault),
}

impl Behavior {
    pub fn evaluate(&self, args: &[Value]) -> Result<Vec<Value>, Fault> {
        match self {
            Behavior::Values(values) => Ok(values.clone()),
            Behavior::Delegate(f) => f(args),
            Behavior::Fault(fault) => Err(fault.clone()),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Behavior::Values(_) => "values",
            Behavior::Delegate(_) => "delegate",
            Behavior::Fault(_) => "fault",
        }
    }
}

impl fmt::Debug for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Behavior::Values(values) => f.debug_tuple("Values").field(values).finish(),
            Behavior::Delegate(_) => write!(f, "Delegate(..)"),
            Behavior::Fault(fault) => f.debug_tuple("Fault").field(fault).finish(),
        }
    }
}

#[cfg(test)]
#[path = "behavior_tests.rs"]
mod tests;
