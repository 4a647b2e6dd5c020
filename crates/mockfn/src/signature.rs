// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Function signature descriptors.

use crate::arg::Arg;
use crate::error::MockError;
use crate::types::{Kind, TypeDesc};
use crate::value::Value;
use std::fmt;

/// Ordered parameter and result types of a mocked function.
#[derive(Clone, Debug, PartialEq)]
pub struct Signature {
    name: String,
    params: Vec<TypeDesc>,
    results: Vec<TypeDesc>,
    receiver: bool,
}

impl Signature {
    pub fn builder() -> SignatureBuilder {
        SignatureBuilder::default()
    }

    /// Name of the function or method this signature stands in for;
    /// empty when anonymous
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[TypeDesc] {
        &self.params
    }

    pub fn results(&self) -> &[TypeDesc] {
        &self.results
    }

    /// Whether the last parameter is a variadic tail
    pub fn is_variadic(&self) -> bool {
        self.params.last().is_some_and(TypeDesc::is_variadic)
    }

    /// Whether the first parameter is a method receiver
    pub fn has_receiver(&self) -> bool {
        self.receiver && !self.params.is_empty()
    }

    pub fn receiver(&self) -> Option<TypeDesc> {
        if self.has_receiver() {
            self.params.first().copied()
        } else {
            None
        }
    }

    /// Same parameter and result types, ignoring name
    pub fn same_shape(&self, other: &Signature) -> bool {
        self.params == other.params && self.results == other.results
    }

    /// Check call arguments against the parameter types
    pub fn check_args(&self, args: &[Value]) -> Result<(), MockError> {
        self.check_slots(&self.params, args, "argument")
    }

    /// Check produced results against the result types
    pub fn check_results(&self, results: &[Value]) -> Result<(), MockError> {
        self.check_slots(&self.results, results, "result")
    }

    fn check_slots(
        &self,
        slots: &[TypeDesc],
        values: &[Value],
        what: &str,
    ) -> Result<(), MockError> {
        if values.len() != slots.len() {
            return Err(MockError::ArityMismatch {
                signature: self.to_string(),
                expected: slots.len(),
                actual: values.len(),
            });
        }
        for (i, (declared, value)) in slots.iter().zip(values).enumerate() {
            let concrete = value.concrete();
            let fits = if declared.kind() == Kind::Interface {
                declared.accepts(&concrete)
            } else {
                *declared == concrete
            };
            if !fits {
                return Err(MockError::TypeMismatch {
                    signature: self.to_string(),
                    detail: format!("{what} {i}: mismatched types {declared} and {concrete}"),
                });
            }
        }
        Ok(())
    }

    pub(crate) fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "fn(")?;
        } else {
            write!(f, "{}(", self.name)?;
        }
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ")")?;
        match self.results.as_slice() {
            [] => Ok(()),
            [single] => write!(f, " -> {single}"),
            many => {
                write!(f, " -> (")?;
                for (i, result) in many.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{result}")?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Builder for [`Signature`]s of any result arity.
///
/// Result types need a zero value, produced when no behavior applies.
#[derive(Debug, Default)]
pub struct SignatureBuilder {
    name: String,
    params: Vec<TypeDesc>,
    results: Vec<TypeDesc>,
    receiver: bool,
}

impl SignatureBuilder {
    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Declare the receiver, always placed as the first parameter
    pub fn receiver<T: Arg + Default>(mut self) -> Self {
        self.params.insert(0, T::type_desc().with_default::<T>());
        self.receiver = true;
        self
    }

    pub fn param<T: Arg>(self) -> Self {
        self.param_desc(T::type_desc())
    }

    pub fn param_desc(mut self, desc: TypeDesc) -> Self {
        self.params.push(desc);
        self
    }

    pub fn result<T: Arg + Default>(mut self) -> Self {
        self.results.push(T::type_desc().with_default::<T>());
        self
    }

    pub(crate) fn receiver_slot(mut self, receiver: bool) -> Self {
        self.receiver = receiver;
        self
    }

    pub fn build(self) -> Signature {
        Signature {
            name: self.name,
            params: self.params,
            results: self.results,
            receiver: self.receiver,
        }
    }
}

#[cfg(test)]
#[path = "signature_tests.rs"]
mod tests;
