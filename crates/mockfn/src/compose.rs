// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Multi-method implementations assembled from method mocks.
//!
//! An [`Implementation`] routes calls by method name to the interceptor of
//! the mock registered under that name. Every call passes the zero value of
//! the shared receiver type as the receiver argument. An interface is
//! implemented by a small adapter type that forwards each trait method:
//!
//! ```
//! use mockfn::{arg_type, Implementation, Mock};
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct Store;
//! arg_type!(Store);
//!
//! trait Lookup {
//!     fn get(&self, key: String) -> u32;
//! }
//!
//! struct FakeLookup(Implementation);
//!
//! impl Lookup for FakeLookup {
//!     fn get(&self, key: String) -> u32 {
//!         self.0.call::<fn(Store, String) -> u32>("get", (key,)).unwrap()
//!     }
//! }
//!
//! let get = Mock::<fn(Store, String) -> u32>::method("get");
//! get.returns(5).unwrap();
//! let fake = FakeLookup(Implementation::new([get.as_dyn()]).unwrap());
//! assert_eq!(fake.get("a".to_string()), 5);
//! ```

use crate::error::MockError;
use crate::func::Method;
use crate::interceptor::Interceptor;
use crate::mock::DynMock;
use crate::recorder::DynRecorder;
use crate::types::TypeDesc;
use crate::value::Value;
use std::collections::HashMap;
use tracing::debug;

struct Bound {
    interceptor: Interceptor,
    recorder: DynRecorder,
}

struct Receiver {
    desc: TypeDesc,
    zero: Value,
}

/// Name-routed set of method interceptors sharing one receiver type.
pub struct Implementation {
    methods: HashMap<String, Bound>,
    receiver: Option<Receiver>,
}

impl Implementation {
    /// Bind a fresh interceptor for each mock.
    ///
    /// Every mock must be named, declared with a receiver, and share the
    /// receiver type of the others; names must be distinct.
    pub fn new<'a, I>(mocks: I) -> Result<Self, MockError>
    where
        I: IntoIterator<Item = &'a DynMock>,
    {
        let mut methods = HashMap::new();
        let mut receiver: Option<Receiver> = None;

        for mock in mocks {
            let signature = mock.signature();
            let name = signature.name();
            if name.is_empty() {
                return Err(MockError::UnnamedMethod {
                    signature: signature.to_string(),
                });
            }
            let Some(desc) = signature.receiver() else {
                return Err(MockError::MissingReceiver {
                    name: name.to_string(),
                    signature: signature.to_string(),
                });
            };
            if methods.contains_key(name) {
                return Err(MockError::DuplicateMethod {
                    name: name.to_string(),
                });
            }
            match &receiver {
                Some(expected) if expected.desc != desc => {
                    return Err(MockError::ReceiverMismatch {
                        name: name.to_string(),
                        expected: expected.desc.to_string(),
                        found: desc.to_string(),
                    });
                }
                Some(_) => {}
                None => {
                    let zero = desc.zero().ok_or_else(|| MockError::ZeroReceiver {
                        name: name.to_string(),
                        receiver: desc.to_string(),
                    })?;
                    receiver = Some(Receiver { desc, zero });
                }
            }

            let (interceptor, recorder) = mock.make();
            debug!(method = name, signature = %signature, "bound method");
            methods.insert(
                name.to_string(),
                Bound {
                    interceptor,
                    recorder,
                },
            );
        }

        Ok(Self { methods, receiver })
    }

    /// Call `name` with wrapped arguments, excluding the receiver.
    ///
    /// A configured fault comes back as [`MockError::Fault`]; arguments that
    /// do not fit the method's parameters are rejected without being
    /// recorded.
    pub fn invoke(&self, name: &str, args: Vec<Value>) -> Result<Vec<Value>, MockError> {
        let bound = self.lookup(name)?;
        bound.interceptor.try_invoke(self.with_receiver(args))
    }

    /// Typed call of `name`; `F` must be the shape the method was mocked
    /// with, and `rest` holds the arguments after the receiver.
    ///
    /// A configured fault unwinds from here, as it would from a typed mock
    /// function.
    pub fn call<F: Method>(&self, name: &str, rest: F::Rest) -> Result<F::Output, MockError> {
        let bound = self.lookup(name)?;
        let registered = bound.interceptor.signature();
        let called = F::signature(name, true);
        if !registered.same_shape(&called) {
            return Err(MockError::SignatureMismatch {
                name: name.to_string(),
                registered: registered.to_string(),
                called: called.to_string(),
            });
        }
        match bound.interceptor.invoke(self.with_receiver(F::rest_values(rest))) {
            Ok(values) => Ok(F::output_from(&values)),
            Err(fault) => fault.raise(),
        }
    }

    /// Recorder of the method `name`
    pub fn recorder(&self, name: &str) -> Result<&DynRecorder, MockError> {
        self.lookup(name).map(|bound| &bound.recorder)
    }

    /// Method names, sorted
    pub fn methods(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Receiver type shared by every method
    pub fn receiver(&self) -> Option<TypeDesc> {
        self.receiver.as_ref().map(|r| r.desc)
    }

    fn lookup(&self, name: &str) -> Result<&Bound, MockError> {
        self.methods.get(name).ok_or_else(|| MockError::NoSuchMethod {
            name: name.to_string(),
        })
    }

    fn with_receiver(&self, args: Vec<Value>) -> Vec<Value> {
        let mut full = Vec::with_capacity(args.len() + 1);
        full.extend(self.receiver.as_ref().map(|r| r.zero.clone()));
        full.extend(args);
        full
    }
}

impl std::fmt::Debug for Implementation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Implementation")
            .field("methods", &self.methods())
            .field("receiver", &self.receiver())
            .finish()
    }
}

#[cfg(test)]
#[path = "compose_tests.rs"]
mod tests;
