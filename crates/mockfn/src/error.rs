// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised while configuring mocks and composing interfaces.

use crate::behavior::Fault;
use thiserror::Error;

/// Errors that can occur when configuring or composing mocks
#[derive(Debug, Error)]
pub enum MockError {
    #[error("{signature}: expected {expected} values, got {actual}")]
    ArityMismatch {
        signature: String,
        expected: usize,
        actual: usize,
    },

    #[error("{signature}: {detail}")]
    TypeMismatch { signature: String, detail: String },

    #[error("{signature}: behavior already set for condition {condition}")]
    BehaviorAlreadySet { signature: String, condition: usize },

    #[error("cannot implement an interface with an unnamed mock: {signature}")]
    UnnamedMethod { signature: String },

    #[error("mock `{name}` must be created with a receiver: {signature}")]
    MissingReceiver { name: String, signature: String },

    #[error("method `{name}` is implemented more than once")]
    DuplicateMethod { name: String },

    #[error("method `{name}` has receiver {found}, expected {expected}")]
    ReceiverMismatch {
        name: String,
        expected: String,
        found: String,
    },

    #[error("receiver {receiver} of method `{name}` has no zero value")]
    ZeroReceiver { name: String, receiver: String },

    #[error("method `{name}` is registered as {registered}, called as {called}")]
    SignatureMismatch {
        name: String,
        registered: String,
        called: String,
    },

    #[error("no such method: {name}")]
    NoSuchMethod { name: String },

    #[error(transparent)]
    Fault(#[from] Fault),
}

impl MockError {
    /// Malformed setup: everything except type mismatches and injected faults.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Self::TypeMismatch { .. } | Self::Fault(_))
    }

    /// A configured value is not assignable to its declared type
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// A deliberately injected fault surfaced through the dynamic call path
    pub fn fault(&self) -> Option<&Fault> {
        match self {
            Self::Fault(fault) => Some(fault),
            _ => None,
        }
    }
}
