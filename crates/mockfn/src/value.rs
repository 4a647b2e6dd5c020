// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Type-aware value wrapper.
//!
//! A [`Value`] pairs a runtime value with the type it was declared as. Two
//! values are equal when their declared types are identical and their
//! contents are equal. Sequences, mappings, channels and callables compare by
//! identity instead of content; nil always equals nil of the same type.

use crate::arg::Arg;
use crate::types::TypeDesc;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

pub(crate) trait Payload: Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn concrete(&self) -> TypeDesc;
    fn same(&self, other: &dyn Payload) -> bool;
    fn is_nil(&self) -> bool;
    fn identity(&self) -> Option<usize>;
    fn elements(&self) -> Option<Vec<Value>>;
    fn fmt_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

struct Comparable<T>(T);

struct Opaque<T>(T);

impl<T: Arg + PartialEq> Payload for Comparable<T> {
    fn as_any(&self) -> &dyn Any {
        &self.0
    }

    fn concrete(&self) -> TypeDesc {
        T::type_desc()
    }

    fn same(&self, other: &dyn Payload) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| *other == self.0)
    }

    fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    fn identity(&self) -> Option<usize> {
        self.0.identity()
    }

    fn elements(&self) -> Option<Vec<Value>> {
        self.0.elements()
    }

    fn fmt_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl<T: Arg> Payload for Opaque<T> {
    fn as_any(&self) -> &dyn Any {
        &self.0
    }

    fn concrete(&self) -> TypeDesc {
        T::type_desc()
    }

    fn same(&self, _other: &dyn Payload) -> bool {
        false
    }

    fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    fn identity(&self) -> Option<usize> {
        self.0.identity()
    }

    fn elements(&self) -> Option<Vec<Value>> {
        self.0.elements()
    }

    fn fmt_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

/// Runtime value together with its declared type.
///
/// Cloning is cheap and preserves identity.
#[derive(Clone)]
pub struct Value {
    declared: TypeDesc,
    payload: Arc<dyn Payload>,
}

impl Value {
    /// Wrap a comparable value, declared as its own type
    pub fn new<T: Arg + PartialEq>(value: T) -> Self {
        Self {
            declared: T::type_desc(),
            payload: Arc::new(Comparable(value)),
        }
    }

    /// Wrap a value that compares by identity, declared as its own type
    pub fn opaque<T: Arg>(value: T) -> Self {
        Self {
            declared: T::type_desc(),
            payload: Arc::new(Opaque(value)),
        }
    }

    /// Wrap any [`Arg`] the way its type prefers
    pub fn of<T: Arg>(value: T) -> Self {
        value.into_value()
    }

    /// The type this value was declared as
    pub fn declared(&self) -> TypeDesc {
        self.declared
    }

    /// The type of the wrapped value itself
    pub fn concrete(&self) -> TypeDesc {
        self.payload.concrete()
    }

    pub fn is_nil(&self) -> bool {
        self.payload.is_nil()
    }

    /// Borrow the wrapped value as `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.as_any().downcast_ref::<T>()
    }

    /// Extract a typed copy of the wrapped value
    pub fn get<T: Arg>(&self) -> Option<T> {
        T::from_value(self)
    }

    /// One value per element when the wrapped value is a sequence
    pub fn elements(&self) -> Option<Vec<Value>> {
        self.payload.elements()
    }

    /// Same payload, declared as `declared`
    pub(crate) fn redeclare(self, declared: TypeDesc) -> Self {
        Self {
            declared,
            payload: self.payload,
        }
    }

    /// Whether equality can hold between this value and one built apart
    /// from it: comparable or nil contents, or an identity shared by clones
    pub(crate) fn is_matchable(&self) -> bool {
        self.concrete().kind().is_comparable()
            || self.is_nil()
            || self.payload.identity().is_some()
    }

    fn identity(&self) -> usize {
        self.payload
            .identity()
            .unwrap_or_else(|| Arc::as_ptr(&self.payload).cast::<()>() as usize)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        if self.declared != other.declared {
            return false;
        }
        let concrete = self.concrete();
        if concrete != other.concrete() {
            return false;
        }
        match (self.is_nil(), other.is_nil()) {
            (true, true) => return true,
            (false, false) => {}
            _ => return false,
        }
        if concrete.kind().is_comparable() {
            self.payload.same(&*other.payload)
        } else {
            self.identity() == other.identity()
        }
    }
}

impl Default for Value {
    /// Nil interface value
    fn default() -> Self {
        Value::new(Nil).redeclare(<Value as Arg>::type_desc())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.payload.fmt_debug(f)
    }
}

/// Payload of a nil interface value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Nil;

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
