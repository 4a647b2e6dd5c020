// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Types that can flow through a mocked signature.

use crate::types::{Kind, TypeDesc};
use crate::value::{Nil, Value};
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::error::Error as StdError;
use std::fmt;
use std::hash::Hash;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

/// A type usable as an argument or result of a mocked function.
///
/// Plain comparable types opt in with [`arg_type!`](crate::arg_type).
pub trait Arg: Clone + fmt::Debug + Send + Sync + 'static {
    const KIND: Kind = Kind::Value;

    /// Wrap `self`, declared as `Self`
    fn into_value(self) -> Value;

    fn type_desc() -> TypeDesc {
        TypeDesc::of::<Self>()
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.downcast_ref::<Self>().cloned()
    }

    /// Zero value, if the type has one
    fn zero() -> Option<Self> {
        None
    }

    fn is_nil(&self) -> bool {
        false
    }

    /// Address shared by all clones, for identity-compared kinds
    fn identity(&self) -> Option<usize> {
        None
    }

    /// Per-element values of a sequence
    fn elements(&self) -> Option<Vec<Value>> {
        None
    }
}

/// Implement [`Arg`] for comparable value types whose zero is `Default`.
///
/// ```
/// #[derive(Clone, Debug, Default, PartialEq)]
/// struct Path(String);
///
/// mockfn::arg_type!(Path);
/// ```
#[macro_export]
macro_rules! arg_type {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Arg for $ty {
                fn into_value(self) -> $crate::Value {
                    $crate::Value::new(self)
                }

                fn zero() -> ::core::option::Option<Self> {
                    ::core::option::Option::Some(<$ty as ::core::default::Default>::default())
                }
            }
        )+
    };
}

arg_type!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    &'static str,
    Duration,
);

impl Arg for Nil {
    fn into_value(self) -> Value {
        Value::new(self)
    }

    fn zero() -> Option<Self> {
        Some(Nil)
    }

    fn is_nil(&self) -> bool {
        true
    }
}

/// The empty interface: holds a value of any concrete type.
impl Arg for Value {
    const KIND: Kind = Kind::Interface;

    fn into_value(self) -> Value {
        self.redeclare(Self::type_desc())
    }

    fn type_desc() -> TypeDesc {
        TypeDesc::of::<Self>().open()
    }

    fn from_value(value: &Value) -> Option<Self> {
        let concrete = value.concrete();
        Some(value.clone().redeclare(concrete))
    }

    fn zero() -> Option<Self> {
        Some(Value::default())
    }

    fn is_nil(&self) -> bool {
        Value::is_nil(self)
    }
}

impl<T: Arg + PartialEq> Arg for Option<T> {
    const KIND: Kind = Kind::Pointer;

    fn into_value(self) -> Value {
        Value::new(self)
    }

    fn zero() -> Option<Self> {
        Some(None)
    }

    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

impl<T: Arg + PartialEq> Arg for Box<T> {
    fn into_value(self) -> Value {
        Value::new(self)
    }

    fn zero() -> Option<Self> {
        T::zero().map(Box::new)
    }
}

impl<T: Arg> Arg for Vec<T> {
    const KIND: Kind = Kind::Sequence;

    fn into_value(self) -> Value {
        Value::opaque(self)
    }

    fn type_desc() -> TypeDesc {
        TypeDesc::of::<Self>().with_elem::<T>()
    }

    fn zero() -> Option<Self> {
        Some(Vec::new())
    }

    fn is_nil(&self) -> bool {
        self.is_empty()
    }

    fn elements(&self) -> Option<Vec<Value>> {
        Some(self.iter().cloned().map(Arg::into_value).collect())
    }
}

impl<K: Arg + Eq + Hash, V: Arg> Arg for HashMap<K, V> {
    const KIND: Kind = Kind::Mapping;

    fn into_value(self) -> Value {
        Value::opaque(self)
    }

    fn zero() -> Option<Self> {
        Some(HashMap::new())
    }

    fn is_nil(&self) -> bool {
        self.is_empty()
    }
}

impl<K: Arg + Ord, V: Arg> Arg for BTreeMap<K, V> {
    const KIND: Kind = Kind::Mapping;

    fn into_value(self) -> Value {
        Value::opaque(self)
    }

    fn zero() -> Option<Self> {
        Some(BTreeMap::new())
    }

    fn is_nil(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! tuple_arg {
    ($($t:ident),+) => {
        impl<$($t: Arg + PartialEq),+> Arg for ($($t,)+) {
            fn into_value(self) -> Value {
                Value::new(self)
            }

            fn zero() -> Option<Self> {
                Some(($($t::zero()?,)+))
            }
        }
    };
}

tuple_arg!(A);
tuple_arg!(A, B);
tuple_arg!(A, B, C);
tuple_arg!(A, B, C, D);

/// Trailing variadic parameter: `fn(&str, Variadic<Value>)` accepts any
/// number of trailing values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Variadic<T>(pub Vec<T>);

impl<T> From<Vec<T>> for Variadic<T> {
    fn from(items: Vec<T>) -> Self {
        Self(items)
    }
}

impl<T: Arg> Arg for Variadic<T> {
    const KIND: Kind = Kind::Sequence;

    fn into_value(self) -> Value {
        Value::opaque(self)
    }

    fn type_desc() -> TypeDesc {
        TypeDesc::of::<Self>().with_elem::<T>().variadic()
    }

    fn zero() -> Option<Self> {
        Some(Self(Vec::new()))
    }

    fn is_nil(&self) -> bool {
        self.0.is_empty()
    }

    fn elements(&self) -> Option<Vec<Value>> {
        self.0.elements()
    }
}

/// Nilable error interface value.
///
/// Equal only to itself (or its clones) and nil to nil.
#[derive(Clone, Default)]
pub struct DynError(Option<Arc<dyn StdError + Send + Sync>>);

impl DynError {
    pub fn new<E: StdError + Send + Sync + 'static>(error: E) -> Self {
        Self(Some(Arc::new(error)))
    }

    pub fn nil() -> Self {
        Self(None)
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_none()
    }

    pub fn get(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.0.as_deref()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.get().and_then(|e| e.downcast_ref::<E>())
    }
}

impl PartialEq for DynError {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                Arc::as_ptr(a).cast::<()>() == Arc::as_ptr(b).cast::<()>()
            }
            _ => false,
        }
    }
}

impl fmt::Debug for DynError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(e) => write!(f, "DynError({e:?})"),
            None => write!(f, "DynError(nil)"),
        }
    }
}

impl fmt::Display for DynError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(e) => write!(f, "{e}"),
            None => write!(f, "<nil>"),
        }
    }
}

impl Arg for DynError {
    const KIND: Kind = Kind::Interface;

    fn into_value(self) -> Value {
        Value::new(self)
    }

    fn zero() -> Option<Self> {
        Some(Self::nil())
    }

    fn is_nil(&self) -> bool {
        DynError::is_nil(self)
    }
}

type CallbackFn<A, R> = dyn Fn(A) -> R + Send + Sync;

/// Nilable function value taking `A` and returning `R`.
pub struct Callback<A, R>(Option<Arc<CallbackFn<A, R>>>);

impl<A, R> Callback<A, R> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        Self(Some(Arc::new(f)))
    }

    pub fn nil() -> Self {
        Self(None)
    }

    /// Invoke the callback; `None` when nil
    pub fn call(&self, arg: A) -> Option<R> {
        self.0.as_ref().map(|f| f(arg))
    }
}

impl<A, R> Clone for Callback<A, R> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<A, R> Default for Callback<A, R> {
    fn default() -> Self {
        Self::nil()
    }
}

impl<A, R> fmt::Debug for Callback<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(_) => write!(f, "Callback(..)"),
            None => write!(f, "Callback(nil)"),
        }
    }
}

impl<A: 'static, R: 'static> Arg for Callback<A, R> {
    const KIND: Kind = Kind::Callable;

    fn into_value(self) -> Value {
        Value::opaque(self)
    }

    fn zero() -> Option<Self> {
        Some(Self::nil())
    }

    fn is_nil(&self) -> bool {
        self.0.is_none()
    }

    fn identity(&self) -> Option<usize> {
        self.0.as_ref().map(|f| Arc::as_ptr(f).cast::<()>() as usize)
    }
}

/// Nilable sending end of a channel.
pub struct Chan<T>(Option<Arc<Mutex<Sender<T>>>>);

impl<T> Chan<T> {
    /// Open a channel, returning the sending handle and its receiver
    pub fn open() -> (Self, Receiver<T>) {
        let (tx, rx) = mpsc::channel();
        (Self(Some(Arc::new(Mutex::new(tx)))), rx)
    }

    pub fn nil() -> Self {
        Self(None)
    }

    /// Send a value; false when nil or disconnected
    pub fn send(&self, value: T) -> bool {
        match &self.0 {
            Some(tx) => tx.lock().send(value).is_ok(),
            None => false,
        }
    }
}

impl<T> Clone for Chan<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Default for Chan<T> {
    fn default() -> Self {
        Self::nil()
    }
}

impl<T> fmt::Debug for Chan<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(_) => write!(f, "Chan(..)"),
            None => write!(f, "Chan(nil)"),
        }
    }
}

impl<T: Send + 'static> Arg for Chan<T> {
    const KIND: Kind = Kind::Channel;

    fn into_value(self) -> Value {
        Value::opaque(self)
    }

    fn zero() -> Option<Self> {
        Some(Self::nil())
    }

    fn is_nil(&self) -> bool {
        self.0.is_none()
    }

    fn identity(&self) -> Option<usize> {
        self.0.as_ref().map(|tx| Arc::as_ptr(tx) as usize)
    }
}

#[cfg(test)]
#[path = "arg_tests.rs"]
mod tests;
