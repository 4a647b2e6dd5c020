// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime type tokens for mocked arguments and results.

use crate::arg::Arg;
use crate::value::Value;
use std::any::TypeId;
use std::fmt;

/// Kind of a declared type, deciding nil handling and equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Plain comparable value
    Value,
    /// Optional reference; `None` is nil
    Pointer,
    /// Ordered collection, compared by identity
    Sequence,
    /// Keyed collection, compared by identity
    Mapping,
    /// Channel endpoint, compared by identity
    Channel,
    /// Function value, compared by identity
    Callable,
    /// Dynamic interface value holding some concrete type
    Interface,
}

impl Kind {
    /// Whether a nil input is accepted as the zero value of this kind
    pub fn is_nilable(self) -> bool {
        !matches!(self, Kind::Value)
    }

    /// Whether values of this kind compare by content rather than identity
    pub fn is_comparable(self) -> bool {
        !matches!(
            self,
            Kind::Sequence | Kind::Mapping | Kind::Channel | Kind::Callable
        )
    }
}

/// Type token for one argument or result slot.
///
/// Two tokens are equal when they describe the same Rust type.
#[derive(Clone, Copy)]
pub struct TypeDesc {
    id: TypeId,
    name: &'static str,
    kind: Kind,
    zero: fn() -> Option<Value>,
    elem: Option<fn() -> TypeDesc>,
    variadic: bool,
    open: bool,
}

fn zero_of<T: Arg>() -> Option<Value> {
    T::zero().map(Arg::into_value)
}

fn default_of<T: Arg + Default>() -> Option<Value> {
    Some(T::default().into_value())
}

impl TypeDesc {
    /// Token for `T`, using its [`Arg`] kind and zero value
    pub fn of<T: Arg>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
            kind: T::KIND,
            zero: zero_of::<T>,
            elem: None,
            variadic: false,
            open: false,
        }
    }

    /// Use `T::default()` as the zero value
    pub fn with_default<T: Arg + Default>(mut self) -> Self {
        self.zero = default_of::<T>;
        self
    }

    /// Record the element type of a sequence
    pub fn with_elem<E: Arg>(mut self) -> Self {
        self.elem = Some(E::type_desc);
        self
    }

    /// Mark as the variadic tail of a parameter list
    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    /// Mark an interface as satisfied by every concrete type
    pub fn open(mut self) -> Self {
        self.open = true;
        self
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name with module paths stripped
    pub fn short_name(&self) -> String {
        let mut out = String::with_capacity(self.name.len());
        let mut segment = String::new();
        for c in self.name.chars() {
            if c.is_alphanumeric() || c == '_' || c == ':' {
                segment.push(c);
            } else {
                out.push_str(last_segment(&segment));
                segment.clear();
                out.push(c);
            }
        }
        out.push_str(last_segment(&segment));
        out
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Zero value of the type, if it has one
    pub fn zero(&self) -> Option<Value> {
        (self.zero)()
    }

    /// Element type of a sequence
    pub fn elem(&self) -> Option<TypeDesc> {
        self.elem.map(|elem| elem())
    }

    pub fn is_variadic(&self) -> bool {
        self.variadic
    }

    /// Whether a value of concrete type `concrete` can occupy this slot
    pub fn accepts(&self, concrete: &TypeDesc) -> bool {
        if self.kind == Kind::Interface && self.open {
            return true;
        }
        self.id == concrete.id
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

impl PartialEq for TypeDesc {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDesc {}

impl fmt::Debug for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.variadic {
            if let Some(elem) = self.elem() {
                return write!(f, "...{}", elem.short_name());
            }
        }
        write!(f, "{}", self.short_name())
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
