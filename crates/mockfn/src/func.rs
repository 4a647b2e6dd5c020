// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed function shapes.
//!
//! [`Func`] is implemented for function pointer types `fn(A1..An) -> R` with
//! up to six parameters. A unit `R` declares no results; any other `R` is a
//! single result. Use a tuple result for several values of one call, or a
//! hand-built [`Signature`] with the untyped [`DynMock`](crate::DynMock).

use crate::arg::Arg;
use crate::behavior::{DynFn, Fault};
use crate::error::MockError;
use crate::interceptor::Interceptor;
use crate::signature::Signature;
use crate::value::Value;
use std::any::TypeId;
use std::sync::Arc;
use tracing::debug;

/// A function pointer type that can be mocked.
pub trait Func: 'static {
    /// Value returned by one call
    type Output;

    /// Callable produced for this shape, `dyn Fn(A1..An) -> R`
    type Handle: ?Sized + Send + Sync;

    /// Runtime signature; `receiver` marks the first parameter as a method
    /// receiver
    fn signature(name: &str, receiver: bool) -> Signature;

    fn output_values(output: Self::Output) -> Vec<Value>;

    /// Typed output from result values, falling back to zero values
    /// when a value is missing or of another type
    fn output_from(values: &[Value]) -> Self::Output;

    /// Wrap `interceptor` in a callable of this shape
    fn synthesize(interceptor: Interceptor) -> Arc<Self::Handle>;
}

/// A function shape whose first parameter is a method receiver.
pub trait Method: Func {
    type Receiver: Arg;

    /// Parameters after the receiver, as a tuple
    type Rest;

    fn rest_values(rest: Self::Rest) -> Vec<Value>;
}

/// Replacement implementation for calls of shape `F`.
///
/// Implemented for every closure or function with the parameters of `F`.
/// Closures need their parameter types spelled out.
pub trait Delegate<F: Func> {
    /// Call with wrapped arguments, failing when one is not of the
    /// parameter type of `F`
    fn call_values(&self, args: &[Value]) -> Result<F::Output, MockError>;
}

fn is_unit<R: 'static>() -> bool {
    TypeId::of::<R>() == TypeId::of::<()>()
}

/// Recover the typed argument at `index`
fn restore<A: Arg>(args: &[Value], index: usize) -> Result<A, String> {
    match args.get(index) {
        Some(arg) => A::from_value(arg).ok_or_else(|| {
            format!(
                "argument {index}: mismatched types {} and {}",
                A::type_desc(),
                arg.concrete()
            )
        }),
        None => Err(format!("argument {index} is missing")),
    }
}

pub(crate) fn delegate_fn<F, D>(delegate: D) -> DynFn
where
    F: Func,
    D: Delegate<F> + Send + Sync + 'static,
{
    Arc::new(move |args: &[Value]| {
        delegate
            .call_values(args)
            .map(F::output_values)
            .map_err(Fault::new)
    })
}

macro_rules! func_impl {
    ($($a:ident $v:ident $i:tt),*) => {
        impl<$($a: Arg,)* R: Arg + Default> Func for fn($($a),*) -> R {
            type Output = R;
            type Handle = dyn Fn($($a),*) -> R + Send + Sync;

            fn signature(name: &str, receiver: bool) -> Signature {
                let builder = Signature::builder()
                    .name(name)
                    .receiver_slot(receiver)
                    $(.param::<$a>())*;
                if is_unit::<R>() {
                    builder.build()
                } else {
                    builder.result::<R>().build()
                }
            }

            fn output_values(output: R) -> Vec<Value> {
                if is_unit::<R>() {
                    Vec::new()
                } else {
                    vec![output.into_value()]
                }
            }

            fn output_from(values: &[Value]) -> R {
                let typed = values.first().and_then(|value| {
                    let typed = R::from_value(value);
                    if typed.is_none() {
                        debug!(
                            expected = %R::type_desc(),
                            found = %value.concrete(),
                            "result is not of the declared type, using zero value"
                        );
                    }
                    typed
                });
                typed.or_else(R::zero).unwrap_or_default()
            }

            fn synthesize(interceptor: Interceptor) -> Arc<Self::Handle> {
                Arc::new(move |$($v: $a),*| -> R {
                    match interceptor.invoke(vec![$($v.into_value()),*]) {
                        Ok(values) => <Self as Func>::output_from(&values),
                        Err(fault) => fault.raise(),
                    }
                })
            }
        }

        impl<Fun, $($a: Arg,)* R: Arg + Default> Delegate<fn($($a),*) -> R> for Fun
        where
            Fun: Fn($($a),*) -> R,
        {
            #[allow(unused_variables)]
            fn call_values(&self, args: &[Value]) -> Result<R, MockError> {
                let mismatch = |detail: String| MockError::TypeMismatch {
                    signature: <fn($($a),*) -> R as Func>::signature("", false).to_string(),
                    detail,
                };
                Ok(self($(restore::<$a>(args, $i).map_err(mismatch)?),*))
            }
        }
    };
}

macro_rules! method_impl {
    ($s:ident $(, $a:ident $v:ident)*) => {
        impl<$s: Arg, $($a: Arg,)* R: Arg + Default> Method for fn($s $(, $a)*) -> R {
            type Receiver = $s;
            type Rest = ($($a,)*);

            #[allow(clippy::let_unit_value)]
            fn rest_values(rest: Self::Rest) -> Vec<Value> {
                let ($($v,)*) = rest;
                vec![$($v.into_value()),*]
            }
        }
    };
}

func_impl!();
func_impl!(A1 a1 0);
func_impl!(A1 a1 0, A2 a2 1);
func_impl!(A1 a1 0, A2 a2 1, A3 a3 2);
func_impl!(A1 a1 0, A2 a2 1, A3 a3 2, A4 a4 3);
func_impl!(A1 a1 0, A2 a2 1, A3 a3 2, A4 a4 3, A5 a5 4);
func_impl!(A1 a1 0, A2 a2 1, A3 a3 2, A4 a4 3, A5 a5 4, A6 a6 5);

method_impl!(S);
method_impl!(S, A1 a1);
method_impl!(S, A1 a1, A2 a2);
method_impl!(S, A1 a1, A2 a2, A3 a3);
method_impl!(S, A1 a1, A2 a2, A3 a3, A4 a4);
method_impl!(S, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);

#[cfg(test)]
#[path = "func_tests.rs"]
mod tests;
