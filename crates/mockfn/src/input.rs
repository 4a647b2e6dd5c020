// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Raw values supplied while configuring a mock.

use crate::arg::Arg;
use crate::error::MockError;
use crate::signature::Signature;
use crate::types::{Kind, TypeDesc};
use crate::value::Value;

/// A configured argument or result before validation.
#[derive(Clone, Debug)]
pub enum Input {
    /// Wildcard; accepts any argument
    Any,
    /// Nil of whatever nilable type the slot declares
    Nil,
    Value(Value),
}

/// Wildcard pattern element
pub const ANY: Input = Input::Any;

/// Nil input, valid for nilable and interface slots
pub const NIL: Input = Input::Nil;

/// Conversion into an [`Input`]; implemented for every [`Arg`].
pub trait IntoInput {
    fn into_input(self) -> Input;
}

impl<T: Arg> IntoInput for T {
    fn into_input(self) -> Input {
        Input::Value(self.into_value())
    }
}

impl IntoInput for Input {
    fn into_input(self) -> Input {
        self
    }
}

/// Build a list of [`Input`]s.
///
/// ```
/// use mockfn::{args, ANY};
///
/// let inputs = args![ANY, "a.txt", 3_u8];
/// assert_eq!(inputs.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    ($($x:expr),* $(,)?) => {
        ::std::vec![$($crate::IntoInput::into_input($x)),*]
    };
}

/// Validate `input` against the declared slot type `declared`.
///
/// `position` names the slot in error messages.
pub(crate) fn check_input(
    input: Input,
    declared: TypeDesc,
    signature: &Signature,
    position: &str,
) -> Result<Value, MockError> {
    let mismatch = |detail: String| MockError::TypeMismatch {
        signature: signature.to_string(),
        detail: format!("{position}: {detail}"),
    };
    match input {
        Input::Any => Err(mismatch(format!(
            "wildcard cannot be used as {declared}"
        ))),
        Input::Nil => {
            if !declared.kind().is_nilable() {
                return Err(mismatch(format!("cannot use nil as {declared}")));
            }
            declared
                .zero()
                .ok_or_else(|| mismatch(format!("{declared} has no nil value")))
        }
        Input::Value(value) => {
            let concrete = value.concrete();
            if declared.kind() == Kind::Interface {
                if !declared.accepts(&concrete) {
                    return Err(mismatch(format!(
                        "{concrete} does not implement {declared}"
                    )));
                }
            } else if concrete != declared {
                return Err(mismatch(format!(
                    "mismatched types {declared} and {concrete}"
                )));
            }
            Ok(value.redeclare(declared))
        }
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
