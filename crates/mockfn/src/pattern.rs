// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Argument patterns.
//!
//! A pattern holds one matcher per parameter. For variadic signatures the
//! pattern covers the fixed parameters plus one matcher per trailing value,
//! or a trailing wildcard that accepts any number of trailing values.

use crate::error::MockError;
use crate::input::{check_input, Input};
use crate::signature::Signature;
use crate::types::TypeDesc;
use crate::value::Value;

/// Matcher for a single argument.
#[derive(Clone, Debug, PartialEq)]
pub enum Matcher {
    /// Accepts anything
    Any,
    /// Accepts only an equal value
    Exact(Value),
}

impl Matcher {
    pub fn accepts(&self, arg: &Value) -> bool {
        match self {
            Matcher::Any => true,
            Matcher::Exact(expected) => expected == arg,
        }
    }
}

/// Ordered argument matchers selecting a condition.
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    matchers: Vec<Matcher>,
    rest: bool,
}

impl Pattern {
    /// Pattern matching every argument list
    pub fn catch_all() -> Self {
        Self {
            matchers: Vec::new(),
            rest: true,
        }
    }

    /// Validate `inputs` against the parameters of `signature`.
    pub fn compile(inputs: Vec<Input>, signature: &Signature) -> Result<Self, MockError> {
        let params = signature.params();
        let actual = inputs.len();
        let arity = |expected: usize| MockError::ArityMismatch {
            signature: signature.to_string(),
            expected,
            actual,
        };

        if !signature.is_variadic() {
            if inputs.len() != params.len() {
                return Err(arity(params.len()));
            }
            let matchers = inputs
                .into_iter()
                .zip(params)
                .enumerate()
                .map(|(i, (input, param))| to_matcher(input, *param, signature, i))
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(Self {
                matchers,
                rest: false,
            });
        }

        let fixed = params.len() - 1;
        if inputs.len() < fixed {
            return Err(arity(fixed));
        }
        let tail = params[fixed];
        let elem = tail.elem().unwrap_or(tail);

        // A lone trailing wildcard stands for the whole variadic tail
        let rest = inputs.len() == fixed + 1 && matches!(inputs.last(), Some(Input::Any));
        let take = if rest { fixed } else { inputs.len() };

        let matchers = inputs
            .into_iter()
            .take(take)
            .enumerate()
            .map(|(i, input)| {
                let declared = if i < fixed { params[i] } else { elem };
                to_matcher(input, declared, signature, i)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { matchers, rest })
    }

    /// Whether every argument is accepted by its matcher.
    ///
    /// `args` is the argument list after variadic flattening.
    pub fn matches(&self, args: &[Value]) -> bool {
        let arity_ok = if self.rest {
            args.len() >= self.matchers.len()
        } else {
            args.len() == self.matchers.len()
        };
        arity_ok && self.matchers.iter().zip(args).all(|(m, arg)| m.accepts(arg))
    }

    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }

    /// Whether trailing arguments beyond the matchers are accepted
    pub fn has_rest(&self) -> bool {
        self.rest
    }
}

fn to_matcher(
    input: Input,
    declared: TypeDesc,
    signature: &Signature,
    index: usize,
) -> Result<Matcher, MockError> {
    let position = format!("argument {index}");
    let value = match input {
        Input::Any => return Ok(Matcher::Any),
        input => check_input(input, declared, signature, &position)?,
    };
    // Each call wraps its own copy of a collection, so a non-nil one could
    // never be the same value
    if !value.is_matchable() {
        return Err(MockError::TypeMismatch {
            signature: signature.to_string(),
            detail: format!(
                "{position}: {} compares by identity, match it with nil or a wildcard",
                value.concrete()
            ),
        });
    }
    Ok(Matcher::Exact(value))
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
