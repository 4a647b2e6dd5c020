// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fabricated functions and interfaces for tests.
//!
//! A mock is configured with conditions, each an argument pattern bound to
//! behaviors: fixed results, a replacement function, or a fault. The mock
//! then produces any number of callables, each with its own [`Recorder`]
//! holding the call count and the recorded arguments.
//!
//! ```
//! use mockfn::{args, DynError, Mock, ANY};
//!
//! let read = Mock::<fn(String) -> (Vec<u8>, DynError)>::named("read_file");
//! read.when(args!["a.txt".to_string()])
//!     .unwrap()
//!     .returns((b"hello".to_vec(), DynError::nil()))
//!     .unwrap();
//!
//! let (read_file, recorder) = read.make();
//! assert_eq!(read_file("a.txt".to_string()).0, b"hello");
//! assert!(read_file("b.txt".to_string()).0.is_empty());
//! assert_eq!(recorder.count(), 2);
//! ```
//!
//! [`DynMock`] is the untyped engine underneath, configured with wrapped
//! [`Value`]s against a runtime [`Signature`].

mod arg;
mod behavior;
mod compose;
mod condition;
mod error;
mod func;
mod input;
mod interceptor;
mod mock;
mod pattern;
mod recorder;
mod signature;
mod typed;
mod types;
mod value;

pub use arg::{Arg, Callback, Chan, DynError, Variadic};
pub use behavior::{Behavior, DynFn, Fault};
pub use compose::Implementation;
pub use condition::Condition;
pub use error::MockError;
pub use func::{Delegate, Func, Method};
pub use input::{Input, IntoInput, ANY, NIL};
pub use interceptor::Interceptor;
pub use mock::DynMock;
pub use mockfn_capture::CapturedCall;
pub use pattern::{Matcher, Pattern};
pub use recorder::{DynRecorder, Replay, Replayed};
pub use signature::{Signature, SignatureBuilder};
pub use typed::{Mock, Recorder, ReplayCall, ReplayIter, When};
pub use types::{Kind, TypeDesc};
pub use value::{Nil, Value};
