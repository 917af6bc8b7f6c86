//! Error handling for the string function library
//!
//! One error enum covers every function in the crate. Constructor helpers take
//! `impl Into<String>` so call sites can pass literals or formatted messages.

mod constructors;
mod types;

pub use types::{JlibError, JlibResult};
