//! # JLib String Functions
//!
//! String primitives for a JSON query and transformation language: `contains`,
//! `split`, `match` and `replace`, plus the helper functions that ship with them
//! (`substring`, `pad`, `trim`, `join`, base64 and URL codecs, number formatting
//! entry points).
//!
//! Patterns are either literal strings or matcher capabilities. A matcher is an
//! opaque, lazily evaluated source of matches supplied by the host evaluator;
//! [`matcher::RegexMatcher`] is a ready-made one backed by the `regex` crate.
//!
//! ```rust
//! use std::rc::Rc;
//! use jlib_core::functions::{replace, split};
//! use jlib_core::matcher::RegexMatcher;
//! use jlib_core::{Pattern, Replacement};
//!
//! let digits = Pattern::Matcher(Rc::new(RegexMatcher::new(r"(\d)(\d)")?));
//! let swapped = replace("a12b34", &digits, &Replacement::Literal("$2$1".into()), None)?;
//! assert_eq!(swapped, "a21b43");
//!
//! let parts = split("a,b,c", &Pattern::Literal(",".into()), Some(2))?;
//! assert_eq!(parts, vec!["a", "b"]);
//! # Ok::<(), jlib_core::JlibError>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod functions;
pub mod matcher;
pub mod pattern;
pub mod value;

pub use config::{ConfigurationError, MatcherConfig};
pub use error::{JlibError, JlibResult};
pub use matcher::{Continuation, MatchCandidate, MatchRecord, Matcher, Replacer};
pub use pattern::{Pattern, Replacement};
pub use value::Argument;
