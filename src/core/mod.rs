//! Core glob logic for globrx
//!
//! Pure translation and matching with no I/O dependencies.
//!
//! - [`translate()`] - Glob to regex translation
//! - [`GlobPattern`] - A glob compiled into an anchored regex
//! - [`PathFilter`] - Include/exclude glob lists
//! - [`InvalidGlobError`] - Malformed glob syntax

mod error;
mod filter;
mod pattern;
mod translate;

pub use error::InvalidGlobError;
pub use filter::PathFilter;
pub use pattern::{GlobPattern, PatternError};
pub use translate::{DEFAULT_MAX_DEPTH, Translator, contains_glob_meta, translate};
