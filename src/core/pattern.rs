//! Compiled glob patterns
//!
//! A [`GlobPattern`] pairs the original glob with its translated regex,
//! anchored at both ends so it matches whole path strings.
//!
//! # Examples
//!
//! ```
//! use globrx::core::GlobPattern;
//!
//! let p = GlobPattern::new("src/**/*.rs").unwrap();
//! assert!(p.is_match("src/auth/login.rs"));
//! assert!(!p.is_match("tests/login.rs"));
//!
//! let p = GlobPattern::new("*.{md,txt}").unwrap();
//! assert!(p.is_match("README.md"));
//! assert!(!p.is_match("docs/README.md"));
//! ```

use std::fmt;
use std::path::{MAIN_SEPARATOR, Path};
use std::str::FromStr;

use regex::Regex;
use thiserror::Error;

use super::error::InvalidGlobError;
use super::translate::Translator;

/// Errors that can occur when compiling a glob pattern
#[derive(Debug, Error)]
pub enum PatternError {
    /// Glob syntax is malformed
    #[error(transparent)]
    InvalidGlob(#[from] InvalidGlobError),

    /// Translated pattern was rejected by the regex engine
    #[error("glob '{glob}' does not compile to a valid regex: {source}")]
    Regex {
        /// The glob that was translated
        glob: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },
}

/// A glob compiled into an anchored regex
#[derive(Debug, Clone)]
pub struct GlobPattern {
    /// Original glob string
    glob: String,

    /// Unanchored translator output
    regex_source: String,

    /// Compiled, anchored regex
    regex: Regex,
}

impl PartialEq for GlobPattern {
    fn eq(&self, other: &Self) -> bool {
        self.glob == other.glob
    }
}

impl Eq for GlobPattern {}

impl GlobPattern {
    /// Compile a glob with the default translator
    pub fn new(glob: &str) -> Result<Self, PatternError> {
        Self::with_translator(glob, &Translator::default())
    }

    /// Compile a glob with a specific translator
    pub fn with_translator(glob: &str, translator: &Translator) -> Result<Self, PatternError> {
        let regex_source = translator.translate(glob)?;
        let regex = Regex::new(&format!("^{regex_source}$")).map_err(|source| {
            PatternError::Regex {
                glob: glob.to_string(),
                source,
            }
        })?;

        Ok(Self {
            glob: glob.to_string(),
            regex_source,
            regex,
        })
    }

    /// The original glob
    #[must_use]
    pub fn glob(&self) -> &str {
        &self.glob
    }

    /// The translated regex, without anchors
    #[must_use]
    pub fn regex_source(&self) -> &str {
        &self.regex_source
    }

    /// Check whether the whole string matches
    #[must_use]
    pub fn is_match(&self, s: &str) -> bool {
        self.regex.is_match(s)
    }

    /// Check whether a path matches
    ///
    /// On platforms whose separator is `\`, separators are normalized to `/`
    /// first. Elsewhere `\` is an ordinary filename character.
    pub fn matches_path(&self, path: impl AsRef<Path>) -> bool {
        let path_str = path.as_ref().to_string_lossy();
        if MAIN_SEPARATOR == '\\' {
            self.is_match(&path_str.replace('\\', "/"))
        } else {
            self.is_match(&path_str)
        }
    }
}

impl FromStr for GlobPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glob)
    }
}
