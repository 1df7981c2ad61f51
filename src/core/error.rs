//! Errors raised while translating a glob

use thiserror::Error;

/// A glob that cannot be translated into a regular expression
///
/// Every variant carries the offending glob so the message is useful on its
/// own, e.g. when the glob came from a configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGlobError {
    /// A `[` was never closed by a `]`
    #[error("missing ']' at end of input in glob '{glob}'")]
    UnterminatedClass {
        /// The glob being translated
        glob: String,
    },

    /// A `{` was never closed by a `}`
    #[error("missing '}}' at end of input in glob '{glob}'")]
    UnterminatedAlternation {
        /// The glob being translated
        glob: String,
    },

    /// The glob ends with a lone `\`
    #[error("incomplete escape sequence at end of input in glob '{glob}'")]
    IncompleteEscape {
        /// The glob being translated
        glob: String,
    },

    /// Alternations nest deeper than the translator allows
    #[error("alternation nesting exceeds {limit} levels in glob '{glob}'")]
    NestingTooDeep {
        /// The glob being translated
        glob: String,
        /// Maximum nesting depth that was in effect
        limit: usize,
    },
}

impl InvalidGlobError {
    /// The glob that failed to translate
    #[must_use]
    pub fn glob(&self) -> &str {
        match self {
            Self::UnterminatedClass { glob }
            | Self::UnterminatedAlternation { glob }
            | Self::IncompleteEscape { glob }
            | Self::NestingTooDeep { glob, .. } => glob,
        }
    }
}
