//! Include/exclude path filtering
//!
//! A path is accepted when it matches at least one include glob (or there are
//! no include globs) and no exclude glob. Exclusion always wins.

use std::path::Path;

use super::pattern::{GlobPattern, PatternError};
use super::translate::Translator;

/// A set of include and exclude globs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathFilter {
    include: Vec<GlobPattern>,
    exclude: Vec<GlobPattern>,
}

impl PathFilter {
    /// Compile include and exclude globs with the default translator
    pub fn new<I, E, S, T>(include: I, exclude: E) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        E: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        Self::with_translator(include, exclude, &Translator::default())
    }

    /// Compile include and exclude globs with a specific translator
    ///
    /// Stops at the first glob that fails to compile.
    pub fn with_translator<I, E, S, T>(
        include: I,
        exclude: E,
        translator: &Translator,
    ) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        E: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let include = include
            .into_iter()
            .map(|g| GlobPattern::with_translator(g.as_ref(), translator))
            .collect::<Result<Vec<_>, _>>()?;
        let exclude = exclude
            .into_iter()
            .map(|g| GlobPattern::with_translator(g.as_ref(), translator))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { include, exclude })
    }

    /// A filter that accepts every path
    #[must_use]
    pub const fn accept_all() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }

    /// Check if a path passes the filter
    pub fn accepts(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();

        let included = self.include.is_empty() || self.include.iter().any(|p| p.matches_path(path));
        included && !self.exclude.iter().any(|p| p.matches_path(path))
    }

    /// Include patterns
    #[must_use]
    pub fn include(&self) -> &[GlobPattern] {
        &self.include
    }

    /// Exclude patterns
    #[must_use]
    pub fn exclude(&self) -> &[GlobPattern] {
        &self.exclude
    }

    /// Check if the filter has no patterns at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }
}
