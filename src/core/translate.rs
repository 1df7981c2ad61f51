//! Glob to regular-expression translation
//!
//! A single forward pass over the glob, split into three mutually recursive
//! modes: sequence (the default), alternation (`{a,b}`) and character class
//! (`[a-z]`). Each mode returns the cursor position where it stopped.
//!
//! | Glob      | Regex               |
//! |-----------|---------------------|
//! | `*`       | `[^/]*`             |
//! | `**`      | `.*`                |
//! | `?`       | `[^/]`              |
//! | `[abc]`   | `[[^/]&&[abc]]`     |
//! | `[!abc]`  | `[[^/]&&[^abc]]`    |
//! | `{a,b}`   | `(?:a|b)`           |
//! | `\X`      | `X`, escaped        |
//!
//! The output is not anchored; see [`GlobPattern`](super::GlobPattern) for a
//! compiled full-match form.
//!
//! # Examples
//!
//! ```
//! use globrx::core::translate;
//!
//! assert_eq!(translate("*.txt").unwrap(), r"[^/]*\.txt");
//! assert_eq!(translate("src/**").unwrap(), "src/.*");
//! assert_eq!(translate("{a,b}").unwrap(), "(?:a|b)");
//! assert!(translate("{a,b").is_err());
//! ```

use super::error::InvalidGlobError;

/// Default maximum alternation nesting depth
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Characters that end an alternative inside `{...}`
const ALTERNATION_STOP: &[char] = &[',', '}'];

/// Translate a glob into an unanchored regular expression
///
/// Uses [`Translator::default`], which rejects alternations nested deeper
/// than [`DEFAULT_MAX_DEPTH`].
pub fn translate(glob: &str) -> Result<String, InvalidGlobError> {
    Translator::default().translate(glob)
}

/// Check whether a string contains glob metacharacters
///
/// Strings without any of `* ? [ { \` translate to a plain literal.
#[must_use]
pub fn contains_glob_meta(s: &str) -> bool {
    s.contains(['*', '?', '[', '{', '\\'])
}

/// Glob translator with configurable limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    max_depth: Option<usize>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator {
    /// Create a translator with the default nesting limit
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }

    /// Create a translator without a nesting limit
    #[must_use]
    pub const fn unbounded() -> Self {
        Self { max_depth: None }
    }

    /// Set the maximum alternation nesting depth (`None` disables the check)
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Maximum alternation nesting depth, if any
    #[must_use]
    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Translate a glob into an unanchored regular expression
    pub fn translate(&self, glob: &str) -> Result<String, InvalidGlobError> {
        let mut compiler = Compiler::new(glob, self.max_depth);
        let end = compiler.sequence(0, None)?;
        debug_assert_eq!(end, compiler.chars.len());
        Ok(compiler.out)
    }
}

/// Which escaping table applies to an emitted literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EscapeMode {
    /// Outside brackets
    Sequence,
    /// Inside a bracket expression
    Class,
}

impl EscapeMode {
    fn needs_escape(self, c: char) -> bool {
        match self {
            Self::Sequence => matches!(
                c,
                '*' | '?' | '+' | '.' | '^' | '$' | '{' | '[' | ']' | '|' | '(' | ')' | '\\'
            ),
            // `~` is included because `~~` is symmetric difference in class syntax
            Self::Class => matches!(c, '^' | '[' | ']' | '&' | '-' | '\\' | '~'),
        }
    }
}

/// State of one translation call
struct Compiler<'a> {
    glob: &'a str,
    chars: Vec<char>,
    out: String,
    depth: usize,
    max_depth: Option<usize>,
}

impl<'a> Compiler<'a> {
    fn new(glob: &'a str, max_depth: Option<usize>) -> Self {
        Self {
            glob,
            chars: glob.chars().collect(),
            out: String::with_capacity(glob.len() * 2),
            depth: 0,
            max_depth,
        }
    }

    /// Translate until end of input or an unconsumed stop character
    fn sequence(&mut self, mut pos: usize, stop: Option<&[char]>) -> Result<usize, InvalidGlobError> {
        while let Some(&c) = self.chars.get(pos) {
            pos += 1;
            match c {
                '*' => {
                    if self.chars.get(pos) == Some(&'*') {
                        pos += 1;
                        self.out.push_str(".*");
                    } else {
                        self.out.push_str("[^/]*");
                    }
                },
                '?' => self.out.push_str("[^/]"),
                '[' => pos = self.char_class(pos)?,
                '{' => pos = self.alternation(pos)?,
                '\\' => pos = self.escape(pos, EscapeMode::Sequence)?,
                c if stop.is_some_and(|s| s.contains(&c)) => return Ok(pos - 1),
                c => self.push_literal(c, EscapeMode::Sequence),
            }
        }
        Ok(pos)
    }

    /// Translate `{...}`, starting just after the opening brace
    fn alternation(&mut self, mut pos: usize) -> Result<usize, InvalidGlobError> {
        self.enter()?;
        self.out.push_str("(?:");

        while let Some(&c) = self.chars.get(pos) {
            pos += 1;
            match c {
                '}' => {
                    self.out.push(')');
                    self.depth -= 1;
                    return Ok(pos);
                },
                ',' => {
                    self.out.push('|');
                    pos = self.sequence(pos, Some(ALTERNATION_STOP))?;
                },
                // First alternative has no leading comma
                _ => pos = self.sequence(pos - 1, Some(ALTERNATION_STOP))?,
            }
        }

        Err(InvalidGlobError::UnterminatedAlternation {
            glob: self.glob.to_string(),
        })
    }

    /// Translate `[...]`, starting just after the opening bracket
    fn char_class(&mut self, mut pos: usize) -> Result<usize, InvalidGlobError> {
        self.out.push_str("[[^/]&&[");
        if self.chars.get(pos) == Some(&'!') {
            self.out.push('^');
            pos += 1;
        }

        while let Some(&c) = self.chars.get(pos) {
            pos += 1;
            match c {
                ']' => {
                    self.out.push_str("]]");
                    return Ok(pos);
                },
                '-' => self.out.push('-'),
                '\\' => pos = self.escape(pos, EscapeMode::Class)?,
                c => self.push_literal(c, EscapeMode::Class),
            }
        }

        Err(InvalidGlobError::UnterminatedClass {
            glob: self.glob.to_string(),
        })
    }

    /// Emit the character after a backslash
    fn escape(&mut self, pos: usize, mode: EscapeMode) -> Result<usize, InvalidGlobError> {
        let c = *self.chars.get(pos).ok_or_else(|| InvalidGlobError::IncompleteEscape {
            glob: self.glob.to_string(),
        })?;
        self.push_literal(c, mode);
        Ok(pos + 1)
    }

    fn push_literal(&mut self, c: char, mode: EscapeMode) {
        if mode.needs_escape(c) {
            self.out.push('\\');
        }
        self.out.push(c);
    }

    fn enter(&mut self) -> Result<(), InvalidGlobError> {
        self.depth += 1;
        match self.max_depth {
            Some(limit) if self.depth > limit => Err(InvalidGlobError::NestingTooDeep {
                glob: self.glob.to_string(),
                limit,
            }),
            _ => Ok(()),
        }
    }
}
