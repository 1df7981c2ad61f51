//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::config::GlobProblem;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of translating one or more globs
#[derive(Debug, Serialize)]
pub struct TranslateResult {
    /// One entry per glob, in argument order
    pub entries: Vec<TranslateEntry>,
}

/// A single translated glob
#[derive(Debug, Serialize)]
pub struct TranslateEntry {
    /// The glob as given
    pub glob: String,
    /// Translated regex, if the glob was valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    /// Error message, if the glob was invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of matching paths against a glob
#[derive(Debug, Serialize)]
pub struct MatchResult {
    /// The glob
    pub glob: String,
    /// Anchored regex used for matching
    pub regex: String,
    /// Per-path outcome
    pub paths: Vec<PathMatch>,
}

/// Whether a path matched
#[derive(Debug, Serialize)]
pub struct PathMatch {
    /// The path as given
    pub path: String,
    /// Whether the glob matched it
    pub matched: bool,
}

/// Result of a find operation
#[derive(Debug, Serialize)]
pub struct FindResult {
    /// Directory that was walked
    pub root: String,
    /// Accepted files, relative to root
    pub files: Vec<String>,
}

/// Result of validating the config file
#[derive(Debug, Serialize)]
pub struct CheckResult {
    /// Config file that was checked
    pub config: String,
    /// Whether every glob is valid
    pub valid: bool,
    /// Number of globs checked
    pub globs_checked: usize,
    /// Invalid globs
    pub problems: Vec<GlobProblem>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

impl TranslateResult {
    /// Whether every glob translated
    #[must_use]
    pub fn all_valid(&self) -> bool {
        self.entries.iter().all(|e| e.error.is_none())
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        // A single glob prints just the regex so it can be piped
        if let [entry] = self.entries.as_slice() {
            match (&entry.regex, &entry.error) {
                (Some(regex), _) => println!("{regex}"),
                (None, Some(error)) => eprintln!("{}: {error}", "error".red()),
                (None, None) => {},
            }
            return;
        }

        for entry in &self.entries {
            match (&entry.regex, &entry.error) {
                (Some(regex), _) => println!("{}  {regex}", entry.glob),
                (None, Some(error)) => println!("{}  {}: {error}", entry.glob, "error".red()),
                (None, None) => {},
            }
        }
    }
}

impl MatchResult {
    /// Whether at least one path matched
    #[must_use]
    pub fn any_matched(&self) -> bool {
        self.paths.iter().any(|p| p.matched)
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        for p in &self.paths {
            if p.matched {
                println!("{}  {}", "match".green(), p.path);
            } else {
                println!("{}  {}", "no match".red(), p.path);
            }
        }
    }
}

impl FindResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for file in &self.files {
                    println!("{file}");
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl CheckResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("Checking {} glob(s) in {}...\n", self.globs_checked, self.config);

        if self.valid {
            println!("{}", "All globs are valid.".green());
            return;
        }

        for p in &self.problems {
            println!("  [{}] {}", p.key, p.glob);
            println!("          {}\n", p.message);
        }
        println!("{}: {} invalid glob(s)", "INVALID".red(), self.problems.len());
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}
