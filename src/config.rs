//! Project configuration
//!
//! Settings live in `.globrx.toml`:
//!
//! ```toml
//! [translate]
//! max_depth = 64        # 0 disables the nesting guard
//!
//! [filter]
//! include = ["src/**/*.rs"]
//! exclude = ["**/target/**"]
//!
//! [walk]
//! hidden = false
//! follow_links = true
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{DEFAULT_MAX_DEPTH, GlobPattern, PathFilter, PatternError, Translator};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Error reading or writing the configuration file
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing the configuration file
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Error serializing the configuration
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A configured glob is invalid
    #[error("invalid glob in config: {0}")]
    Pattern(#[from] PatternError),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Translation limits
    #[serde(default)]
    pub translate: TranslateConfig,

    /// Include/exclude globs
    #[serde(default)]
    pub filter: FilterConfig,

    /// Directory walk options
    #[serde(default)]
    pub walk: WalkConfig,
}

/// Translation limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// Maximum alternation nesting depth (0 = unlimited)
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

const fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

impl TranslateConfig {
    /// Build a translator from these settings
    #[must_use]
    pub const fn translator(&self) -> Translator {
        let max_depth = if self.max_depth == 0 {
            None
        } else {
            Some(self.max_depth)
        };
        Translator::new().with_max_depth(max_depth)
    }
}

/// Include/exclude globs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Paths must match one of these (empty = everything)
    #[serde(default)]
    pub include: Vec<String>,

    /// Paths matching any of these are dropped
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Directory walk options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Descend into entries whose name starts with `.`
    #[serde(default)]
    pub hidden: bool,

    /// Follow symbolic links
    #[serde(default = "default_follow_links")]
    pub follow_links: bool,
}

const fn default_follow_links() -> bool {
    true
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            hidden: false,
            follow_links: default_follow_links(),
        }
    }
}

/// An invalid glob found by [`Config::validate`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlobProblem {
    /// Config key holding the glob (`filter.include` or `filter.exclude`)
    pub key: String,
    /// The glob as written
    pub glob: String,
    /// Why it is invalid
    pub message: String,
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!("loading config from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load config from a TOML file, or defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse config from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Save config to a TOML file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Translator configured by `[translate]`
    #[must_use]
    pub const fn translator(&self) -> Translator {
        self.translate.translator()
    }

    /// Compile `[filter]` into a path filter
    pub fn path_filter(&self) -> Result<PathFilter, ConfigError> {
        Ok(PathFilter::with_translator(
            &self.filter.include,
            &self.filter.exclude,
            &self.translator(),
        )?)
    }

    /// Check every configured glob, collecting all problems
    #[must_use]
    pub fn validate(&self) -> Vec<GlobProblem> {
        let translator = self.translator();
        let sections = [
            ("filter.include", &self.filter.include),
            ("filter.exclude", &self.filter.exclude),
        ];

        let mut problems = Vec::new();
        for (key, globs) in sections {
            for glob in globs {
                if let Err(e) = GlobPattern::with_translator(glob, &translator) {
                    problems.push(GlobProblem {
                        key: key.to_string(),
                        glob: glob.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }
        problems
    }
}
