//! Path definitions for globrx
//!
//! ```text
//! project/
//! └── .globrx.toml      # translate limits, include/exclude globs, walk options
//! ```

use std::path::{Path, PathBuf};

/// Project configuration filename
pub const CONFIG_FILE: &str = ".globrx.toml";

/// Resolve the config file to use.
///
/// An explicit path wins; otherwise `.globrx.toml` in the current directory.
#[must_use]
pub fn resolve_config(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(|| PathBuf::from(CONFIG_FILE), Path::to_path_buf)
}
