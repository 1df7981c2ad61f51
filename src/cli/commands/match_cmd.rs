//! Match command - test paths against a glob

use std::path::Path;

use log::debug;

use globrx::config::Config;
use globrx::core::{GlobPattern, contains_glob_meta};
use globrx::output::{MatchResult, OutputMode, PathMatch};
use globrx::paths;

/// Report which paths the glob matches
///
/// Exits with status 1 if no path matched.
pub fn match_paths(
    glob: &str,
    candidates: &[String],
    config: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    if !contains_glob_meta(glob) {
        debug!("'{glob}' has no glob metacharacters and only matches itself");
    }
    let config = Config::load_or_default(&paths::resolve_config(config))?;
    let pattern = GlobPattern::with_translator(glob, &config.translator())?;
    debug!("{} -> {}", pattern.glob(), pattern.regex_source());

    let result = MatchResult {
        glob: glob.to_string(),
        regex: format!("^{}$", pattern.regex_source()),
        paths: candidates
            .iter()
            .map(|p| PathMatch {
                path: p.clone(),
                matched: pattern.matches_path(p),
            })
            .collect(),
    };
    result.render(mode);

    if !result.any_matched() {
        std::process::exit(1);
    }
    Ok(())
}
