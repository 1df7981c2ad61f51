//! Find command - list files accepted by include/exclude globs

use std::path::Path;

use log::debug;

use globrx::config::Config;
use globrx::output::{FindResult, OutputMode};
use globrx::paths;
use globrx::resolver::Resolver;

/// Walk `dir` and print every file the filter accepts
///
/// Globs given on the command line replace the matching config list.
pub fn find(
    dir: &Path,
    include: Vec<String>,
    exclude: Vec<String>,
    hidden: bool,
    config: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let mut config = Config::load_or_default(&paths::resolve_config(config))?;
    if !include.is_empty() {
        config.filter.include = include;
    }
    if !exclude.is_empty() {
        config.filter.exclude = exclude;
    }
    if hidden {
        config.walk.hidden = true;
    }
    debug!(
        "include: {:?}, exclude: {:?}",
        config.filter.include, config.filter.exclude
    );

    let filter = config.path_filter()?;
    let resolver = Resolver::new(dir)?.with_walk(config.walk);
    let files = resolver.find_files(&filter)?;

    let result = FindResult {
        root: dir.display().to_string(),
        files: files
            .iter()
            .map(|p| p.to_string_lossy().replace('\\', "/"))
            .collect(),
    };
    result.render(mode);
    Ok(())
}
