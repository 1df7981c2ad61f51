//! Translate command - print the regex for each glob

use std::path::Path;

use log::debug;

use globrx::config::{Config, TranslateConfig};
use globrx::output::{OutputMode, TranslateEntry, TranslateResult};
use globrx::paths;

/// Translate globs and print the resulting regexes
///
/// Exits with status 1 if any glob is invalid.
pub fn translate(
    globs: &[String],
    max_depth: Option<usize>,
    config: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = Config::load_or_default(&paths::resolve_config(config))?;
    let translator = max_depth.map_or_else(
        || config.translator(),
        |max_depth| TranslateConfig { max_depth }.translator(),
    );
    debug!("translating {} glob(s), max depth {:?}", globs.len(), translator.max_depth());

    let entries = globs
        .iter()
        .map(|glob| match translator.translate(glob) {
            Ok(regex) => TranslateEntry {
                glob: glob.clone(),
                regex: Some(regex),
                error: None,
            },
            Err(e) => TranslateEntry {
                glob: glob.clone(),
                regex: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    let result = TranslateResult { entries };
    result.render(mode);

    if !result.all_valid() {
        std::process::exit(1);
    }
    Ok(())
}
