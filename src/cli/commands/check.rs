//! Check command - validate the globs in the config file

use std::path::Path;

use globrx::config::Config;
use globrx::output::{CheckResult, OutputMode};
use globrx::paths;

/// Validate every configured glob
///
/// Exits with status 1 if any glob is invalid.
pub fn check(config: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let path = paths::resolve_config(config);
    if !path.exists() {
        anyhow::bail!(
            "config file not found: {} (run 'globrx init' to create one)",
            path.display()
        );
    }

    let config = Config::load(&path)?;
    let problems = config.validate();

    let result = CheckResult {
        config: path.display().to_string(),
        valid: problems.is_empty(),
        globs_checked: config.filter.include.len() + config.filter.exclude.len(),
        problems,
    };
    result.render(mode);

    if !result.valid {
        std::process::exit(1);
    }
    Ok(())
}
