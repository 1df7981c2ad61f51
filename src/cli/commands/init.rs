//! Initialize globrx in a directory

use std::fs;
use std::path::Path;

use log::info;

use globrx::output::{OperationResult, OutputMode};
use globrx::paths;

const DEFAULT_CONFIG: &str = r#"# globrx configuration

[translate]
# Maximum {a,{b,...}} nesting depth accepted (0 = unlimited)
max_depth = 64

[filter]
# Files must match one of these globs (empty = everything)
include = []
# Files matching any of these globs are skipped
exclude = ["{target,**/target}/**"]

[walk]
# Descend into entries whose name starts with '.'
hidden = false
follow_links = true
"#;

/// Write the template config to `--config`, or `.globrx.toml` in the current directory
pub fn init(force: bool, config: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let path = paths::resolve_config(config);

    if path.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists). Use --force to overwrite.",
                path.display()
            ),
        }
        .render(mode);
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, DEFAULT_CONFIG)?;
    info!("wrote {}", path.display());

    OperationResult {
        success: true,
        message: format!("Created {}", path.display()),
    }
    .render(mode);
    Ok(())
}
