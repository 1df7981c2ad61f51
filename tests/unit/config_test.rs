//! Tests for project configuration

use std::fs;

use globrx::config::{Config, ConfigError, FilterConfig, WalkConfig};
use globrx::core::DEFAULT_MAX_DEPTH;
use tempfile::TempDir;

// =============================================================================
// LOADING
// =============================================================================

#[test]
fn test_load_full_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".globrx.toml");
    fs::write(
        &path,
        r#"
[translate]
max_depth = 8

[filter]
include = ["src/**/*.rs", "*.md"]
exclude = ["**/target/**"]

[walk]
hidden = true
follow_links = false
"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.translate.max_depth, 8);
    assert_eq!(config.translator().max_depth(), Some(8));
    assert_eq!(config.filter.include, vec!["src/**/*.rs", "*.md"]);
    assert_eq!(config.filter.exclude, vec!["**/target/**"]);
    assert_eq!(
        config.walk,
        WalkConfig {
            hidden: true,
            follow_links: false,
        }
    );
}

#[test]
fn test_load_missing_file_errors() {
    let temp = TempDir::new().unwrap();
    let err = Config::load(&temp.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_load_or_default_missing_file() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_or_default(&temp.path().join("nope.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.translator().max_depth(), Some(DEFAULT_MAX_DEPTH));
}

#[test]
fn test_parse_error() {
    let err = Config::parse("[filter]\ninclude = \"not a list\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

// =============================================================================
// SAVING
// =============================================================================

#[test]
fn test_save_and_reload() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested/dir/.globrx.toml");

    let config = Config {
        filter: FilterConfig {
            include: vec!["{src,tests}/**".to_string()],
            exclude: vec!["**.snap".to_string()],
        },
        ..Config::default()
    };
    config.save(&path).unwrap();

    let loaded = Config::load(&path).unwrap();
    assert_eq!(loaded, config);
}

// =============================================================================
// FILTER AND VALIDATION
// =============================================================================

#[test]
fn test_path_filter_from_config() {
    let config = Config::parse("[filter]\ninclude = [\"*.rs\"]\nexclude = [\"gen_*\"]\n").unwrap();
    let filter = config.path_filter().unwrap();
    assert!(filter.accepts("lib.rs"));
    assert!(!filter.accepts("gen_lib.rs"));
    assert!(!filter.accepts("lib.py"));
}

#[test]
fn test_path_filter_respects_depth() {
    let config =
        Config::parse("[translate]\nmax_depth = 1\n[filter]\ninclude = [\"{a,{b,c}}\"]\n").unwrap();
    assert!(matches!(config.path_filter(), Err(ConfigError::Pattern(_))));
    assert_eq!(config.validate().len(), 1);
}

#[test]
fn test_validate_reports_every_problem() {
    let config = Config::parse(
        "[filter]\ninclude = [\"[a\", \"ok/*\", \"{x\"]\nexclude = [\"tail\\\\\"]\n",
    )
    .unwrap();

    let problems = config.validate();
    let globs: Vec<&str> = problems.iter().map(|p| p.glob.as_str()).collect();
    assert_eq!(globs, vec!["[a", "{x", "tail\\"]);
    assert!(problems.iter().all(|p| p.message.contains(&p.glob)));
}
