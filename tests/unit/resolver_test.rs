//! Tests for the Resolver module
//!
//! Resolver walks a directory and returns the files a `PathFilter` accepts.

use std::path::{Path, PathBuf};

use globrx::config::WalkConfig;
use globrx::core::PathFilter;
use globrx::resolver::{ResolveError, Resolver};

use crate::common::TestRepo;

fn filter(include: &[&str], exclude: &[&str]) -> PathFilter {
    PathFilter::new(include, exclude).unwrap()
}

// =============================================================================
// Resolver Construction Tests
// =============================================================================

#[test]
fn resolver_new() {
    let repo = TestRepo::new();
    let resolver = Resolver::new(repo.path()).unwrap();
    assert_eq!(resolver.root(), repo.path());
}

#[test]
fn resolver_invalid_path() {
    let result = Resolver::new("/nonexistent/path/that/does/not/exist");
    assert!(matches!(result, Err(ResolveError::RootNotFound(_))));
}

#[test]
fn resolver_file_root_uses_parent() {
    let repo = TestRepo::new();
    let resolver = Resolver::new(repo.path().join("README.md")).unwrap();
    assert_eq!(resolver.root(), repo.path());
}

#[test]
fn resolver_relative_file_root_uses_current_dir() {
    // Tests run from the package root
    let resolver = Resolver::new("Cargo.toml").unwrap();
    assert_eq!(resolver.root(), Path::new("."));
}

// =============================================================================
// File Finding Tests
// =============================================================================

#[test]
fn find_recursive_glob() {
    let repo = TestRepo::new();
    let resolver = Resolver::new(repo.path()).unwrap();
    let files = resolver.find_files(&filter(&["src/**/*.rs"], &[])).unwrap();
    assert_eq!(
        files,
        vec![
            PathBuf::from("src/api/routes.rs"),
            PathBuf::from("src/auth/login.rs"),
            PathBuf::from("src/auth/session.rs"),
        ]
    );
}

#[test]
fn find_top_level_only() {
    let repo = TestRepo::new();
    let resolver = Resolver::new(repo.path()).unwrap();
    let files = resolver.find_files(&filter(&["*"], &[])).unwrap();
    assert_eq!(files, vec![PathBuf::from("README.md"), PathBuf::from("notes.txt")]);
}

#[test]
fn find_with_alternation() {
    let repo = TestRepo::new();
    let resolver = Resolver::new(repo.path()).unwrap();
    let files = resolver.find_files(&filter(&["*.{md,txt}"], &[])).unwrap();
    assert_eq!(files.len(), 2);
}

#[test]
fn exclude_removes_matches() {
    let repo = TestRepo::new();
    let resolver = Resolver::new(repo.path()).unwrap();
    let files = resolver.find_files(&filter(&[], &["target/**", "src/auth/*"])).unwrap();
    assert_eq!(
        files,
        vec![
            PathBuf::from("README.md"),
            PathBuf::from("notes.txt"),
            PathBuf::from("src/api/routes.rs"),
        ]
    );
}

#[test]
fn hidden_files_excluded_by_default() {
    let repo = TestRepo::new();
    repo.add_hidden_file(".hidden", "secret");
    repo.add_hidden_dir(".hidden_dir", "file.rs", "hidden");

    let resolver = Resolver::new(repo.path()).unwrap();
    let files = resolver.find_files(&PathFilter::accept_all()).unwrap();

    assert!(!files.contains(&PathBuf::from(".hidden")));
    assert!(!files.contains(&PathBuf::from(".hidden_dir/file.rs")));
}

#[test]
fn hidden_files_included_when_enabled() {
    let repo = TestRepo::new();
    repo.add_hidden_dir(".config", "app.toml", "");

    let walk = WalkConfig {
        hidden: true,
        ..WalkConfig::default()
    };
    let resolver = Resolver::new(repo.path()).unwrap().with_walk(walk);
    let files = resolver.find_files(&filter(&["**.toml"], &[])).unwrap();
    assert_eq!(files, vec![PathBuf::from(".config/app.toml")]);
}

#[test]
fn results_are_sorted() {
    let repo = TestRepo::new();
    repo.add_file("src/zeta.rs", "");
    repo.add_file("src/alpha.rs", "");

    let resolver = Resolver::new(repo.path()).unwrap();
    let files = resolver.find_files(&filter(&["src/*.rs"], &[])).unwrap();
    assert_eq!(files, vec![PathBuf::from("src/alpha.rs"), PathBuf::from("src/zeta.rs")]);
}
