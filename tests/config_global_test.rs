//! Global config layering lives in its own test binary: it points XDG_CONFIG_HOME
//! at a temp directory for the whole process.

#![cfg(target_os = "linux")]

use std::fs;

use tempfile::TempDir;

use gof_demo::config::{global_config_path, Settings};

#[test]
fn given_global_and_explicit_config_when_load_then_explicit_wins_per_key() {
    // Arrange
    let xdg = TempDir::new().unwrap();
    std::env::set_var("XDG_CONFIG_HOME", xdg.path());
    let global = global_config_path().expect("global config path");
    assert!(global.starts_with(xdg.path()));
    fs::create_dir_all(global.parent().unwrap()).unwrap();
    fs::write(&global, "default_pattern = \"bridge\"\nindent = \"~\"\n").unwrap();

    let local = xdg.path().join("local.toml");
    fs::write(&local, "indent = \".\"\n").unwrap();

    // Act
    let global_only = Settings::load(None).expect("load global");
    let layered = Settings::load(Some(&local)).expect("load layered");

    // Assert
    assert_eq!(global_only.default_pattern, "bridge");
    assert_eq!(global_only.indent, "~");
    assert_eq!(layered.default_pattern, "bridge");
    assert_eq!(layered.indent, ".");
    assert!(layered.color);

    std::env::remove_var("XDG_CONFIG_HOME");
}
