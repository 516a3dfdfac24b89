//! Environment overrides live in their own test binary: they mutate process env.

use std::fs;

use tempfile::TempDir;

use gof_demo::config::Settings;

#[test]
fn given_env_vars_when_load_then_override_config_file() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("gof-demo.toml");
    fs::write(&path, "default_pattern = \"bridge\"\nindent = \".\"\n").unwrap();
    std::env::set_var("GOFDEMO_DEFAULT_PATTERN", "visitor");
    std::env::set_var("GOFDEMO_COLOR", "false");

    // Act
    let settings = Settings::load(Some(&path)).expect("load settings");

    // Assert
    assert_eq!(settings.default_pattern, "visitor");
    assert_eq!(settings.indent, ".");
    assert!(!settings.color);

    std::env::remove_var("GOFDEMO_DEFAULT_PATTERN");
    std::env::remove_var("GOFDEMO_COLOR");
}
