//! Integration tests for config loading and file output.

use channel_cli::{load_config, render_generate, render_layout, write_output, OutputFormat};
use channel_datagen::Quarter;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("channel.yml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn config_file_is_loaded_and_seed_flag_wins() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
seed: 7
waterfall:
  negative_threshold: 0.5
"#,
    );

    let config = load_config(Some(&path), None).unwrap();
    assert_eq!(config.seed, 7);
    assert_eq!(config.waterfall.negative_threshold, 0.5);

    let config = load_config(Some(&path), Some(42)).unwrap();
    assert_eq!(config.seed, 42);
    assert_eq!(config.waterfall.negative_threshold, 0.5);
}

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
ranges:
  monthly_amount:
    min: 10
    max: 1
"#,
    );

    let err = load_config(Some(&path), None).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("Failed to load config"));
    assert!(message.contains("monthly_amount"));
}

#[test]
fn generate_writes_identical_files_for_same_seed() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");

    for path in [&first, &second] {
        let config = load_config(None, Some(1234)).unwrap();
        let content = render_generate(config, OutputFormat::Json, false).unwrap();
        write_output(&content, Some(path)).unwrap();
    }

    let a = fs::read_to_string(&first).unwrap();
    let b = fs::read_to_string(&second).unwrap();
    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn layout_written_to_file_parses() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("layout.json");

    let config = load_config(None, None).unwrap();
    let content = render_layout(config, Quarter::Q4).unwrap();
    write_output(&content, Some(&path)).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    let widgets = value["widgets"].as_array().unwrap();
    let treemap = widgets.iter().find(|w| w["chart"] == "treemap").unwrap();
    assert_eq!(treemap["series"][0]["values"][7], 218829.0);
}
