#![cfg(feature = "loaders")]

use std::fs;
use std::path::PathBuf;

use palette_content::{GamePreset, PresetLoader};
use tempfile::TempDir;

fn write_preset(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("preset.toml");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn load_dragonborn_equivalent_from_disk() {
    let temp = TempDir::new().unwrap();
    let path = write_preset(
        &temp,
        r#"
        name = "Point Buy + Dragonborn"
        checkpoints = [8, 13, 15]
        extent = 6
        cutoff = 27
        spectrum = [1, 20]
        modulus = 2
        bonus = [[2, 0, 0, 0, 0, 1]]
        "#,
    );

    let preset = PresetLoader::load(&path).unwrap();

    assert_eq!(preset.name(), "Point Buy + Dragonborn");
    assert_eq!(preset.abilities().len(), 381);
    assert_eq!(preset.render().len(), 381);
}

#[test]
fn load_reports_missing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.toml");

    let err = PresetLoader::load(&path).unwrap_err();

    assert!(err.to_string().contains("Failed to read file"));
}

#[test]
fn load_names_the_file_on_invalid_content() {
    let temp = TempDir::new().unwrap();
    let path = write_preset(&temp, "name = \"Empty\"\ncheckpoints = []\nextent = 3\n");

    let err = PresetLoader::load(&path).unwrap_err();

    assert!(err.to_string().contains("Invalid preset"));
    assert!(err.to_string().contains("preset.toml"));
}
