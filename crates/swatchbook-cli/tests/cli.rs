//! End-to-end tests for the `swatchbook` command, run in-process against a
//! temporary store.

use std::path::Path;

use clap::Parser;
use swatchbook_cli::{run, Cli};
use tempfile::TempDir;

fn run_args(store: &Path, args: &[&str]) -> anyhow::Result<String> {
    let mut argv = vec!["swatchbook", "--store", store.to_str().unwrap()];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv)?;

    let mut out = Vec::new();
    run(&cli, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn list_marks_default_on_first_run() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("store.json");

    let output = run_args(&store, &["list"]).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 7);
    assert!(lines[0].starts_with("* "));
    assert!(lines[0].contains("light"));
    assert!(lines[1].starts_with("  "));
    assert!(!store.exists());
}

#[test]
fn select_with_save_persists() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("store.json");

    let output = run_args(&store, &["select", "purple", "--save"]).unwrap();
    assert!(output.contains("Selected Purple Dream (purple)"));
    assert!(output.contains("Tema yadda saxlandı!"));

    let listed = run_args(&store, &["list"]).unwrap();
    let active: Vec<&str> = listed.lines().filter(|l| l.starts_with('*')).collect();
    assert_eq!(active.len(), 1);
    assert!(active[0].contains("purple"));
}

#[test]
fn select_without_save_does_not_persist() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("store.json");

    run_args(&store, &["select", "red"]).unwrap();
    let css = run_args(&store, &["show"]).unwrap();
    assert!(css.contains("--primary: #2563eb;"));
}

#[test]
fn select_unknown_is_an_error() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("store.json");

    let err = run_args(&store, &["select", "sepia"]).unwrap_err();
    assert!(err.to_string().contains("unknown theme 'sepia'"));
}

#[test]
fn show_dark_includes_marker_rule() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("store.json");

    let css = run_args(&store, &["show", "dark"]).unwrap();
    assert!(css.starts_with(":root {"));
    assert!(css.contains("--surface-muted: #0f172a;"));
    assert!(css.contains(":root[data-theme=\"dark\"] {"));

    let css = run_args(&store, &["show", "darkgreen"]).unwrap();
    assert!(!css.contains("data-theme"));
}

#[test]
fn save_to_unwritable_store_fails() {
    let dir = TempDir::new().unwrap();

    let err = run_args(dir.path(), &["select", "red", "--save"]).unwrap_err();
    assert!(err.to_string().contains("failed to save theme 'red'"));

    let err = run_args(dir.path(), &["save"]).unwrap_err();
    assert!(err.to_string().contains("failed to save theme 'light'"));
}

#[test]
fn reset_clears_saved_selection() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("store.json");

    run_args(&store, &["select", "blue", "--save"]).unwrap();
    let output = run_args(&store, &["reset"]).unwrap();
    assert!(output.contains("Standart rəngə qaytarıldı!"));

    let saved = std::fs::read_to_string(&store).unwrap();
    assert!(!saved.contains("selectedTheme"));

    let css = run_args(&store, &["show"]).unwrap();
    assert!(css.contains("--app-bg: #f6f7fb;"));
}

#[test]
fn picker_prints_markup() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("store.json");

    run_args(&store, &["select", "green", "--save"]).unwrap();
    let html = run_args(&store, &["picker"]).unwrap();
    assert_eq!(html.matches("class=\"color-option").count(), 7);
    assert!(html.contains("<div class=\"color-option active\" data-theme-key=\"green\">"));
}

#[test]
fn custom_themes_file() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("store.json");
    let themes = dir.path().join("themes.yaml");
    std::fs::write(
        &themes,
        r##"
paper:
  name: Paper
  icon: fa-file
  appBg: "#fafafa"
  background: "#fafafa"
  surface: "#ffffff"
  surfaceAlt: "#f0f0f0"
  surfaceMuted: "#f5f5f5"
  primary: "#333333"
  primarySoft: "#dddddd"
  secondary: "#777777"
  success: "#2e7d32"
  warning: "#ef6c00"
  danger: "#c62828"
  text: "#111111"
  textMuted: "#666666"
  border: "#e0e0e0"
  shadowLg: "0 10px 20px rgba(0, 0, 0, 0.1)"
"##,
    )
    .unwrap();

    let output = run_args(
        &store,
        &[
            "--themes",
            themes.to_str().unwrap(),
            "--default-theme",
            "paper",
            "list",
        ],
    )
    .unwrap();
    assert_eq!(output.lines().count(), 1);
    assert!(output.contains("Paper"));
}

#[test]
fn missing_default_in_themes_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("store.json");
    let themes = dir.path().join("themes.yaml");
    std::fs::write(&themes, "{}\n").unwrap();

    let err = run_args(&store, &["--themes", themes.to_str().unwrap(), "list"]).unwrap_err();
    assert!(format!("{:#}", err).contains("loading palettes"));
}

#[test]
fn config_file_changes_storage_key() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("store.json");
    let config = dir.path().join("config.yaml");
    std::fs::write(&config, "storage_key: palette\n").unwrap();

    run_args(
        &store,
        &["--config", config.to_str().unwrap(), "select", "red", "--save"],
    )
    .unwrap();
    let saved = std::fs::read_to_string(&store).unwrap();
    assert!(saved.contains("\"palette\""));
    assert!(saved.contains("\"red\""));
}

#[test]
fn verbosity_maps_to_level() {
    let cli = Cli::try_parse_from(["swatchbook", "-vv", "list"]).unwrap();
    assert_eq!(cli.log_level(), "debug");
    let cli = Cli::try_parse_from(["swatchbook", "list"]).unwrap();
    assert_eq!(cli.log_level(), "warn");
}
