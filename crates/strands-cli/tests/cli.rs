//! End-to-end runs of the `strands` commands against a scratch store.

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use clap::Parser;
use serial_test::serial;
use strands_cli::{run, Cli};
use strands_theme::{reset_scheme_detector, set_scheme_detector, Theme};
use tempfile::TempDir;

fn run_args(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args)?;
    let mut out = Vec::new();
    run(&cli, &mut out)?;
    Ok(String::from_utf8(out)?)
}

fn store_arg(dir: &TempDir) -> String {
    dir.path().join("preferences.json").display().to_string()
}

fn stored_theme(path: &Path) -> Option<String> {
    let raw = fs::read_to_string(path).ok()?;
    let value: serde_json::Value = serde_json::from_str(&raw).ok()?;
    value["theme"].as_str().map(str::to_string)
}

#[test]
fn test_show_follows_system_without_store() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);

    let output = run_args(&[
        "strands", "--store", &store, "--system", "dark", "--json", "theme", "show",
    ])
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["active"], "dark");
    assert_eq!(value["source"], "system");
    assert_eq!(value["label"], "Switch to light theme");
    assert!(value["stored"].is_null());
    assert!(!dir.path().join("preferences.json").exists());
}

#[test]
fn test_toggle_persists_and_overrides_system() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);

    let output = run_args(&["strands", "--store", &store, "--system", "light", "theme", "toggle"])
        .unwrap();
    assert!(output.contains("Switched to dark theme"));
    assert_eq!(
        stored_theme(&dir.path().join("preferences.json")).as_deref(),
        Some("dark")
    );

    // System still light, but the stored choice wins from now on
    let output = run_args(&[
        "strands", "--store", &store, "--system", "light", "--json", "theme", "show",
    ])
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["active"], "dark");
    assert_eq!(value["source"], "stored");
}

#[test]
fn test_toggle_twice_restores() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);
    let args = ["strands", "--store", &store, "--system", "dark", "theme", "toggle"];

    run_args(&args).unwrap();
    let output = run_args(&args).unwrap();

    assert!(output.contains("Switched to dark theme"));
    assert_eq!(
        stored_theme(&dir.path().join("preferences.json")).as_deref(),
        Some("dark")
    );
}

#[test]
fn test_corrupted_store_value_is_ignored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");
    fs::write(&path, r#"{"theme": "midnight"}"#).unwrap();
    let store = path.display().to_string();

    let output = run_args(&[
        "strands", "--store", &store, "--system", "dark", "--json", "theme", "show",
    ])
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["active"], "dark");
    assert_eq!(value["source"], "system");
}

#[test]
fn test_malformed_store_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");
    fs::write(&path, "{ nope").unwrap();
    let store = path.display().to_string();

    let err = run_args(&["strands", "--store", &store, "--system", "dark", "theme", "show"])
        .unwrap_err();
    assert!(format!("{:#}", err).contains("failed to read preferences"));
}

#[test]
fn test_watch_with_forced_scheme_reports_nothing() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);

    let output = run_args(&[
        "strands",
        "--store",
        &store,
        "--system",
        "dark",
        "theme",
        "watch",
        "--interval-ms",
        "0",
        "--max-polls",
        "3",
    ])
    .unwrap();
    assert!(output.is_empty());
}

static SCHEME_READS: AtomicUsize = AtomicUsize::new(0);

/// Reports a different scheme on every read.
fn flapping_scheme() -> Theme {
    if SCHEME_READS.fetch_add(1, Ordering::SeqCst) % 2 == 0 {
        Theme::Dark
    } else {
        Theme::Light
    }
}

#[test]
#[serial]
fn test_watch_reads_startup_scheme_once() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);
    SCHEME_READS.store(0, Ordering::SeqCst);
    set_scheme_detector(flapping_scheme);

    let result = run_args(&[
        "strands", "--store", &store, "theme", "watch", "--interval-ms", "0", "--max-polls", "0",
    ]);
    reset_scheme_detector();

    assert!(result.unwrap().is_empty());
    assert_eq!(SCHEME_READS.load(Ordering::SeqCst), 1);
}

#[test]
fn test_simulate_persists_toggle() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);

    let output = run_args(&[
        "strands", "--store", &store, "--system", "light", "simulate", "load", "key:Enter",
        "wait:1000",
    ])
    .unwrap();

    assert!(output.contains("root[data-theme] = \"light\""));
    assert!(output.contains("default prevented"));
    assert!(output.contains("toast \"Switched to dark theme\""));
    assert!(output.contains("toast \"Welcome to Strands Unlimited!\""));
    assert_eq!(
        stored_theme(&dir.path().join("preferences.json")).as_deref(),
        Some("dark")
    );
}

#[test]
fn test_simulate_json_with_layout_and_config() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);
    let config = dir.path().join("page.yaml");
    fs::write(&config, "scroll_offset: 100\n").unwrap();
    let config = config.display().to_string();

    let output = run_args(&[
        "strands",
        "--store",
        &store,
        "--config",
        &config,
        "--system",
        "dark",
        "--json",
        "simulate",
        "anchor:#features",
        "--section",
        "features=700",
    ])
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value[0]["step"], "anchor:#features");
    let effects = value[0]["effects"].as_array().unwrap();
    assert_eq!(effects[0]["effect"], "prevent_default");
    assert_eq!(effects[1]["effect"], "scroll_to");
    assert_eq!(effects[1]["top"], 600);
}

#[test]
fn test_simulate_rejects_unknown_step() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);

    let err = run_args(&["strands", "--store", &store, "--system", "dark", "simulate", "jump"])
        .unwrap_err();
    assert!(format!("{:#}", err).contains("unknown step 'jump'"));
}
