//! End-to-end tests for the `keymapc` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the keymapc binary
fn keymapc_bin() -> &'static str {
    env!("CARGO_BIN_EXE_keymapc")
}

/// Runs the binary with an isolated config directory.
fn run(home: &Path, args: &[&str]) -> Output {
    Command::new(keymapc_bin())
        .args(args)
        .env("XDG_CONFIG_HOME", home)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

fn assert_success(output: &Output) {
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_generate_to_stdout() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &["generate"]);

    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("const uint16_t PROGMEM keymaps[][MATRIX_ROWS][MATRIX_COLS]"));
    assert!(stdout.contains("case Base_EKC_1:"));
    assert!(!stdout.contains("autoshift_press_user"));
}

#[test]
fn test_generate_to_file() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("keymap.c");

    let output = run(
        home.path(),
        &[
            "generate",
            "--host",
            "fr",
            "--keymap",
            "daedric_34",
            "--autoshift",
            "--output",
            out.to_str().unwrap(),
        ],
    );

    assert_success(&output);
    assert!(output.stdout.is_empty(), "nothing should be printed");
    let content = fs::read_to_string(&out).expect("keymap.c should be created");
    assert!(content.contains("#include \"keymap_french.h\""));
    assert!(content.contains("void autoshift_press_user("));
    assert!(!home.path().join("keymap.c.tmp").exists());
}

#[test]
fn test_generate_is_deterministic() {
    let home = TempDir::new().unwrap();
    let first = run(home.path(), &["generate", "--keymap", "daedric", "--autoshift"]);
    let second = run(home.path(), &["generate", "--keymap", "daedric", "--autoshift"]);

    assert_success(&first);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_generate_json_summary() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &["generate", "--format", "json"]);

    assert_success(&output);
    let summary: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(summary["host"], "us");
    assert_eq!(summary["keymap"], "std");
    assert_eq!(summary["layers"][0], "Base");
    assert!(summary["unicode"]
        .as_array()
        .unwrap()
        .iter()
        .any(|entry| entry["index"] == "EURO_SIGN"));
}

#[test]
fn test_generate_uses_config_file() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("keymapc.toml");
    fs::write(&config, "[generate]\nhost = \"fr\"\nautoshift = true\n").unwrap();

    let output = run(
        home.path(),
        &["generate", "--config", config.to_str().unwrap(), "--format", "json"],
    );
    assert_success(&output);
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["host"], "fr");

    // Flags win over the file
    let output = run(
        home.path(),
        &[
            "generate",
            "--config",
            config.to_str().unwrap(),
            "--host",
            "us",
            "--no-autoshift",
        ],
    );
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("keymap_french.h"));
    assert!(!stdout.contains("autoshift_press_user"));
}

#[test]
fn test_generate_reads_default_config_location() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("keymapc");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[generate]\nkeymap = \"daedric\"\n").unwrap();

    let output = run(home.path(), &["generate", "--format", "json"]);

    assert_success(&output);
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["keymap"], "daedric");
}

#[test]
fn test_generate_invalid_config_fails() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("bad.toml");
    fs::write(&config, "[generate]\nhost = \"de\"\n").unwrap();

    let output = run(home.path(), &["generate", "--config", config.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bad.toml"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_generate_unknown_host_fails() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &["generate", "--host", "de"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_generate_unwritable_output_fails() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("missing").join("keymap.c");

    let output = run(home.path(), &["generate", "--output", out.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(2));
    assert!(!out.exists());
}

#[test]
fn test_leds_prints_macros() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &["leds"]);

    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("# define LED_LAYOUT(l0, l5, l10,"));
    assert!(stdout.contains("# define LED_LAYOUT_ALL(color) \\\n"));
}

#[test]
fn test_list_json() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &["list", "--json"]);

    assert_success(&output);
    let listing: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(listing["hosts"], serde_json::json!(["us", "fr"]));
    assert_eq!(
        listing["keymaps"],
        serde_json::json!(["std", "daedric", "daedric_34"])
    );
    assert_eq!(listing["modes"][2], "DK");
}
