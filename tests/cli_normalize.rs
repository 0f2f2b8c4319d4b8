//! CLI integration tests for `navopts normalize` and `navopts paths`
//!
//! Runs the built binary in an isolated directory so no user
//! configuration is discovered.

use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run navopts inside `dir` with XDG lookups pointed at it too
fn navopts(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_navopts"))
        .args(args)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir)
        .output()
        .expect("failed to run navopts")
}

fn write(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path.display().to_string()
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_normalize_prints_canonical_options() {
    let dir = TempDir::new().unwrap();
    let input = write(
        dir.path(),
        "options.json5",
        r#"{
            topBar: { title: { color: '#F00' }, searchBar: true },
            animations: { push: { alpha: { from: 0, to: 1 } } },
        }"#,
    );

    let output = navopts(dir.path(), &["normalize", &input]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let options = stdout_json(&output);
    assert_eq!(options["topBar"]["title"]["color"], json!(0xFFFF0000u32));
    assert_eq!(options["topBar"]["searchBar"]["visible"], json!(true));
    assert_eq!(
        options["animations"]["push"],
        json!({ "content": { "enter": { "alpha": { "from": 0, "to": 1 } } } })
    );
    // Deprecations are reported on stderr
    assert!(String::from_utf8_lossy(&output.stderr).contains("Warning:"));
}

#[test]
fn test_normalize_android_colors_are_signed() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "options.json", r#"{ "statusBar": { "backgroundColor": "red" } }"#);

    let output = navopts(dir.path(), &["normalize", &input, "--platform", "android"]);
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["statusBar"]["backgroundColor"], json!(-65536));
}

#[test]
fn test_normalize_show_props_and_output_file() {
    let dir = TempDir::new().unwrap();
    let input = write(
        dir.path(),
        "options.json",
        r#"{ "topBar": { "title": { "component": { "name": "Title", "id": "t1", "passProps": { "text": "Hi" } } } } }"#,
    );
    let out = dir.path().join("normalized.json");
    let out_arg = out.display().to_string();

    let output = navopts(
        dir.path(),
        &["normalize", &input, "--lazy-components", "--show-props", "-o", &out_arg],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let written: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(
        written["options"]["topBar"]["title"]["component"],
        json!({ "name": "Title", "id": "t1", "componentId": "t1" })
    );
    assert_eq!(written["props"]["t1"], json!({ "text": "Hi" }));
}

#[test]
fn test_normalize_unknown_component_fails() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "options.json", r#"{ "component": { "name": "Ghost" } }"#);

    let output = navopts(dir.path(), &["normalize", &input]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Ghost"));
}

#[test]
fn test_normalize_uses_discovered_config() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "navopts.toml",
        r#"
[normalizer]
pass_through_key = "extra"

[components]
names = ["Title"]

[fields]
tint = "color"
"#,
    );
    let input = write(
        dir.path(),
        "options.json",
        r##"{ "tint": "#00F", "extra": { "color": "keep" }, "component": { "name": "Title" } }"##,
    );

    let output = navopts(dir.path(), &["normalize", &input]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let options = stdout_json(&output);
    assert_eq!(options["tint"], json!(0xFF0000FFu32));
    assert_eq!(options["extra"]["color"], json!("keep"));
}

#[test]
fn test_normalize_bundled_assets() {
    let dir = TempDir::new().unwrap();
    let assets = write(dir.path(), "assets.json", r#"[{ "uri": "asset:/back.png", "scale": 2.0 }]"#);
    let input = write(dir.path(), "options.json", r#"{ "topBar": { "backButton": { "icon": 1 } } }"#);

    let output = navopts(dir.path(), &["normalize", &input, "--assets", &assets]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        stdout_json(&output)["topBar"]["backButton"]["icon"],
        json!({ "uri": "asset:/back.png", "scale": 2.0 })
    );
}

#[test]
fn test_normalize_strict_fails_on_deprecation() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "options.json", r#"{ "topBar": { "searchBar": true } }"#);

    let output = navopts(dir.path(), &["normalize", &input, "--strict"]);
    assert_eq!(output.status.code(), Some(1));
    // Output is still produced
    assert_eq!(stdout_json(&output)["topBar"]["searchBar"]["visible"], json!(true));
}

#[test]
fn test_normalize_warns_on_nested_legacy_fields() {
    let dir = TempDir::new().unwrap();
    let input = write(
        dir.path(),
        "options.json",
        r#"{ "topBar": { "searchBarTintColor": "red", "searchBarPlaceholder": "Find" } }"#,
    );

    let output = navopts(dir.path(), &["normalize", &input, "--strict"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Warning: searchBarTintColor is deprecated, use searchBar.tintColor"));
    assert!(stderr.contains("Warning: searchBarPlaceholder is deprecated, use searchBar.placeholder"));
}

#[test]
fn test_normalize_invalid_input_exit_code() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "options.json", "{ not json");

    let output = navopts(dir.path(), &["normalize", &input]);
    assert_eq!(output.status.code(), Some(2));

    let output = navopts(dir.path(), &["normalize", "missing.json"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_paths_lists_kinds() {
    let dir = TempDir::new().unwrap();
    let input = write(
        dir.path(),
        "options.json",
        r#"{ "topBar": { "rightButtons": [{ "icon": 1 }], "passProps": { "color": 1 } } }"#,
    );

    let output = navopts(dir.path(), &["paths", &input]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "topBar\tplain",
            "topBar.rightButtons\tbuttons",
            "topBar.rightButtons.0\tplain",
            "topBar.rightButtons.0.icon\timage",
            "topBar.passProps\tplain",
        ]
    );
}
