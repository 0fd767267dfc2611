#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Small three-class model: "happy" → joy, "angry"/"furious" → anger, "sad" → sadness.
pub const TEST_MODEL: &str = r#"{
    "classes": ["anger", "joy", "sadness"],
    "intercept": [0.0, 0.0, 0.0],
    "coefficients": {
        "happy":   [-1.0,  3.0, -1.0],
        "angry":   [ 3.0, -1.0, -1.0],
        "furious": [ 2.5, -1.0, -1.0],
        "sad":     [-1.0, -1.0,  3.0]
    }
}"#;

/// Per-test scratch directory inside the system temp dir, emptied first.
pub fn scratch_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("emotrack_test_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create scratch dir");
    path
}

/// Create a unique test DB path and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let dir = scratch_dir(name);
    dir.join("emotrack.sqlite").to_string_lossy().to_string()
}

/// Write the test model next to the DB and return its path.
pub fn write_test_model(db_path: &str) -> String {
    let path = PathBuf::from(db_path).with_file_name("model.json");
    fs::write(&path, TEST_MODEL).expect("write model");
    path.to_string_lossy().to_string()
}

/// emotrack binary with HOME pointing at the DB's directory, so no real
/// user config is ever read.
pub fn emt(db_path: &str) -> Command {
    let home = PathBuf::from(db_path)
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(env::temp_dir);
    let mut cmd = cargo_bin_cmd!("emotrack");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd.args(["--db", db_path]);
    cmd
}
