#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rappearance::models::{Attendance, Role};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn rap() -> Command {
    cargo_bin_cmd!("rappearance")
}

/// Build an attendance record from the three raw lists.
pub fn attendance(lesson: &[u64], pupil: &[u64], tutor: &[u64]) -> Attendance {
    Attendance::new()
        .with(Role::Lesson, lesson.to_vec())
        .with(Role::Pupil, pupil.to_vec())
        .with(Role::Tutor, tutor.to_vec())
}

/// Write `json` into `dir/name` and return the path.
pub fn write_input(dir: &TempDir, name: &str, json: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, json).expect("write input");
    path
}

/// A config path inside `dir` that does not exist yet, so the CLI never
/// touches the user's real configuration.
pub fn isolated_config(dir: &TempDir) -> String {
    dir.path()
        .join("rappearance.yaml")
        .to_string_lossy()
        .to_string()
}

pub const SIMPLE_JSON: &str = r#"{"lesson": [0, 100], "pupil": [10, 90], "tutor": [20, 80]}"#;

pub const TWO_WINDOWS_JSON: &str =
    r#"{"lesson": [0, 100], "pupil": [10, 20, 50, 60], "tutor": [15, 55]}"#;
