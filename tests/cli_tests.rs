use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{SIMPLE_JSON, TWO_WINDOWS_JSON, isolated_config, rap, write_input};

#[test]
fn test_compute_from_file() {
    let dir = TempDir::new().unwrap();
    let cfg = isolated_config(&dir);
    let input = write_input(&dir, "simple.json", SIMPLE_JSON);

    rap()
        .args(["--config", &cfg, "compute"])
        .arg(&input)
        .assert()
        .success()
        .stdout("60\n");
}

#[test]
fn test_compute_from_stdin() {
    let dir = TempDir::new().unwrap();
    let cfg = isolated_config(&dir);

    rap()
        .args(["--config", &cfg, "compute", "-"])
        .write_stdin(TWO_WINDOWS_JSON)
        .assert()
        .success()
        .stdout("10\n");
}

#[test]
fn test_compute_json_output() {
    let dir = TempDir::new().unwrap();
    let cfg = isolated_config(&dir);
    let input = write_input(&dir, "simple.json", SIMPLE_JSON);

    rap()
        .args(["--config", &cfg, "compute", "--format", "json"])
        .arg(&input)
        .assert()
        .success()
        .stdout(contains(r#"{"total":60}"#));

    rap()
        .args(["--config", &cfg, "compute", "--format", "json", "--details"])
        .arg(&input)
        .assert()
        .success()
        .stdout(contains("\"segments\"").and(contains("\"presence\"")));
}

#[test]
fn test_compute_details_table() {
    let dir = TempDir::new().unwrap();
    let cfg = isolated_config(&dir);
    let input = write_input(&dir, "two.json", TWO_WINDOWS_JSON);

    rap()
        .args(["--config", &cfg, "compute", "--details"])
        .arg(&input)
        .assert()
        .success()
        .stdout(contains("Presence"))
        .stdout(contains("Overlap"))
        .stdout(contains("1970-01-01 00:00:15"))
        .stdout(contains("Total: 10 (00h 00m 10s)"));
}

#[test]
fn test_compute_odd_length_rejected_then_truncated() {
    let dir = TempDir::new().unwrap();
    let cfg = isolated_config(&dir);
    let input = write_input(
        &dir,
        "odd.json",
        r#"{"lesson": [0, 100], "pupil": [10, 90, 95], "tutor": [20, 80]}"#,
    );

    rap()
        .args(["--config", &cfg, "compute"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("odd length 3"));

    rap()
        .args(["--config", &cfg, "compute", "--odd-length", "truncate"])
        .arg(&input)
        .assert()
        .success()
        .stdout("60\n");
}

#[test]
fn test_compute_rejects_unknown_role() {
    let dir = TempDir::new().unwrap();
    let cfg = isolated_config(&dir);
    let input = write_input(&dir, "bad.json", r#"{"lesson": [0, 100], "parent": [0, 1]}"#);

    rap()
        .args(["--config", &cfg, "compute"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("Unknown role 'parent'"));
}

#[test]
fn test_compute_missing_file() {
    let dir = TempDir::new().unwrap();
    let cfg = isolated_config(&dir);

    rap()
        .args(["--config", &cfg, "compute", "does-not-exist.json"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(contains("I/O error"));
}

#[test]
fn test_check_reference_cases() {
    let dir = TempDir::new().unwrap();
    let cfg = isolated_config(&dir);

    rap()
        .args(["--config", &cfg, "check"])
        .assert()
        .success()
        .stdout(contains("recorded-2: expected=3577, got=3577"))
        .stdout(contains("All 8 reference cases passed"));
}

#[test]
fn test_export_csv() {
    let dir = TempDir::new().unwrap();
    let cfg = isolated_config(&dir);
    let input = write_input(&dir, "two.json", TWO_WINDOWS_JSON);
    let out = dir.path().join("segments.csv");

    rap()
        .args(["--config", &cfg, "export", "--format", "csv", "--input"])
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("index,start,end,duration,start_at,end_at"));
    assert_eq!(
        lines.next(),
        Some("1,15,20,5,1970-01-01 00:00:15,1970-01-01 00:00:20")
    );
    assert_eq!(
        lines.next(),
        Some("2,50,55,5,1970-01-01 00:00:50,1970-01-01 00:00:55")
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn test_export_csv_without_overlap_has_header_only() {
    let dir = TempDir::new().unwrap();
    let cfg = isolated_config(&dir);
    let input = write_input(&dir, "none.json", r#"{"lesson": [0, 100]}"#);
    let out = dir.path().join("empty.csv");

    rap()
        .args(["--config", &cfg, "export", "--input"])
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("No overlap found"));

    let content = fs::read_to_string(&out).unwrap();
    assert_eq!(content.trim_end(), "index,start,end,duration,start_at,end_at");
}

#[test]
fn test_export_json() {
    let dir = TempDir::new().unwrap();
    let cfg = isolated_config(&dir);
    let input = write_input(&dir, "simple.json", SIMPLE_JSON);
    let out = dir.path().join("segments.json");

    rap()
        .args(["--config", &cfg, "export", "--format", "json", "--input"])
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let parsed: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["start"], 20);
    assert_eq!(rows[0]["end"], 80);
    assert_eq!(rows[0]["duration"], 60);
}

#[test]
fn test_export_does_not_overwrite_without_confirmation() {
    let dir = TempDir::new().unwrap();
    let cfg = isolated_config(&dir);
    let input = write_input(&dir, "simple.json", SIMPLE_JSON);
    let out = dir.path().join("existing.csv");
    fs::write(&out, "keep me").unwrap();

    rap()
        .args(["--config", &cfg, "export", "--input"])
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rap()
        .args(["--config", &cfg, "export", "--force", "--input"])
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("index,"));
}

#[test]
fn test_export_overwrites_after_confirmation() {
    let dir = TempDir::new().unwrap();
    let cfg = isolated_config(&dir);
    let input = write_input(&dir, "simple.json", SIMPLE_JSON);
    let out = dir.path().join("existing.csv");
    fs::write(&out, "old").unwrap();

    rap()
        .args(["--config", &cfg, "export", "--input"])
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(contains("will be overwritten"));
    assert!(fs::read_to_string(&out).unwrap().contains("1,20,80,60"));
}

#[test]
fn test_compute_recorded_lesson_end_to_end() {
    let dir = TempDir::new().unwrap();
    let cfg = isolated_config(&dir);
    let input = write_input(
        &dir,
        "recorded-2.json",
        r#"{
            "lesson": [1594702800, 1594706400],
            "pupil": [1594702789, 1594704500, 1594702807, 1594704542, 1594704512, 1594704513,
                      1594704564, 1594705150, 1594704581, 1594704582, 1594704734, 1594705009,
                      1594705095, 1594705096, 1594705106, 1594706480, 1594705158, 1594705773,
                      1594705849, 1594706480, 1594706500, 1594706875, 1594706502, 1594706503,
                      1594706524, 1594706524, 1594706579, 1594706641],
            "tutor": [1594700035, 1594700364, 1594702749, 1594705148, 1594705149, 1594706463]
        }"#,
    );

    rap()
        .args(["--config", &cfg, "compute"])
        .arg(&input)
        .assert()
        .success()
        .stdout("3577\n");
}

#[test]
fn test_compute_rejects_role_given_twice() {
    let dir = TempDir::new().unwrap();
    let cfg = isolated_config(&dir);
    let input = write_input(
        &dir,
        "dup.json",
        r#"{"Pupil": [10, 90], "pupil": [200, 300], "lesson": [0, 100], "tutor": [0, 100]}"#,
    );

    rap()
        .args(["--config", &cfg, "compute"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("Role 'pupil' is given more than once"));
}
