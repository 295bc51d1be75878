//! Runs the penhub binary against a session file.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

const SESSION: &str = r#"{"event": "initPenData", "data": {"groupInfo": [{"groupnum": 3, "stuIds": ["a", "b"]}]}}
{"event": "receivePenData", "data": {"userid": "b", "groupnum": 3, "points": [[0, 1], [1, 1]]}}
"#;

fn run(args: &[&str], dir: &TempDir) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_penhub");
    Command::new(bin)
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("config-home"))
        .env_remove("PENHUB_LOG")
        .arg("--quiet")
        .arg("--workspace")
        .arg(dir.path())
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_replay_user_json_output() {
    let dir = TempDir::new().unwrap();
    let session = dir.path().join("session.jsonl");
    fs::write(&session, SESSION).unwrap();

    let output = run(
        &["replay", session.to_str().unwrap(), "--user", "b", "--format", "json"],
        &dir,
    );
    assert!(
        output.status.success(),
        "replay should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!({"userId": "b", "points": [[0, 1], [1, 1]]})
    );
}

#[test]
fn test_summary_missing_file_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.jsonl");
    let output = run(&["summary", missing.to_str().unwrap()], &dir);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Session file not found"),
        "stderr should name the missing session file: {}",
        stderr
    );
}
