use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "cipher-quest-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_levels_writes_output() {
    let exe = env!("CARGO_BIN_EXE_cipher-quest-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-levels", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available levels"));
    assert!(content.contains("Simple Cryptology"));
}

#[test]
fn cli_solves_every_level_with_json_report() {
    let exe = env!("CARGO_BIN_EXE_cipher-quest-tester");
    let output_path = temp_path("run");
    let output = Command::new(exe)
        .args(["--levels", "all", "--report", "json", "--output"])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let report: serde_json::Value = serde_json::from_str(&content).expect("json report");
    assert_eq!(report["total_score"], 3700);
    assert_eq!(report["grade"], "S");
    assert_eq!(report["completed"], true);
}

#[test]
fn cli_rejects_unknown_level() {
    let exe = env!("CARGO_BIN_EXE_cipher-quest-tester");
    let output = Command::new(exe)
        .args(["--levels", "12"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("level 12 does not exist"));
}
