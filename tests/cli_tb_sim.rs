use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "hdlsim-rs-{prefix}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write temp file");
    path
}

fn has_line(stdout: &str, want: &str) -> bool {
    stdout.lines().any(|line| line == want)
}

const REGISTER_CHAIN: &str = r#"
{
    "schema_version": 1,
    "nets": [
        { "name": "c" },
        { "name": "creg", "init": "0" },
        { "name": "cregreg", "init": "1" }
    ],
    "deferred": [
        { "target": "creg", "source": "c" },
        { "target": "cregreg", "source": "creg" }
    ],
    "stimulus": [ { "net": "c", "value": "1", "time": 10 } ]
}
"#;

#[test]
fn tb_sim_prints_final_values() {
    let dir = unique_temp_dir("tb-sim-values");
    let tb = write_file(&dir, "tb.json", REGISTER_CHAIN);

    let output = Command::new(env!("CARGO_BIN_EXE_tb_sim"))
        .args(["--testbench", tb.to_str().unwrap()])
        .output()
        .expect("run tb_sim");
    assert!(
        output.status.success(),
        "tb_sim failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("done @ t=10"), "stdout: {stdout}");
    assert!(has_line(&stdout, "c = 1"));
    assert!(has_line(&stdout, "creg = 1"));
    assert!(has_line(&stdout, "cregreg = 1"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn tb_sim_until_leaves_later_stimulus_pending() {
    let dir = unique_temp_dir("tb-sim-until");
    let tb = write_file(&dir, "tb.json", REGISTER_CHAIN);

    let output = Command::new(env!("CARGO_BIN_EXE_tb_sim"))
        .args(["--testbench", tb.to_str().unwrap(), "--until", "5"])
        .output()
        .expect("run tb_sim");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("done @ t=5"), "stdout: {stdout}");
    assert!(stdout.contains("pending_slots=1"));
    assert!(has_line(&stdout, "c = x"));
    assert!(has_line(&stdout, "creg = x"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn tb_sim_writes_trace_json() {
    let dir = unique_temp_dir("tb-sim-trace");
    let tb = write_file(&dir, "tb.json", REGISTER_CHAIN);
    let out_json = dir.join("trace.json");

    let output = Command::new(env!("CARGO_BIN_EXE_tb_sim"))
        .args([
            "--testbench",
            tb.to_str().unwrap(),
            "--trace-json",
            out_json.to_str().unwrap(),
        ])
        .output()
        .expect("run tb_sim");
    assert!(
        output.status.success(),
        "tb_sim failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let raw = fs::read_to_string(&out_json).expect("read trace.json");
    let v: Value = serde_json::from_str(&raw).expect("parse trace.json");
    assert_eq!(v["nets"], serde_json::json!(["c", "creg", "cregreg"]));
    let events = v["events"].as_array().expect("events array");
    assert!(!events.is_empty());
    let snapshots = v["snapshots"].as_array().expect("snapshots array");
    assert_eq!(snapshots[0]["t"], 0);
    assert_eq!(snapshots[0]["values"], serde_json::json!(["x", "0", "1"]));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn tb_sim_exits_nonzero_on_unknown_net_name() {
    let dir = unique_temp_dir("tb-sim-unknown");
    let tb = write_file(
        &dir,
        "tb.json",
        r#"
{
    "schema_version": 1,
    "nets": [ { "name": "a" } ],
    "stimulus": [ { "net": "b", "value": "1", "time": 1 } ]
}
        "#,
    );

    let output = Command::new(env!("CARGO_BIN_EXE_tb_sim"))
        .args(["--testbench", tb.to_str().unwrap()])
        .output()
        .expect("run tb_sim");
    assert!(
        !output.status.success(),
        "expected non-zero exit, got success"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(r#"unknown net name "b""#),
        "stderr did not contain expected message: {stderr}"
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn tb_sim_exits_nonzero_on_delta_cycle_bound() {
    let dir = unique_temp_dir("tb-sim-swap");
    let tb = write_file(
        &dir,
        "tb.json",
        r#"
{
    "schema_version": 1,
    "nets": [ { "name": "x" }, { "name": "y" } ],
    "deferred": [
        { "target": "x", "source": "y" },
        { "target": "y", "source": "x" }
    ],
    "stimulus": [
        { "net": "x", "value": "1", "time": 1 },
        { "net": "y", "value": "0", "time": 1 }
    ]
}
        "#,
    );

    let output = Command::new(env!("CARGO_BIN_EXE_tb_sim"))
        .args([
            "--testbench",
            tb.to_str().unwrap(),
            "--max-delta-cycles",
            "8",
        ])
        .output()
        .expect("run tb_sim");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("time slot t=1 did not settle"),
        "stderr did not contain expected message: {stderr}"
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn tb_top_runs_reference_testbench() {
    let output = Command::new(env!("CARGO_BIN_EXE_tb_top"))
        .output()
        .expect("run tb_top");
    assert!(
        output.status.success(),
        "tb_top failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("done @ t=10"), "stdout: {stdout}");
    for want in [
        "a = 0",
        "b = 0",
        "c = 1",
        "aclone = 0",
        "creg = 1",
        "cregreg = 1",
        "cfinal = 1",
    ] {
        assert!(has_line(&stdout, want), "missing {want:?} in {stdout}");
    }
}
