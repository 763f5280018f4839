use std::process::{Command, Output};

fn run_trace(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_trace"))
        .args(args)
        .output()
        .expect("failed to launch trace")
}

#[test]
fn unknown_algorithm_prints_usage() {
    let output = run_trace(&["bogo"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Unsupported algorithm: bogo"), "{stderr}");
    assert!(stderr.contains("Usage:"), "{stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn bad_array_prints_usage() {
    let output = run_trace(&["quick", "--array", "3,x"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Usage:"), "{stderr}");
}

#[test]
fn supplied_array_is_traced() {
    let output = run_trace(&["bubble", "--array", "3,1,2", "--direction", "desc"]);
    assert!(output.status.success());

    let response: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response["algorithm_name"], "bubble");
    assert_eq!(response["sort_direction"], "desc");
    assert_eq!(response["final_array"], serde_json::json!([3, 2, 1]));
}
