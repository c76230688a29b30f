use std::process::Command;

fn faultgen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_faultgen"))
}

#[test]
fn test_stdout_carries_only_cli_output() {
    let out_path = std::env::temp_dir().join(format!("faultgen_cli_{}.png", std::process::id()));
    let output = faultgen()
        .args(["8", "6", "2", "5", "--output"])
        .arg(&out_path)
        .env("RUST_LOG", "debug")
        .output()
        .expect("failed to run faultgen");
    assert!(output.status.success());

    // Log lines go to stderr, so stdout is exactly the two report lines
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "stdout: {stdout}");
    assert_eq!(
        lines[0],
        "Parameters: width = 8, height = 6, number of threads = 2, maximum number of fault lines = 5"
    );
    assert!(lines[1].starts_with("Execution time: ") && lines[1].ends_with(" ms"));

    assert!(out_path.exists());
    std::fs::remove_file(&out_path).unwrap();
}

#[test]
fn test_rejects_bad_arguments() {
    let cases: [&[&str]; 3] = [&["4", "4", "1"], &["4", "0", "1", "1"], &["4", "4", "-1", "1"]];
    for args in cases {
        let output = faultgen().args(args).output().expect("failed to run faultgen");
        assert!(!output.status.success(), "accepted {:?}", args);
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("Error:"), "stderr: {stderr}");
    }
}

#[test]
fn test_overflowing_dimensions_fail_cleanly() {
    let output = faultgen()
        .args(["4294967296", "4294967296", "1", "1"])
        .output()
        .expect("failed to run faultgen");
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid grid dimensions"), "stderr: {stderr}");
    assert!(!stderr.contains("panicked"));
}
