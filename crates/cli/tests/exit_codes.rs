use std::process::Command;
use tempfile::tempdir;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_update-rom-data"))
}

#[test]
fn test_missing_workbook_exits_non_zero() {
    let dir = tempdir().unwrap();

    let output = binary()
        .current_dir(dir.path())
        .arg("does-not-exist.xlsx")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not find ROM Excel file"));
    assert!(stderr.contains("Usage:"));
    assert!(!dir.path().join("data/rom-data.json").exists());
}

#[test]
fn test_success_prints_summary() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("ROM.xlsx");
    let mut workbook = rust_xlsxwriter::Workbook::new();
    workbook.add_worksheet();
    workbook.save(&source).unwrap();

    let output = binary()
        .current_dir(dir.path())
        .arg("ROM.xlsx")
        .env("NO_COLOR", "1")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Investment: $300,000"));
    assert!(stdout.contains("Payback: 5 months"));

    let json = std::fs::read_to_string(dir.path().join("data/rom-data.json")).unwrap();
    assert!(json.contains("\"sourceFile\": \"ROM.xlsx\""));
}
