//! End-to-end CLI tests driving the binary against presets and project
//! files, including the CSV export path.

use std::fs;
use std::process::{Command, Output};

fn run_elcalc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_elcalc"))
        .args(args)
        .output()
        .expect("elcalc process should run")
}

fn service_size_line(stdout: &str) -> &str {
    stdout
        .lines()
        .find(|line| line.starts_with("service:"))
        .unwrap_or_else(|| panic!("missing service line in output: {stdout}"))
}

#[test]
fn house_preset_runs_and_reports_every_circuit() {
    let output = run_elcalc(&["--preset", "house"]);
    assert!(
        output.status.success(),
        "house preset failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).expect("stdout should be valid UTF-8");
    assert!(service_size_line(&stdout).contains("mm²"));
    for name in ["lys stue", "stik køkken", "komfur"] {
        assert!(stdout.contains(name), "missing circuit `{name}`: {stdout}");
    }
}

#[test]
fn apartment_block_preset_runs_clean() {
    let output = run_elcalc(&["--preset", "apartment_block"]);
    assert!(
        output.status.success(),
        "apartment_block preset failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn project_files_match_their_presets() {
    for (preset, path) in [
        ("house", "projects/house.toml"),
        ("apartment_block", "projects/apartment_block.toml"),
    ] {
        let from_preset = run_elcalc(&["--preset", preset]);
        let from_file = run_elcalc(&["--project", path]);
        assert!(from_preset.status.success());
        assert!(
            from_file.status.success(),
            "project file run failed for {path}: stderr={}",
            String::from_utf8_lossy(&from_file.stderr)
        );
        assert_eq!(
            from_preset.stdout, from_file.stdout,
            "{path} should reproduce the `{preset}` preset output"
        );
    }
}

#[test]
fn csv_export_writes_one_row_per_circuit() {
    let out_path = std::env::temp_dir().join(format!("elcalc-export-{}.csv", std::process::id()));
    let out = out_path.to_str().expect("temp path should be valid UTF-8");

    let output = run_elcalc(&["--preset", "house", "--out", out]);
    assert!(
        output.status.success(),
        "export run failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let csv = fs::read_to_string(&out_path).expect("export file should exist");
    fs::remove_file(&out_path).ok();

    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some(
            "circuit,load_a,fuse,fuse_rating_a,cross_section_mm2,\
             voltage_drop_percent,ik_min_a,disconnects,trip_time_s,thermal_ok"
        )
    );
    // Service row plus the three house circuits.
    assert_eq!(lines.count(), 4);
    assert!(csv.contains("service,"));
    assert!(csv.contains("komfur,"));
}

#[test]
fn unknown_preset_exits_with_config_error() {
    let output = run_elcalc(&["--preset", "warehouse"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown preset"), "stderr: {stderr}");
}

#[test]
fn invalid_project_field_exits_with_config_error() {
    let path = std::env::temp_dir().join(format!("elcalc-bad-{}.toml", std::process::id()));
    fs::write(&path, "[service]\nlength_m = -5.0\n").expect("temp file should be writable");

    let output = run_elcalc(&["--project", path.to_str().expect("valid UTF-8")]);
    fs::remove_file(&path).ok();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("config error: service.length_m"),
        "stderr: {stderr}"
    );
}

#[test]
fn missing_project_file_exits_with_config_error() {
    let output = run_elcalc(&["--project", "projects/does-not-exist.toml"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot read"), "stderr: {stderr}");
}
