#![allow(clippy::float_cmp)]

use serde_json::{Value, json};

use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("kolam").chain(args.iter().copied())).unwrap()
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Result<Value, CliError> {
    let mut out = Vec::new();
    run(parse(args), KolamConfig::default(), stdin.as_bytes(), &mut out)?;
    Ok(serde_json::from_slice(&out).unwrap())
}

fn run_args(args: &[&str]) -> Result<Value, CliError> {
    run_with_stdin(args, "")
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parses_global_overrides_after_subcommand() {
    let cli = parse(&["expand", "--x", "1", "--y", "2", "--mode", "radial-12", "--width", "640"]);
    assert_eq!(cli.mode, Some("radial-12".parse().unwrap()));
    assert_eq!(cli.width, Some(640.0));
    assert!(matches!(cli.command, Command::Expand { x, y, pressure: None } if x == 1.0 && y == 2.0));
}

#[test]
fn accepts_negative_coordinates() {
    let cli = parse(&["expand", "--x", "-5", "--y", "10"]);
    assert!(matches!(cli.command, Command::Expand { x, .. } if x == -5.0));
}

#[test]
fn rejects_unknown_mode_at_parse_time() {
    let args = ["kolam", "--mode", "radial-3", "modes"];
    assert!(Cli::try_parse_from(args).is_err());
}

// =============================================================
// Commands
// =============================================================

#[test]
fn expand_prints_orbit() {
    let value = run_args(&["--mode", "horizontal", "expand", "--x", "10", "--y", "590", "--pressure", "0.5"]).unwrap();
    assert_eq!(
        value,
        json!([
            { "x": 10.0, "y": 590.0, "pressure": 0.5 },
            { "x": 10.0, "y": 10.0, "pressure": 0.5 },
        ])
    );
}

#[test]
fn expand_of_off_canvas_point_is_empty() {
    let value = run_args(&["--mode", "horizontal", "expand", "--x", "10", "--y", "-5"]).unwrap();
    assert_eq!(value, json!([]));
}

#[test]
fn expand_rejects_bad_bounds_override() {
    let err = run_args(&["--width", "0", "expand", "--x", "1", "--y", "1"]).unwrap_err();
    assert_eq!(err.error_code(), "E_INVALID_BOUNDS");
}

#[test]
fn guides_use_default_radial_eight() {
    let value = run_args(&["guides"]).unwrap();
    assert_eq!(value["mode"], json!("radial-8"));
    assert_eq!(value["guides"].as_array().map(Vec::len), Some(8));
    assert!(value.get("grid").is_none());
}

#[test]
fn guides_with_grid() {
    let value = run_args(&["--mode", "none", "guides", "--grid"]).unwrap();
    assert_eq!(value["guides"], json!([]));
    assert_eq!(value["grid"].as_array().map(Vec::len), Some(39 + 29));
}

#[test]
fn modes_lists_names_and_counts() {
    let value = run_args(&["modes"]).unwrap();
    assert_eq!(value[3], json!({ "name": "diagonal", "nominalCount": 4 }));
}

#[test]
fn replay_reads_design_from_stdin() {
    let design = json!({
        "name": "stdin",
        "symmetryMode": "vertical",
        "strokes": [{
            "id": "5d4c3b2a-1f0e-4d9c-8b7a-695847362514",
            "points": [{ "x": 100, "y": 100 }, { "x": 110, "y": 120 }],
            "color": "#FFFFFF",
            "brushType": "thin",
            "width": 2,
            "timestamp": 0
        }]
    });
    let value = run_with_stdin(&["--mode", "radial-8", "replay", "-"], &design.to_string()).unwrap();
    assert_eq!(value["mode"], json!("vertical"));
    assert_eq!(value["strokes"][0]["lineWidth"], json!(2.0));
    assert_eq!(value["strokes"][0]["paths"][1], json!([{ "x": 700.0, "y": 100.0 }, { "x": 690.0, "y": 120.0 }]));
}

#[test]
fn replay_reports_missing_file() {
    let err = run_args(&["replay", "/nonexistent/kolam-design.json"]).unwrap_err();
    assert_eq!(err.error_code(), "E_IO");
}

#[test]
fn replay_reports_bad_json() {
    let err = run_with_stdin(&["replay", "-"], "[1, 2").unwrap_err();
    assert_eq!(err.error_code(), "E_INVALID_JSON");
}
