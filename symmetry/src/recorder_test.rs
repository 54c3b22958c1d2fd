#![allow(clippy::float_cmp)]

use super::*;
use crate::mode::RadialSegments;

// =============================================================
// Helpers
// =============================================================

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn landscape() -> CanvasBounds {
    CanvasBounds { width: 800.0, height: 600.0 }
}

fn recorder(mode: SymmetryMode) -> StrokeRecorder {
    StrokeRecorder::new(mode, landscape()).unwrap()
}

// =============================================================
// Construction and settings
// =============================================================

#[test]
fn new_recorder_is_idle_with_default_brush() {
    let rec = recorder(SymmetryMode::default());
    assert!(!rec.is_recording());
    assert_eq!(rec.state(), &RecorderState::Idle);
    assert_eq!(rec.mode(), SymmetryMode::Radial(RadialSegments::Eight));
    assert_eq!(rec.brush().color, "#FFFFFF");
    assert_eq!(rec.brush().brush_type, BrushType::Thin);
    assert_eq!(rec.brush().width, 2.0);
}

#[test]
fn new_rejects_degenerate_bounds() {
    let err = StrokeRecorder::new(SymmetryMode::None, CanvasBounds { width: 0.0, height: 10.0 }).unwrap_err();
    assert_eq!(err.error_code(), "E_INVALID_BOUNDS");
}

#[test]
fn set_bounds_keeps_old_bounds_on_error() {
    let mut rec = recorder(SymmetryMode::None);
    assert!(rec.set_bounds(CanvasBounds { width: f64::NAN, height: 10.0 }).is_err());
    assert_eq!(rec.bounds(), landscape());
    rec.set_bounds(CanvasBounds { width: 400.0, height: 400.0 }).unwrap();
    assert_eq!(rec.bounds().width, 400.0);
}

// =============================================================
// Pointer lifecycle
// =============================================================

#[test]
fn pointer_down_starts_recording_and_previews_orbit() {
    let mut rec = recorder(SymmetryMode::Vertical);
    let orbit = rec.pointer_down(pt(100.0, 100.0)).unwrap().to_vec();
    assert_eq!(orbit, vec![pt(100.0, 100.0), pt(700.0, 100.0)]);
    assert!(rec.is_recording());
    assert_eq!(rec.current_points(), &[pt(100.0, 100.0)]);
}

#[test]
fn pointer_move_while_idle_is_ignored() {
    let mut rec = recorder(SymmetryMode::Vertical);
    let orbit = rec.pointer_move(pt(100.0, 100.0)).unwrap();
    assert!(orbit.is_empty());
    assert!(!rec.is_recording());
}

#[test]
fn pointer_move_appends_samples_in_order() {
    let mut rec = recorder(SymmetryMode::Horizontal);
    rec.pointer_down(pt(10.0, 10.0)).unwrap();
    rec.pointer_move(pt(20.0, 15.0)).unwrap();
    let orbit = rec.pointer_move(pt(30.0, 20.0)).unwrap().to_vec();
    assert_eq!(orbit, vec![pt(30.0, 20.0), pt(30.0, 580.0)]);
    assert_eq!(rec.current_points(), &[pt(10.0, 10.0), pt(20.0, 15.0), pt(30.0, 20.0)]);
}

#[test]
fn pointer_up_emits_stroke_with_brush_and_returns_to_idle() {
    let mut rec = recorder(SymmetryMode::None);
    rec.set_brush(BrushSettings { color: "#FFAA00".to_owned(), brush_type: BrushType::Dotted, width: 4.0 });
    rec.pointer_down(pt(1.0, 2.0)).unwrap();
    rec.pointer_move(pt(3.0, 4.0)).unwrap();

    let stroke = rec.pointer_up(1234).unwrap();
    assert_eq!(stroke.points, vec![pt(1.0, 2.0), pt(3.0, 4.0)]);
    assert_eq!(stroke.color, "#FFAA00");
    assert_eq!(stroke.brush_type, BrushType::Dotted);
    assert_eq!(stroke.width, 4.0);
    assert_eq!(stroke.timestamp, 1234);
    assert!(!rec.is_recording());
    assert!(rec.current_points().is_empty());
}

#[test]
fn pointer_up_while_idle_returns_none() {
    let mut rec = recorder(SymmetryMode::None);
    assert!(rec.pointer_up(0).is_none());
}

#[test]
fn single_tap_still_produces_a_stroke() {
    let mut rec = recorder(SymmetryMode::None);
    rec.pointer_down(pt(5.0, 5.0)).unwrap();
    let stroke = rec.pointer_up(0).unwrap();
    assert_eq!(stroke.points.len(), 1);
}

#[test]
fn each_stroke_gets_a_fresh_id() {
    let mut rec = recorder(SymmetryMode::None);
    rec.pointer_down(pt(5.0, 5.0)).unwrap();
    let a = rec.pointer_up(0).unwrap();
    rec.pointer_down(pt(5.0, 5.0)).unwrap();
    let b = rec.pointer_up(0).unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn pointer_down_restarts_an_unfinished_stroke() {
    let mut rec = recorder(SymmetryMode::None);
    rec.pointer_down(pt(1.0, 1.0)).unwrap();
    rec.pointer_move(pt(2.0, 2.0)).unwrap();
    rec.pointer_down(pt(9.0, 9.0)).unwrap();
    assert_eq!(rec.current_points(), &[pt(9.0, 9.0)]);
}

#[test]
fn cancel_discards_the_stroke() {
    let mut rec = recorder(SymmetryMode::None);
    rec.pointer_down(pt(1.0, 1.0)).unwrap();
    rec.cancel();
    assert!(rec.pointer_up(0).is_none());
}

// =============================================================
// Preview
// =============================================================

#[test]
fn preview_paths_follow_the_active_mode() {
    let mut rec = recorder(SymmetryMode::Radial(RadialSegments::Four));
    rec.pointer_down(pt(420.0, 300.0)).unwrap();
    assert!(rec.preview_paths().unwrap().is_empty());

    rec.pointer_move(pt(440.0, 300.0)).unwrap();
    let paths = rec.preview_paths().unwrap();
    assert_eq!(paths.len(), 4);
    assert_eq!(paths[0], vec![pt(420.0, 300.0), pt(440.0, 300.0)]);
}

#[test]
fn mode_change_applies_to_next_sample() {
    let mut rec = recorder(SymmetryMode::None);
    rec.pointer_down(pt(100.0, 100.0)).unwrap();
    rec.set_mode(SymmetryMode::Vertical);
    let orbit = rec.pointer_move(pt(100.0, 200.0)).unwrap();
    assert_eq!(orbit.len(), 2);
}
