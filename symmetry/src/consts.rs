//! Shared numeric constants for the symmetry crate.

// ── Math ────────────────────────────────────────────────────────

/// 2π. Divided by the segment count for radial modes.
pub const TAU: f64 = std::f64::consts::TAU;

/// Largest radial segment count; upper bound on any orbit length.
pub const MAX_ORBIT_LEN: usize = 16;

// ── Grid ────────────────────────────────────────────────────────

/// Upper bound on grid lines per axis.
pub const MAX_GRID_STEPS: f64 = 10_000.0;

// ── Strokes ─────────────────────────────────────────────────────

/// Dash pattern (on, off) in pixels for dotted brushes and guide lines.
pub const DOTTED_DASH_PX: [f64; 2] = [5.0, 5.0];

/// Line width multiplier applied to bold brushes.
pub const BOLD_WIDTH_FACTOR: f64 = 2.0;

/// Default brush color for new strokes.
pub const DEFAULT_BRUSH_COLOR: &str = "#FFFFFF";

/// Default brush width in pixels for new strokes.
pub const DEFAULT_BRUSH_WIDTH: f64 = 2.0;
