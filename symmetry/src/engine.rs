//! Symmetry expansion and guide geometry.
//!
//! Everything here is a pure function of its arguments: no state is kept
//! between calls, inputs are taken by value, and identical inputs always yield
//! bit-identical outputs. [`expand`] is called once per pointer sample while a
//! stroke is drawn, so it allocates only the returned `Vec`; callers on a hot
//! path can reuse a buffer through [`expand_into`] instead.
//!
//! Orbit members that land outside the canvas are dropped, not clamped. This
//! applies to the input point as well, so an orbit may be shorter than
//! [`SymmetryMode::nominal_count`] or even empty near the edges.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::consts::{MAX_GRID_STEPS, TAU};
use crate::error::SymmetryError;
use crate::geom::{CanvasBounds, GuideLine, Point};
use crate::mode::{RadialSegments, SymmetryMode};

/// Namespace over the engine's free functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymmetryEngine;

impl SymmetryEngine {
    /// See [`expand`].
    ///
    /// # Errors
    ///
    /// Returns [`SymmetryError::InvalidBounds`] for degenerate bounds.
    pub fn expand(point: Point, mode: SymmetryMode, bounds: CanvasBounds) -> Result<Vec<Point>, SymmetryError> {
        expand(point, mode, bounds)
    }

    /// See [`guide_lines`].
    ///
    /// # Errors
    ///
    /// Returns [`SymmetryError::InvalidBounds`] for degenerate bounds.
    pub fn guide_lines(mode: SymmetryMode, bounds: CanvasBounds) -> Result<Vec<GuideLine>, SymmetryError> {
        guide_lines(mode, bounds)
    }
}

/// Expand `point` into its symmetric orbit under `mode`.
///
/// The first element is `point` itself, unmodified, whenever it lies on the
/// canvas. Every generated point carries the input's `pressure`.
///
/// # Errors
///
/// Returns [`SymmetryError::InvalidBounds`] if `bounds` is non-finite or not
/// strictly positive.
pub fn expand(point: Point, mode: SymmetryMode, bounds: CanvasBounds) -> Result<Vec<Point>, SymmetryError> {
    let mut out = Vec::with_capacity(mode.nominal_count());
    expand_into(point, mode, bounds, &mut out)?;
    Ok(out)
}

/// Like [`expand`], but clears and refills a caller-owned buffer.
///
/// `out` is left empty on error.
///
/// # Errors
///
/// Returns [`SymmetryError::InvalidBounds`] if `bounds` is non-finite or not
/// strictly positive.
pub fn expand_into(
    point: Point,
    mode: SymmetryMode,
    bounds: CanvasBounds,
    out: &mut Vec<Point>,
) -> Result<(), SymmetryError> {
    out.clear();
    bounds.validate()?;

    let CanvasBounds { width, height } = bounds;
    let Point { x, y, .. } = point;

    out.push(point);
    match mode {
        SymmetryMode::None => {}
        SymmetryMode::Horizontal => out.push(point.moved_to(x, height - y)),
        SymmetryMode::Vertical => out.push(point.moved_to(width - x, y)),
        SymmetryMode::Diagonal => {
            // The transpose pair mixes axes of different extent; it is a true
            // reflection only when width == height.
            out.extend([
                point.moved_to(width - x, height - y),
                point.moved_to(y, x),
                point.moved_to(height - y, width - x),
            ]);
        }
        SymmetryMode::Radial(segments) => push_rotations(point, segments, bounds.center(), out),
    }

    out.retain(|p| bounds.contains(*p));
    Ok(())
}

/// Append the `count - 1` rotated copies of `point` about `center`.
fn push_rotations(point: Point, segments: RadialSegments, center: Point, out: &mut Vec<Point>) {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    let radius = dx.hypot(dy);
    let base_angle = dy.atan2(dx);

    for angle in segment_angles(segments).skip(1) {
        let angle = base_angle + angle;
        out.push(point.moved_to(center.x + radius * angle.cos(), center.y + radius * angle.sin()));
    }
}

/// Angles `i * 2π / n` for `i in 0..n`.
#[allow(clippy::cast_precision_loss)] // n <= 16
fn segment_angles(segments: RadialSegments) -> impl Iterator<Item = f64> {
    let n = segments.count();
    let step = TAU / n as f64;
    (0..n).map(move |i| step * i as f64)
}

/// Reference axes for `mode`, independent of any input point.
///
/// Output order is fixed for a given mode.
///
/// # Errors
///
/// Returns [`SymmetryError::InvalidBounds`] if `bounds` is non-finite or not
/// strictly positive.
pub fn guide_lines(mode: SymmetryMode, bounds: CanvasBounds) -> Result<Vec<GuideLine>, SymmetryError> {
    bounds.validate()?;

    let CanvasBounds { width, height } = bounds;
    let center = bounds.center();
    let horizontal = GuideLine::new(0.0, center.y, width, center.y);
    let vertical = GuideLine::new(center.x, 0.0, center.x, height);

    let lines = match mode {
        SymmetryMode::None => Vec::new(),
        SymmetryMode::Horizontal => vec![horizontal],
        SymmetryMode::Vertical => vec![vertical],
        SymmetryMode::Diagonal => vec![
            vertical,
            horizontal,
            GuideLine::new(0.0, 0.0, width, height),
            GuideLine::new(width, 0.0, 0.0, height),
        ],
        SymmetryMode::Radial(segments) => {
            let radius = width.min(height) / 2.0;
            segment_angles(segments)
                .map(|angle| {
                    GuideLine::new(
                        center.x,
                        center.y,
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    )
                })
                .collect()
        }
    };
    Ok(lines)
}

/// Background grid: vertical lines at every `spacing` step strictly inside the
/// width, then horizontal lines likewise for the height.
///
/// # Errors
///
/// Returns [`SymmetryError::InvalidBounds`] for degenerate bounds and
/// [`SymmetryError::InvalidGridSpacing`] if `spacing` is non-finite, not
/// strictly positive, or so small the grid would exceed
/// [`MAX_GRID_STEPS`] lines per axis.
pub fn grid_lines(bounds: CanvasBounds, spacing: f64) -> Result<Vec<GuideLine>, SymmetryError> {
    let (xs, ys) = grid_steps(bounds, spacing)?;
    let lines = xs
        .iter()
        .map(|&x| GuideLine::new(x, 0.0, x, bounds.height))
        .chain(ys.iter().map(|&y| GuideLine::new(0.0, y, bounds.width, y)))
        .collect();
    Ok(lines)
}

/// Grid intersections, column by column.
///
/// # Errors
///
/// Same as [`grid_lines`].
pub fn grid_dots(bounds: CanvasBounds, spacing: f64) -> Result<Vec<Point>, SymmetryError> {
    let (xs, ys) = grid_steps(bounds, spacing)?;
    let dots = xs
        .iter()
        .flat_map(|&x| ys.iter().map(move |&y| Point::new(x, y)))
        .collect();
    Ok(dots)
}

fn grid_steps(bounds: CanvasBounds, spacing: f64) -> Result<(Vec<f64>, Vec<f64>), SymmetryError> {
    bounds.validate()?;
    let longest = bounds.width.max(bounds.height);
    if !(spacing.is_finite() && spacing > 0.0) || longest / spacing > MAX_GRID_STEPS {
        return Err(SymmetryError::InvalidGridSpacing(spacing));
    }
    Ok((steps_below(spacing, bounds.width), steps_below(spacing, bounds.height)))
}

fn steps_below(spacing: f64, limit: f64) -> Vec<f64> {
    let mut steps = Vec::new();
    let mut v = spacing;
    while v < limit {
        steps.push(v);
        v += spacing;
    }
    steps
}
