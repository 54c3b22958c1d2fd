//! Render plans: everything a renderer needs to paint a design, as JSON.
//!
//! A plan resolves each stroke's brush into a concrete line width and dash
//! pattern and expands its points into one polyline per symmetric copy. The
//! guide lines for the design's mode ride along so a renderer can draw the
//! axes underneath.

#[cfg(test)]
#[path = "plan_test.rs"]
mod plan_test;

use std::io::Read;

use serde::Serialize;
use symmetry::stroke::{Design, Stroke, StrokeId};
use symmetry::{CanvasBounds, GuideLine, Point, SymmetryError, SymmetryMode, grid_lines, guide_lines};

use crate::error::CliError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPlan {
    pub name: String,
    pub mode: SymmetryMode,
    pub bounds: CanvasBounds,
    pub guides: Vec<GuideLine>,
    pub strokes: Vec<StrokePlan>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokePlan {
    pub id: StrokeId,
    pub color: String,
    pub line_width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<[f64; 2]>,
    pub paths: Vec<Vec<Point>>,
}

/// Output of the `guides` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuidePlan {
    pub mode: SymmetryMode,
    pub guides: Vec<GuideLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<Vec<GuideLine>>,
}

/// One row of the `modes` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeInfo {
    pub name: &'static str,
    pub nominal_count: usize,
}

/// Parse a design from JSON.
pub fn read_design(reader: impl Read) -> Result<Design, CliError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Expand every stroke of `design` against `bounds`.
///
/// The design's own mode is used; strokes with nothing to draw are kept with
/// empty `paths` so ids stay aligned with the source.
pub fn build_plan(design: &Design, bounds: CanvasBounds) -> Result<RenderPlan, SymmetryError> {
    let mode = design.symmetry_mode;
    tracing::info!(name = %design.name, %mode, strokes = design.strokes.len(), "building render plan");

    let strokes = design
        .strokes
        .iter()
        .map(|stroke| plan_stroke(stroke, mode, bounds))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RenderPlan {
        name: design.name.clone(),
        mode,
        bounds,
        guides: guide_lines(mode, bounds)?,
        strokes,
    })
}

fn plan_stroke(stroke: &Stroke, mode: SymmetryMode, bounds: CanvasBounds) -> Result<StrokePlan, SymmetryError> {
    let paths = stroke.symmetric_paths(mode, bounds)?;
    if paths.is_empty() {
        tracing::warn!(id = %stroke.id, samples = stroke.points.len(), "stroke has nothing to draw");
    }
    Ok(StrokePlan {
        id: stroke.id.clone(),
        color: stroke.color.clone(),
        line_width: stroke.brush_type.line_width(stroke.width),
        dash: stroke.brush_type.dash_pattern(),
        paths,
    })
}

/// Guide lines for `mode`, plus the background grid when `grid_spacing` is set.
pub fn build_guides(
    mode: SymmetryMode,
    bounds: CanvasBounds,
    grid_spacing: Option<f64>,
) -> Result<GuidePlan, SymmetryError> {
    let grid = grid_spacing.map(|spacing| grid_lines(bounds, spacing)).transpose()?;
    Ok(GuidePlan { mode, guides: guide_lines(mode, bounds)?, grid })
}

#[must_use]
pub fn mode_table() -> Vec<ModeInfo> {
    SymmetryMode::ALL
        .iter()
        .map(|mode| ModeInfo { name: mode.as_str(), nominal_count: mode.nominal_count() })
        .collect()
}
