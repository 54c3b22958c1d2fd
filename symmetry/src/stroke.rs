//! Stroke model: recorded strokes, brush styles, and symmetric path building.
//!
//! A [`Stroke`] is the capture format handed over by the recorder: an ordered
//! list of [`Point`]s plus brush metadata. The engine itself never sees the
//! metadata; [`symmetric_paths`] expands each point independently and then
//! regroups the orbits into one polyline per symmetric copy, which is what a
//! renderer strokes. [`Design`] bundles strokes with the mode they were drawn
//! in so a drawing can be replayed.

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{BOLD_WIDTH_FACTOR, DOTTED_DASH_PX};
use crate::engine::expand_into;
use crate::error::SymmetryError;
use crate::geom::{CanvasBounds, Point};
use crate::mode::SymmetryMode;

/// Opaque identifier for a stroke.
///
/// Stored designs carry ids minted by whatever host captured them, such as
/// `stroke_1700000000000_k3j9x2abc`, so any string is accepted. Strokes
/// finished by the recorder get a UUID v4.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrokeId(String);

impl StrokeId {
    /// Fresh random id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StrokeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for StrokeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for StrokeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Brush used to draw a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrushType {
    /// Plain line at the chosen width.
    #[default]
    Thin,
    /// Line at twice the chosen width.
    Bold,
    /// Dashed line.
    Dotted,
    /// Decorative brush; drawn as a plain line.
    Floral,
}

impl BrushType {
    /// Effective line width for a stroke drawn at `width`.
    #[must_use]
    pub fn line_width(self, width: f64) -> f64 {
        match self {
            Self::Bold => width * BOLD_WIDTH_FACTOR,
            Self::Thin | Self::Dotted | Self::Floral => width,
        }
    }

    /// Dash pattern (on, off) in pixels, or `None` for a solid line.
    #[must_use]
    pub fn dash_pattern(self) -> Option<[f64; 2]> {
        match self {
            Self::Dotted => Some(DOTTED_DASH_PX),
            Self::Thin | Self::Bold | Self::Floral => None,
        }
    }
}

/// A completed stroke as captured from the pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    pub id: StrokeId,
    /// Raw pointer samples in capture order.
    pub points: Vec<Point>,
    /// CSS color string.
    pub color: String,
    pub brush_type: BrushType,
    /// Brush width in pixels, before [`BrushType::line_width`] is applied.
    pub width: f64,
    /// Milliseconds since the Unix epoch when the stroke was finished.
    pub timestamp: i64,
}

impl Stroke {
    /// Polylines for every symmetric copy of this stroke.
    ///
    /// # Errors
    ///
    /// Returns [`SymmetryError::InvalidBounds`] for degenerate bounds.
    pub fn symmetric_paths(&self, mode: SymmetryMode, bounds: CanvasBounds) -> Result<Vec<Vec<Point>>, SymmetryError> {
        symmetric_paths(&self.points, mode, bounds)
    }
}

/// A named drawing: the strokes and the mode they are rendered with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    #[serde(default)]
    pub name: String,
    pub symmetry_mode: SymmetryMode,
    #[serde(default)]
    pub strokes: Vec<Stroke>,
}

/// Regroup per-point orbits into one polyline per symmetric copy.
///
/// Path `i` collects the `i`-th orbit member of every point, skipping points
/// whose orbit was truncated at the canvas edge. The number of candidate paths
/// is the orbit length of the first point. Paths with fewer than two points
/// are omitted since there is nothing to draw, so a stroke of fewer than two
/// points yields no paths.
///
/// Truncated orbits shift later members down by one index, so a copy can pick
/// up a neighbour's point near the edges. Renderers have always tolerated
/// this; it is kept so replayed designs look the same.
///
/// # Errors
///
/// Returns [`SymmetryError::InvalidBounds`] for degenerate bounds.
pub fn symmetric_paths(
    points: &[Point],
    mode: SymmetryMode,
    bounds: CanvasBounds,
) -> Result<Vec<Vec<Point>>, SymmetryError> {
    bounds.validate()?;
    if points.len() < 2 {
        return Ok(Vec::new());
    }

    let mut orbits = Vec::with_capacity(points.len());
    for &point in points {
        let mut orbit = Vec::with_capacity(mode.nominal_count());
        expand_into(point, mode, bounds, &mut orbit)?;
        orbits.push(orbit);
    }

    let copies = orbits.first().map_or(0, Vec::len);
    let paths = (0..copies)
        .map(|i| orbits.iter().filter_map(|orbit| orbit.get(i).copied()).collect::<Vec<_>>())
        .filter(|path| path.len() > 1)
        .collect();
    Ok(paths)
}
