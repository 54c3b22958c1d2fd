//! Stroke recorder: the pointer gesture state machine that captures strokes.
//!
//! The host feeds raw pointer events in canvas pixel space. Between
//! pointer-down and pointer-up the recorder accumulates samples into the
//! in-progress stroke; every sample is also run through the engine so the host
//! can paint a live preview of its symmetric orbit. Pointer-up turns the
//! samples into a [`Stroke`] stamped with the active brush.

#[cfg(test)]
#[path = "recorder_test.rs"]
mod recorder_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BRUSH_COLOR, DEFAULT_BRUSH_WIDTH, MAX_ORBIT_LEN};
use crate::engine::expand_into;
use crate::error::SymmetryError;
use crate::geom::{CanvasBounds, Point};
use crate::mode::SymmetryMode;
use crate::stroke::{BrushType, Stroke, StrokeId, symmetric_paths};

/// Brush applied to strokes as they are finished.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrushSettings {
    /// CSS color string.
    pub color: String,
    pub brush_type: BrushType,
    /// Width in pixels.
    pub width: f64,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self { color: DEFAULT_BRUSH_COLOR.to_owned(), brush_type: BrushType::default(), width: DEFAULT_BRUSH_WIDTH }
    }
}

/// Gesture state between pointer events.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RecorderState {
    /// No stroke in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The pointer is down and samples are being captured.
    Recording {
        /// Samples captured so far, in order.
        points: Vec<Point>,
    },
}

/// Captures pointer samples into strokes under a fixed mode and canvas.
#[derive(Debug, Clone)]
pub struct StrokeRecorder {
    mode: SymmetryMode,
    bounds: CanvasBounds,
    brush: BrushSettings,
    state: RecorderState,
    /// Reused orbit buffer for per-sample previews.
    orbit: Vec<Point>,
}

impl StrokeRecorder {
    /// Create an idle recorder with the default brush.
    ///
    /// # Errors
    ///
    /// Returns [`SymmetryError::InvalidBounds`] for degenerate bounds.
    pub fn new(mode: SymmetryMode, bounds: CanvasBounds) -> Result<Self, SymmetryError> {
        bounds.validate()?;
        Ok(Self {
            mode,
            bounds,
            brush: BrushSettings::default(),
            state: RecorderState::Idle,
            orbit: Vec::with_capacity(MAX_ORBIT_LEN),
        })
    }

    // --- Settings ---

    pub fn set_mode(&mut self, mode: SymmetryMode) {
        self.mode = mode;
    }

    /// Resize the canvas the recorder expands against.
    ///
    /// # Errors
    ///
    /// Returns [`SymmetryError::InvalidBounds`] and keeps the old bounds if the
    /// new ones are degenerate.
    pub fn set_bounds(&mut self, bounds: CanvasBounds) -> Result<(), SymmetryError> {
        bounds.validate()?;
        self.bounds = bounds;
        Ok(())
    }

    pub fn set_brush(&mut self, brush: BrushSettings) {
        self.brush = brush;
    }

    // --- Queries ---

    #[must_use]
    pub fn mode(&self) -> SymmetryMode {
        self.mode
    }

    #[must_use]
    pub fn bounds(&self) -> CanvasBounds {
        self.bounds
    }

    #[must_use]
    pub fn brush(&self) -> &BrushSettings {
        &self.brush
    }

    #[must_use]
    pub fn state(&self) -> &RecorderState {
        &self.state
    }

    #[must_use]
    pub fn is_recording(&self) -> bool {
        matches!(self.state, RecorderState::Recording { .. })
    }

    /// Samples of the in-progress stroke; empty when idle.
    #[must_use]
    pub fn current_points(&self) -> &[Point] {
        match &self.state {
            RecorderState::Idle => &[],
            RecorderState::Recording { points } => points,
        }
    }

    // --- Pointer events ---

    /// Start a new stroke at `point`, discarding any stroke in progress.
    ///
    /// Returns the orbit of `point` for live preview.
    ///
    /// # Errors
    ///
    /// Propagates engine errors; unreachable with validated bounds.
    pub fn pointer_down(&mut self, point: Point) -> Result<&[Point], SymmetryError> {
        if let RecorderState::Recording { points } = &self.state {
            tracing::debug!(discarded = points.len(), "stroke restarted before pointer-up");
        }
        tracing::debug!(mode = %self.mode, x = point.x, y = point.y, "stroke started");
        self.state = RecorderState::Recording { points: vec![point] };
        self.preview(point)
    }

    /// Append `point` to the stroke in progress.
    ///
    /// Returns the orbit of `point` for live preview, or an empty slice when
    /// no stroke is in progress.
    ///
    /// # Errors
    ///
    /// Propagates engine errors; unreachable with validated bounds.
    pub fn pointer_move(&mut self, point: Point) -> Result<&[Point], SymmetryError> {
        let RecorderState::Recording { points } = &mut self.state else {
            self.orbit.clear();
            return Ok(&self.orbit);
        };
        points.push(point);
        tracing::trace!(samples = points.len(), "stroke extended");
        self.preview(point)
    }

    /// Finish the stroke in progress, stamping it with the current brush.
    ///
    /// Returns `None` when no stroke was in progress.
    pub fn pointer_up(&mut self, timestamp: i64) -> Option<Stroke> {
        let RecorderState::Recording { points } = std::mem::take(&mut self.state) else {
            return None;
        };
        let stroke = Stroke {
            id: StrokeId::generate(),
            points,
            color: self.brush.color.clone(),
            brush_type: self.brush.brush_type,
            width: self.brush.width,
            timestamp,
        };
        tracing::debug!(id = %stroke.id, samples = stroke.points.len(), "stroke finished");
        Some(stroke)
    }

    /// Drop the stroke in progress without emitting it.
    pub fn cancel(&mut self) {
        self.state = RecorderState::Idle;
    }

    /// Symmetric polylines of the in-progress stroke for preview rendering.
    ///
    /// # Errors
    ///
    /// Propagates engine errors; unreachable with validated bounds.
    pub fn preview_paths(&self) -> Result<Vec<Vec<Point>>, SymmetryError> {
        symmetric_paths(self.current_points(), self.mode, self.bounds)
    }

    fn preview(&mut self, point: Point) -> Result<&[Point], SymmetryError> {
        expand_into(point, self.mode, self.bounds, &mut self.orbit)?;
        Ok(&self.orbit)
    }
}
