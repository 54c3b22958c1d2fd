//! `wasm-bindgen` exports for the browser host.
//!
//! The exported functions are thin: they parse the mode name, call the engine,
//! and hand the typed result to `serde-wasm-bindgen`, which builds plain JS
//! objects directly. The builders (`expand_orbit`, `mode_guide_lines`,
//! `canvas_grid_lines`, `new_recorder`) are ordinary Rust returning typed values
//! so they can be tested natively; only the `#[wasm_bindgen]` wrappers touch
//! `JsValue`.
//!
//! [`WasmStrokeRecorder`] (exported to JS as `StrokeRecorder`) wraps
//! [`StrokeRecorder`] so the host can feed pointer events straight into the
//! crate and get live previews and finished strokes back.
//!
//! Errors cross the boundary as strings of the form `"E_CODE: message"`.

#[cfg(test)]
#[path = "wasm_test.rs"]
mod wasm_test;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::engine::{expand, grid_lines, guide_lines};
use crate::error::SymmetryError;
use crate::geom::{CanvasBounds, GuideLine, Point};
use crate::mode::SymmetryMode;
use crate::recorder::{BrushSettings, StrokeRecorder};

/// Failure inside a binding call.
#[derive(Debug, thiserror::Error)]
pub enum BindingError {
    #[error(transparent)]
    Symmetry(#[from] SymmetryError),
    #[error("failed to convert value: {0}")]
    Convert(#[from] serde_wasm_bindgen::Error),
}

impl BindingError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Symmetry(err) => err.error_code(),
            Self::Convert(_) => "E_CONVERT",
        }
    }
}

// =============================================================
// Builders
// =============================================================

/// Orbit of `(x, y)` under the named mode.
///
/// # Errors
///
/// Returns [`BindingError::Symmetry`] for an unknown mode name or degenerate
/// bounds.
pub fn expand_orbit(
    x: f64,
    y: f64,
    pressure: Option<f64>,
    mode: &str,
    width: f64,
    height: f64,
) -> Result<Vec<Point>, BindingError> {
    let mode: SymmetryMode = mode.parse()?;
    let bounds = CanvasBounds::new(width, height)?;
    Ok(expand(Point { x, y, pressure }, mode, bounds)?)
}

/// Guide lines for the named mode.
///
/// # Errors
///
/// Returns [`BindingError::Symmetry`] for an unknown mode name or degenerate
/// bounds.
pub fn mode_guide_lines(mode: &str, width: f64, height: f64) -> Result<Vec<GuideLine>, BindingError> {
    let mode: SymmetryMode = mode.parse()?;
    Ok(guide_lines(mode, CanvasBounds::new(width, height)?)?)
}

/// Background grid lines.
///
/// # Errors
///
/// Returns [`BindingError::Symmetry`] for degenerate bounds or spacing.
pub fn canvas_grid_lines(width: f64, height: f64, spacing: f64) -> Result<Vec<GuideLine>, BindingError> {
    Ok(grid_lines(CanvasBounds::new(width, height)?, spacing)?)
}

/// Idle recorder for the named mode and canvas size.
///
/// # Errors
///
/// Returns [`BindingError::Symmetry`] for an unknown mode name or degenerate
/// bounds.
pub fn new_recorder(mode: &str, width: f64, height: f64) -> Result<StrokeRecorder, BindingError> {
    let mode: SymmetryMode = mode.parse()?;
    Ok(StrokeRecorder::new(mode, CanvasBounds::new(width, height)?)?)
}

fn to_js_error(err: impl Into<BindingError>) -> JsValue {
    let err = err.into();
    JsValue::from_str(&format!("{}: {err}", err.error_code()))
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(to_js_error)
}

// =============================================================
// Free functions
// =============================================================

/// Expand one pointer sample into its symmetric orbit.
///
/// # Errors
///
/// Rejects with an `"E_CODE: message"` string.
#[wasm_bindgen(js_name = expandPoint)]
pub fn expand_point(
    x: f64,
    y: f64,
    pressure: Option<f64>,
    mode: &str,
    width: f64,
    height: f64,
) -> Result<JsValue, JsValue> {
    to_js(&expand_orbit(x, y, pressure, mode, width, height).map_err(to_js_error)?)
}

/// Guide lines for the active mode.
///
/// # Errors
///
/// Rejects with an `"E_CODE: message"` string.
#[wasm_bindgen(js_name = guideLines)]
pub fn guide_lines_js(mode: &str, width: f64, height: f64) -> Result<JsValue, JsValue> {
    to_js(&mode_guide_lines(mode, width, height).map_err(to_js_error)?)
}

/// Background grid lines.
///
/// # Errors
///
/// Rejects with an `"E_CODE: message"` string.
#[wasm_bindgen(js_name = gridLines)]
pub fn grid_lines_js(width: f64, height: f64, spacing: f64) -> Result<JsValue, JsValue> {
    to_js(&canvas_grid_lines(width, height, spacing).map_err(to_js_error)?)
}

/// Names of every supported mode, in menu order.
#[wasm_bindgen(js_name = symmetryModes)]
#[must_use]
pub fn symmetry_modes() -> js_sys::Array {
    SymmetryMode::ALL.iter().map(|mode| JsValue::from_str(mode.as_str())).collect()
}

// =============================================================
// Recorder
// =============================================================

/// Pointer recorder handle owned by the browser host.
#[wasm_bindgen(js_name = StrokeRecorder)]
pub struct WasmStrokeRecorder {
    inner: StrokeRecorder,
}

#[wasm_bindgen(js_class = StrokeRecorder)]
impl WasmStrokeRecorder {
    /// # Errors
    ///
    /// Rejects with an `"E_CODE: message"` string for an unknown mode or
    /// degenerate bounds.
    #[wasm_bindgen(constructor)]
    pub fn new(mode: &str, width: f64, height: f64) -> Result<WasmStrokeRecorder, JsValue> {
        Ok(Self { inner: new_recorder(mode, width, height).map_err(to_js_error)? })
    }

    /// # Errors
    ///
    /// Rejects with `E_INVALID_MODE`; the old mode is kept.
    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&mut self, mode: &str) -> Result<(), JsValue> {
        let mode: SymmetryMode = mode.parse().map_err(to_js_error)?;
        self.inner.set_mode(mode);
        Ok(())
    }

    /// # Errors
    ///
    /// Rejects with `E_INVALID_BOUNDS`; the old bounds are kept.
    #[wasm_bindgen(js_name = setBounds)]
    pub fn set_bounds(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.inner.set_bounds(CanvasBounds { width, height }).map_err(to_js_error)
    }

    /// Replace the brush from a `{ color, brushType, width }` object. Missing
    /// fields take their defaults.
    ///
    /// # Errors
    ///
    /// Rejects with `E_CONVERT` when the object does not decode.
    #[wasm_bindgen(js_name = setBrush)]
    pub fn set_brush(&mut self, brush: JsValue) -> Result<(), JsValue> {
        let brush: BrushSettings = serde_wasm_bindgen::from_value(brush).map_err(to_js_error)?;
        self.inner.set_brush(brush);
        Ok(())
    }

    #[wasm_bindgen(js_name = isRecording)]
    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.inner.is_recording()
    }

    /// Start a stroke; resolves to the preview orbit.
    ///
    /// # Errors
    ///
    /// Rejects with an `"E_CODE: message"` string.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f64, y: f64, pressure: Option<f64>) -> Result<JsValue, JsValue> {
        to_js(self.inner.pointer_down(Point { x, y, pressure }).map_err(to_js_error)?)
    }

    /// Extend the stroke; resolves to the preview orbit, empty when idle.
    ///
    /// # Errors
    ///
    /// Rejects with an `"E_CODE: message"` string.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64, pressure: Option<f64>) -> Result<JsValue, JsValue> {
        to_js(self.inner.pointer_move(Point { x, y, pressure }).map_err(to_js_error)?)
    }

    /// Finish the stroke; resolves to the stroke object, or `undefined` when
    /// idle. `timestamp` is milliseconds since the epoch as a `BigInt`.
    ///
    /// # Errors
    ///
    /// Rejects with `E_CONVERT` if the stroke cannot be encoded.
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, timestamp: i64) -> Result<JsValue, JsValue> {
        to_js(&self.inner.pointer_up(timestamp))
    }

    pub fn cancel(&mut self) {
        self.inner.cancel();
    }

    /// Symmetric polylines of the stroke in progress.
    ///
    /// # Errors
    ///
    /// Rejects with an `"E_CODE: message"` string.
    #[wasm_bindgen(js_name = previewPaths)]
    pub fn preview_paths(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.preview_paths().map_err(to_js_error)?)
    }
}
