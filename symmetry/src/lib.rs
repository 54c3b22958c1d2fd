//! Symmetry engine for the kolam drawing canvas.
//!
//! This crate is compiled both natively and to WebAssembly. Its core is a pair
//! of pure functions: [`expand`] turns one pointer coordinate into the full set
//! of mirrored or rotated coordinates that must be drawn together, and
//! [`guide_lines`] produces the reference axes for the active mode. The
//! remaining modules are thin callers of those two: a stroke model, a pointer
//! recorder, and the wasm bindings used by the browser host.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Orbit expansion, guide lines, and grid geometry |
//! | [`geom`] | `Point`, `CanvasBounds`, and `GuideLine` value types |
//! | [`mode`] | The closed set of symmetry modes and their names |
//! | [`stroke`] | Recorded strokes, brush styles, and per-stroke symmetric paths |
//! | [`recorder`] | Pointer gesture state machine that captures strokes |
//! | [`wasm`] | `wasm-bindgen` exports for the browser host, including a `StrokeRecorder` handle |
//! | [`error`] | [`SymmetryError`] and its stable error codes |
//! | [`consts`] | Shared numeric constants |

pub mod consts;
pub mod engine;
pub mod error;
pub mod geom;
pub mod mode;
pub mod recorder;
pub mod stroke;
pub mod wasm;

pub use engine::{SymmetryEngine, expand, expand_into, grid_dots, grid_lines, guide_lines};
pub use error::SymmetryError;
pub use geom::{CanvasBounds, GuideLine, Point};
pub use mode::{RadialSegments, SymmetryMode};
