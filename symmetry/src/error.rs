#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by engine operations and mode parsing.
///
/// Every variant indicates a caller bug rather than a transient condition;
/// none of them are worth retrying.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SymmetryError {
    /// The mode name is not one of the known symmetry modes.
    #[error("invalid symmetry mode: {0:?}")]
    InvalidMode(String),
    /// Width or height is non-finite or not strictly positive.
    #[error("invalid canvas bounds: {width}x{height}")]
    InvalidBounds { width: f64, height: f64 },
    /// Grid spacing is non-finite or not strictly positive.
    #[error("invalid grid spacing: {0}")]
    InvalidGridSpacing(f64),
}

impl SymmetryError {
    /// Grepable error code for logs and the wasm boundary.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidMode(_) => "E_INVALID_MODE",
            Self::InvalidBounds { .. } => "E_INVALID_BOUNDS",
            Self::InvalidGridSpacing(_) => "E_INVALID_GRID_SPACING",
        }
    }
}
