//! Canvas configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use symmetry::{CanvasBounds, SymmetryError, SymmetryMode};

pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;
pub const DEFAULT_GRID_SPACING: f64 = 20.0;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A numeric variable is set but does not parse.
    #[error("config parse failed: {var}={value:?}")]
    Parse { var: &'static str, value: String },
    /// Mode name or canvas extents were rejected by the engine.
    #[error(transparent)]
    Symmetry(#[from] SymmetryError),
}

impl ConfigError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "E_CONFIG_PARSE",
            Self::Symmetry(err) => err.error_code(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KolamConfig {
    pub bounds: CanvasBounds,
    pub mode: SymmetryMode,
    pub grid_spacing: f64,
}

impl Default for KolamConfig {
    fn default() -> Self {
        Self {
            bounds: CanvasBounds { width: DEFAULT_CANVAS_WIDTH, height: DEFAULT_CANVAS_HEIGHT },
            mode: SymmetryMode::default(),
            grid_spacing: DEFAULT_GRID_SPACING,
        }
    }
}

impl KolamConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `KOLAM_CANVAS_WIDTH`: default 800
    /// - `KOLAM_CANVAS_HEIGHT`: default 600
    /// - `KOLAM_SYMMETRY_MODE`: default `radial-8`
    /// - `KOLAM_GRID_SPACING`: default 20
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let width = parse_f64(&lookup, "KOLAM_CANVAS_WIDTH", DEFAULT_CANVAS_WIDTH)?;
        let height = parse_f64(&lookup, "KOLAM_CANVAS_HEIGHT", DEFAULT_CANVAS_HEIGHT)?;
        let grid_spacing = parse_f64(&lookup, "KOLAM_GRID_SPACING", DEFAULT_GRID_SPACING)?;
        let mode = match lookup("KOLAM_SYMMETRY_MODE") {
            Some(raw) => raw.trim().parse()?,
            None => SymmetryMode::default(),
        };

        Ok(Self { bounds: CanvasBounds::new(width, height)?, mode, grid_spacing })
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(
        self,
        width: Option<f64>,
        height: Option<f64>,
        mode: Option<SymmetryMode>,
    ) -> Result<Self, ConfigError> {
        let bounds = CanvasBounds::new(width.unwrap_or(self.bounds.width), height.unwrap_or(self.bounds.height))?;
        Ok(Self { bounds, mode: mode.unwrap_or(self.mode), ..self })
    }
}

fn parse_f64(lookup: &impl Fn(&str) -> Option<String>, var: &'static str, default: f64) -> Result<f64, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<f64>().map_err(|_| ConfigError::Parse { var, value: raw }),
    }
}
