use symmetry::SymmetryError;

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Symmetry(#[from] SymmetryError),
    #[error("failed to read design: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid design JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl CliError {
    /// Grepable code logged alongside the failure.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(err) => err.error_code(),
            Self::Symmetry(err) => err.error_code(),
            Self::Io(_) => "E_IO",
            Self::InvalidJson(_) => "E_INVALID_JSON",
        }
    }
}
