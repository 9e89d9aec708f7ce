use std::io;

use thiserror::Error;

/// Errores del renumerador y de los adaptadores CSV.
#[derive(Debug, Error)]
pub enum RenumberError {
    /// Fila inválida; `line` es la línea física del archivo (header = 1)
    #[error("line {line}: {reason}")]
    Validation { line: usize, reason: String },
    #[error("column '{0}' not found in input header")]
    MissingColumn(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl RenumberError {
    pub fn validation(line: usize, reason: impl Into<String>) -> Self {
        RenumberError::Validation {
            line,
            reason: reason.into(),
        }
    }
}
