use thiserror::Error;

#[derive(Error, Debug)]
pub enum FarmBrainError {
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FarmBrainError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        FarmBrainError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FarmBrainError>;

/// Reject non-finite values and values outside `[min, max]`.
pub(crate) fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(FarmBrainError::validation(field, "must be a finite number"));
    }
    if value < min || value > max {
        let reason = if max.is_infinite() {
            format!("must be at least {}, got {}", min, value)
        } else {
            format!("must be between {} and {}, got {}", min, max, value)
        };
        return Err(FarmBrainError::validation(field, reason));
    }
    Ok(value)
}
