use thiserror::Error;

/// Errors produced while building a shipment for scoring.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl ScoreError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// The name of the offending input field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidInput { field, .. } => field,
        }
    }
}
