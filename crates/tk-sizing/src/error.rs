//! Sizing errors.

use thiserror::Error;
use tk_core::TkError;

/// Result type for sizing operations.
pub type SizingResult<T> = Result<T, SizingError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SizingError {
    /// Request field outside its admissible range. No partial result is produced.
    #[error("Invalid input: {field} = {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error(transparent)]
    Core(#[from] TkError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SizingError::InvalidInput {
            field: "production_rate_tpd",
            value: 0.0,
            reason: "must be positive",
        };
        let msg = err.to_string();
        assert!(msg.contains("production_rate_tpd"));
        assert!(msg.contains("must be positive"));
    }

    #[test]
    fn core_error_passes_through() {
        let err: SizingError = TkError::NonFinite {
            what: "diameter",
            value: f64::NAN,
        }
        .into();
        assert!(err.to_string().contains("Non-finite"));
    }
}
