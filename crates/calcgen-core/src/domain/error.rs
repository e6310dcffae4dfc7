//! Domain errors: invalid blueprints and unrecognized names.
//!
//! All errors are:
//! - Cloneable (callers may retry with a corrected blueprint)
//! - Categorizable (for CLI display)
//! - Actionable (provides suggestions)

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("required field is empty: {field}")]
    EmptyField { field: &'static str },

    #[error("precision {value} is out of range (must be between 1 and 20)")]
    PrecisionOutOfRange { value: u8 },

    // ========================================================================
    // Unrecognized Names (front-end parsing)
    // ========================================================================
    #[error("unknown feature: {name}")]
    UnknownFeature { name: String },

    #[error("unknown library: {name}")]
    UnknownLibrary { name: String },

    #[error("unknown calculator kind: {name}")]
    UnknownKind { name: String },

    #[error("unknown UI style: {name}")]
    UnknownStyle { name: String },

    #[error("unknown theme: {name}")]
    UnknownTheme { name: String },

    #[error("unknown angle unit: {name}")]
    UnknownAngleUnit { name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyField { field } => vec![
                format!("Provide a non-empty value for '{field}'"),
                "Presets fill every field; start from one and override".into(),
            ],
            Self::PrecisionOutOfRange { .. } => vec![
                "Choose a precision between 1 and 20 decimal places".into(),
                "The default precision is 10".into(),
            ],
            Self::UnknownFeature { .. } => vec![
                "Try: calcgen list features".into(),
                "Short aliases work too (trig, stats, linalg, ...)".into(),
            ],
            Self::UnknownLibrary { .. } => vec![
                "Try: calcgen list libraries".into(),
                "Valid libraries: math, numpy, pandas, scipy, sympy, plotly".into(),
            ],
            Self::UnknownKind { .. } => {
                vec!["Valid calculator kinds: basic, scientific".into()]
            }
            Self::UnknownStyle { .. } => vec!["Valid UI styles: cli, gui".into()],
            Self::UnknownTheme { .. } => {
                vec!["Valid themes: light, dark, colorful".into()]
            }
            Self::UnknownAngleUnit { .. } => {
                vec!["Valid angle units: degrees, radians".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        // Every domain error is a problem with user-provided configuration.
        ErrorCategory::Validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_offender() {
        let err = DomainError::UnknownFeature {
            name: "quantum".into(),
        };
        assert!(err.to_string().contains("quantum"));

        let err = DomainError::EmptyField {
            field: "project_name",
        };
        assert!(err.to_string().contains("project_name"));
    }

    #[test]
    fn precision_error_carries_the_value() {
        let err = DomainError::PrecisionOutOfRange { value: 21 };
        assert!(err.to_string().contains("21"));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn all_errors_have_suggestions() {
        let errors = [
            DomainError::EmptyField { field: "output" },
            DomainError::PrecisionOutOfRange { value: 0 },
            DomainError::UnknownFeature { name: "x".into() },
            DomainError::UnknownLibrary { name: "x".into() },
            DomainError::UnknownKind { name: "x".into() },
            DomainError::UnknownStyle { name: "x".into() },
            DomainError::UnknownTheme { name: "x".into() },
            DomainError::UnknownAngleUnit { name: "x".into() },
        ];
        for err in errors {
            assert!(!err.suggestions().is_empty());
        }
    }
}
