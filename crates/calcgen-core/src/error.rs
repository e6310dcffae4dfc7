//! Unified error handling for the calcgen core.
//!
//! Wraps domain and application errors behind one type with error
//! categories and user-actionable suggestions for the CLI to display.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for calcgen core operations.
#[derive(Debug, Error)]
pub enum CalcgenError {
    /// Errors from the domain layer (invalid blueprints, unknown names).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (composition and persistence).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl CalcgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { .. } => vec![
                "Check your configuration file and environment".into(),
                "Run 'calcgen config show' to see the effective settings".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in calcgen".into(),
                "Please report it at: https://github.com/calcgen/calcgen/issues".into(),
            ],
        }
    }

    /// Error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type CalcgenResult<T> = Result<T, CalcgenError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> CalcgenResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> CalcgenResult<T> {
        self.map_err(|e| CalcgenError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}
