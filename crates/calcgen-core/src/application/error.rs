//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::UiStyle;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No render strategy registered for the requested UI style.
    #[error("no render strategy configured for {style} calculators")]
    StrategyNotConfigured { style: UiStyle },

    /// Output directory creation failed.
    #[error("could not create directory {path}: {reason}")]
    DirectoryCreation { path: PathBuf, reason: String },

    /// A file write or permission change failed.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StrategyNotConfigured { style } => vec![
                format!("No renderer is wired up for '{style}' output"),
                "This is likely a configuration error in the host application".into(),
            ],
            Self::DirectoryCreation { path, .. } => vec![
                format!("Failed to create: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StrategyNotConfigured { .. } => ErrorCategory::Configuration,
            Self::DirectoryCreation { .. } | Self::Filesystem { .. } => ErrorCategory::Internal,
        }
    }
}
