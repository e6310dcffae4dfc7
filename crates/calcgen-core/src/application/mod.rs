//! Application layer for calcgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ComposeService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All composition rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ComposeService, RenderStrategy};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, FragmentCatalog, MainRenderer};

pub use error::ApplicationError;
