//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `calcgen-adapters` crate provides implementations.

use crate::domain::{Fragment, MainSegment, Resolved};
use crate::error::CalcgenResult;
use std::path::Path;

/// Port for selecting the function and class fragments a blueprint needs.
///
/// Implemented by:
/// - `calcgen_adapters::catalog::ConsoleCatalog` (CLI calculators)
/// - `calcgen_adapters::catalog::DesktopCatalog` (GUI calculators)
///
/// Selection is a pure registry walk, so the port is infallible.
pub trait FragmentCatalog: Send + Sync {
    /// All fragments enabled for this blueprint, in emission order.
    fn fragments_for(&self, resolved: &Resolved) -> Vec<Fragment>;
}

/// Port for rendering the main section of a generated script.
///
/// Implemented by:
/// - `calcgen_adapters::renderer::ConsoleRenderer` (REPL main loop)
/// - `calcgen_adapters::renderer::DesktopRenderer` (windowed application)
///
/// Rendering is pure text assembly from an already-validated blueprint,
/// so the port is infallible.
pub trait MainRenderer: Send + Sync {
    /// Render the main body plus the entry-point stanza.
    fn render_main(&self, resolved: &Resolved) -> MainSegment;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `calcgen_adapters::filesystem::LocalFilesystem` (production)
/// - `calcgen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CalcgenResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> CalcgenResult<()>;

    /// Mark a file as executable.
    fn set_executable(&self, path: &Path) -> CalcgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
