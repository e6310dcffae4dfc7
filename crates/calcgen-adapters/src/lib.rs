//! Infrastructure adapters for calcgen.
//!
//! This crate implements the ports defined in `calcgen-core::application::ports`.
//! It holds the fragment catalogs, the per-style script renderers, and all
//! I/O operations.

pub mod catalog;
pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use catalog::{ConsoleCatalog, DesktopCatalog};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::{ConsoleRenderer, DesktopRenderer};

use calcgen_core::application::RenderStrategy;
use calcgen_core::domain::UiStyle;

/// The standard strategy set: console and desktop, one per UI style.
pub fn default_strategies() -> Vec<RenderStrategy> {
    vec![
        RenderStrategy::new(
            UiStyle::Cli,
            Box::new(ConsoleCatalog),
            Box::new(ConsoleRenderer),
        ),
        RenderStrategy::new(
            UiStyle::Gui,
            Box::new(DesktopCatalog),
            Box::new(DesktopRenderer),
        ),
    ]
}
