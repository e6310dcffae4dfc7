//! Main-section renderers, one per UI style.
//!
//! A renderer turns a resolved blueprint into the main class of the
//! generated script plus its entry-point stanza. Catalog fragments cover
//! the standalone functions; renderers cover the parts with structural
//! conditionals (REPL dispatch, widget layout).

mod console;
mod desktop;
pub mod layout;

pub use console::ConsoleRenderer;
pub use desktop::DesktopRenderer;
