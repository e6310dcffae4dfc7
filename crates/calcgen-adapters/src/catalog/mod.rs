//! Fragment catalogs.
//!
//! Each UI style carries its own fixed registry of pre-authored program
//! fragments. Selection is a single registry walk against the resolved
//! blueprint; registry order is emission order.

mod console;
mod desktop;

pub use console::{CONSOLE_FRAGMENTS, ConsoleCatalog};
pub use desktop::{DESKTOP_FRAGMENTS, DesktopCatalog};
