//! Dependency manifest rendering (`requirements.txt`).
//!
//! Each installable library maps to a pinned minimum version. Bundled
//! libraries never appear; a GUI calculator gets a comment noting that the
//! toolkit ships with the interpreter. A blueprint with no third-party
//! libraries gets no manifest at all.

use super::blueprint::Resolved;
use super::value_objects::{Library, UiStyle};

/// A minimum-version pin for one installable library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinDef {
    pub library: Library,
    pub requirement: &'static str,
}

/// Pins in manifest emission order.
pub static PINS: &[PinDef] = &[
    PinDef {
        library: Library::Numpy,
        requirement: "numpy>=1.21.0",
    },
    PinDef {
        library: Library::Pandas,
        requirement: "pandas>=1.3.0",
    },
    PinDef {
        library: Library::Scipy,
        requirement: "scipy>=1.7.0",
    },
    PinDef {
        library: Library::Sympy,
        requirement: "sympy>=1.9.0",
    },
    PinDef {
        library: Library::Plotly,
        requirement: "plotly>=5.0.0",
    },
];

/// Comment emitted for GUI calculators; the toolkit needs no pip install.
pub const TOOLKIT_NOTE: &str = "# tkinter (included with Python)";

/// Render the manifest body, or `None` when nothing needs installing.
pub fn render(resolved: &Resolved) -> Option<String> {
    if !resolved.libraries().has_third_party() {
        return None;
    }

    let mut lines = Vec::new();
    for pin in PINS {
        if resolved.libraries().contains(pin.library) {
            lines.push(pin.requirement);
        }
    }
    if resolved.ui().style == UiStyle::Gui {
        lines.push(TOOLKIT_NOTE);
    }

    let mut body = lines.join("\n");
    body.push('\n');
    Some(body)
}
