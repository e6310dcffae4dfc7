//! Import-line registry for generated programs.
//!
//! ONE static table declares every import line the generator can emit, in
//! its final category order: standard utilities, history support, numeric,
//! data, scientific, symbolic, visualization/complex. Building the import
//! segment walks the table once and deduplicates while preserving first
//! occurrence, so a line appears at most once however many flags want it.
//!
//! Post-resolution, library gates are enough even for feature-driven
//! imports: a blueprint that enabled `plotting` reaches plotly through the
//! entailed `Library::Plotly`, identically to one that asked for the
//! library by hand.

use crate::domain::blueprint::Resolved;
use crate::domain::value_objects::{Feature, Library, UiStyle};

/// Grouping bucket, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ImportCategory {
    Standard,
    History,
    Numeric,
    Data,
    Scientific,
    Symbolic,
    Visualization,
}

/// When an import line is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportGate {
    /// Every generated program.
    Always,
    /// GUI programs only (the windowing toolkit, and math unconditionally).
    GuiOnly,
    Library(Library),
    Feature(Feature),
}

impl ImportGate {
    fn holds(&self, blueprint: &Resolved) -> bool {
        match *self {
            ImportGate::Always => true,
            ImportGate::GuiOnly => blueprint.ui().style == UiStyle::Gui,
            ImportGate::Library(library) => blueprint.libraries().contains(library),
            ImportGate::Feature(feature) => blueprint.features().contains(feature),
        }
    }
}

/// One row of the import table.
#[derive(Debug, Clone, Copy)]
pub struct ImportDef {
    pub line: &'static str,
    pub category: ImportCategory,
    pub gate: ImportGate,
}

/// The complete import table. Row order is emission order.
pub static IMPORTS: &[ImportDef] = &[
    // ── Standard utilities ───────────────────────────────────────────────
    ImportDef {
        line: "import tkinter as tk",
        category: ImportCategory::Standard,
        gate: ImportGate::GuiOnly,
    },
    ImportDef {
        line: "from tkinter import ttk, messagebox, simpledialog",
        category: ImportCategory::Standard,
        gate: ImportGate::GuiOnly,
    },
    ImportDef {
        line: "import sys",
        category: ImportCategory::Standard,
        gate: ImportGate::Always,
    },
    ImportDef {
        line: "import os",
        category: ImportCategory::Standard,
        gate: ImportGate::Always,
    },
    // GUI programs always need math for the evaluation whitelist; CLI
    // programs pull it in through the library selection. Dedup collapses
    // the overlap.
    ImportDef {
        line: "import math",
        category: ImportCategory::Standard,
        gate: ImportGate::GuiOnly,
    },
    ImportDef {
        line: "import math",
        category: ImportCategory::Standard,
        gate: ImportGate::Library(Library::Math),
    },
    // ── History support ──────────────────────────────────────────────────
    ImportDef {
        line: "import json",
        category: ImportCategory::History,
        gate: ImportGate::Feature(Feature::History),
    },
    ImportDef {
        line: "from datetime import datetime",
        category: ImportCategory::History,
        gate: ImportGate::Feature(Feature::History),
    },
    // ── Numeric ──────────────────────────────────────────────────────────
    ImportDef {
        line: "import numpy as np",
        category: ImportCategory::Numeric,
        gate: ImportGate::Library(Library::Numpy),
    },
    // ── Data ─────────────────────────────────────────────────────────────
    ImportDef {
        line: "import pandas as pd",
        category: ImportCategory::Data,
        gate: ImportGate::Library(Library::Pandas),
    },
    // ── Scientific ───────────────────────────────────────────────────────
    ImportDef {
        line: "import scipy as sp",
        category: ImportCategory::Scientific,
        gate: ImportGate::Library(Library::Scipy),
    },
    ImportDef {
        line: "from scipy import stats, optimize, integrate",
        category: ImportCategory::Scientific,
        gate: ImportGate::Library(Library::Scipy),
    },
    // ── Symbolic ─────────────────────────────────────────────────────────
    ImportDef {
        line: "import sympy as sym",
        category: ImportCategory::Symbolic,
        gate: ImportGate::Library(Library::Sympy),
    },
    ImportDef {
        line: "from sympy import symbols, solve, diff, integrate as sym_integrate",
        category: ImportCategory::Symbolic,
        gate: ImportGate::Library(Library::Sympy),
    },
    // ── Visualization / complex ──────────────────────────────────────────
    ImportDef {
        line: "import plotly.graph_objects as go",
        category: ImportCategory::Visualization,
        gate: ImportGate::Library(Library::Plotly),
    },
    ImportDef {
        line: "import plotly.express as px",
        category: ImportCategory::Visualization,
        gate: ImportGate::Library(Library::Plotly),
    },
    ImportDef {
        line: "import cmath",
        category: ImportCategory::Visualization,
        gate: ImportGate::Feature(Feature::ComplexNumbers),
    },
];

/// Build the import segment for a resolved blueprint.
///
/// Walks [`IMPORTS`] in order, keeping lines whose gate holds and dropping
/// later duplicates.
pub fn import_lines(blueprint: &Resolved) -> Vec<&'static str> {
    let mut lines = Vec::new();
    for def in IMPORTS {
        if def.gate.holds(blueprint) && !lines.contains(&def.line) {
            lines.push(def.line);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::blueprint::Blueprint;
    use crate::domain::value_objects::Theme;

    #[test]
    fn registry_categories_are_ordered() {
        let mut last = ImportCategory::Standard;
        for def in IMPORTS {
            assert!(
                def.category >= last,
                "import '{}' is out of category order",
                def.line
            );
            last = def.category;
        }
    }

    #[test]
    fn basic_cli_blueprint_gets_the_minimal_preamble() {
        let blueprint = Blueprint::basic().resolve();
        assert_eq!(
            import_lines(&blueprint),
            vec!["import sys", "import os", "import math"]
        );
    }

    #[test]
    fn math_appears_once_for_gui_with_math_library() {
        let blueprint = Blueprint::basic()
            .with_style(crate::domain::value_objects::UiStyle::Gui)
            .resolve();
        let lines = import_lines(&blueprint);
        assert_eq!(
            lines.iter().filter(|l| **l == "import math").count(),
            1,
            "math must be deduplicated"
        );
        assert!(lines.contains(&"import tkinter as tk"));
    }

    #[test]
    fn plotting_feature_and_plotly_library_produce_identical_imports() {
        let via_feature = Blueprint::basic()
            .with_feature(Feature::Plotting)
            .resolve();
        let via_library = Blueprint::basic()
            .with_library(Library::Plotly)
            .resolve();
        assert_eq!(import_lines(&via_feature), import_lines(&via_library));
        assert!(
            import_lines(&via_feature).contains(&"import plotly.graph_objects as go")
        );
    }

    #[test]
    fn scientific_blueprint_imports_every_selected_stack() {
        let blueprint = Blueprint::scientific().resolve();
        let lines = import_lines(&blueprint);
        for expected in [
            "import math",
            "import json",
            "import numpy as np",
            "import scipy as sp",
            "import sympy as sym",
            "import cmath",
        ] {
            assert!(lines.contains(&expected), "missing {expected}");
        }
        assert!(!lines.contains(&"import pandas as pd"));
    }

    #[test]
    fn theme_never_affects_imports() {
        let light = Blueprint::scientific().with_theme(Theme::Light).resolve();
        let dark = Blueprint::scientific().with_theme(Theme::Dark).resolve();
        assert_eq!(import_lines(&light), import_lines(&dark));
    }
}
