//! Program fragments and the gates that select them.
//!
//! A fragment is an opaque block of pre-authored program text (a function or
//! class definition). Catalogs in `calcgen-adapters` declare fragments in
//! fixed registries; selection walks a registry once, keeping every entry
//! whose gates all hold against the resolved blueprint. There is no
//! fragment-not-found condition — an empty selection is a valid selection.

use crate::domain::blueprint::Resolved;
use crate::domain::value_objects::{Feature, Library};

/// An opaque, pre-authored block of generated-program text.
///
/// Bodies carry no trailing newline; the composer owns the delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub name: &'static str,
    pub body: &'static str,
}

/// A predicate over a resolved blueprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Feature(Feature),
    Library(Library),
}

impl Gate {
    pub fn holds(&self, blueprint: &Resolved) -> bool {
        match *self {
            Gate::Feature(feature) => blueprint.features().contains(feature),
            Gate::Library(library) => blueprint.libraries().contains(library),
        }
    }
}

/// One registry row: a fragment plus the gates that must all hold.
#[derive(Debug, Clone, Copy)]
pub struct FragmentDef {
    pub fragment: Fragment,
    pub gates: &'static [Gate],
}

impl FragmentDef {
    pub fn selected_by(&self, blueprint: &Resolved) -> bool {
        self.gates.iter().all(|gate| gate.holds(blueprint))
    }
}

/// Select fragments from a registry, preserving registry order.
pub fn select(registry: &[FragmentDef], blueprint: &Resolved) -> Vec<Fragment> {
    registry
        .iter()
        .filter(|def| def.selected_by(blueprint))
        .map(|def| def.fragment)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::blueprint::Blueprint;

    const FIXTURE: &[FragmentDef] = &[
        FragmentDef {
            fragment: Fragment {
                name: "always",
                body: "def always(): pass",
            },
            gates: &[Gate::Feature(Feature::BasicArithmetic)],
        },
        FragmentDef {
            fragment: Fragment {
                name: "stats",
                body: "def stats(): pass",
            },
            gates: &[
                Gate::Feature(Feature::Statistical),
                Gate::Library(Library::Numpy),
            ],
        },
    ];

    #[test]
    fn gates_must_all_hold() {
        let plain = Blueprint::basic().resolve();
        let selected = select(FIXTURE, &plain);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "always");

        let with_stats = Blueprint::basic()
            .with_feature(Feature::Statistical)
            .resolve();
        let selected = select(FIXTURE, &with_stats);
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn selection_preserves_registry_order() {
        let blueprint = Blueprint::basic()
            .with_feature(Feature::Statistical)
            .resolve();
        let names: Vec<&str> = select(FIXTURE, &blueprint)
            .iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["always", "stats"]);
    }

    #[test]
    fn empty_selection_is_valid() {
        let blueprint = Blueprint::basic()
            .without_library(Library::Math)
            .resolve();
        let registry: &[FragmentDef] = &[FragmentDef {
            fragment: Fragment {
                name: "trig",
                body: "",
            },
            gates: &[Gate::Feature(Feature::Trigonometric)],
        }];
        assert!(select(registry, &blueprint).is_empty());
    }
}
