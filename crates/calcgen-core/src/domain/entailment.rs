//! Feature → library entailment registry.
//!
//! # Design
//!
//! ONE static table declares which libraries a feature drags in. Resolution
//! is a single pass over this table: features imply libraries, libraries
//! imply nothing, and no feature implies another feature — so the closure
//! is complete after one sweep and re-running it changes nothing.
//!
//! Resolution is strictly additive. A library the caller enabled by hand is
//! never switched off here, whatever the feature set looks like.
//!
//! # Adding New Entailments
//!
//! 1. Add an `EntailmentDef` row below
//! 2. `registry_is_coherent` (tests) will catch duplicate rows
//! 3. Done — resolution, listings, and docs all read this table

use crate::domain::selection::{FeatureSet, LibrarySet};
use crate::domain::value_objects::{Feature, Library};

/// One row of the entailment table.
#[derive(Debug, Clone, Copy)]
pub struct EntailmentDef {
    pub feature: Feature,
    pub implies: &'static [Library],
}

/// The complete entailment table.
///
/// Features absent from this table entail nothing; their effect on the
/// artifact (if any) comes from imports and fragment gates alone.
pub static ENTAILMENTS: &[EntailmentDef] = &[
    EntailmentDef {
        feature: Feature::Trigonometric,
        implies: &[Library::Math],
    },
    EntailmentDef {
        feature: Feature::Logarithmic,
        implies: &[Library::Math],
    },
    EntailmentDef {
        feature: Feature::Exponential,
        implies: &[Library::Math],
    },
    EntailmentDef {
        feature: Feature::Statistical,
        implies: &[Library::Numpy],
    },
    EntailmentDef {
        feature: Feature::LinearAlgebra,
        implies: &[Library::Numpy],
    },
    EntailmentDef {
        feature: Feature::MatrixOperations,
        implies: &[Library::Numpy],
    },
    EntailmentDef {
        feature: Feature::DataAnalysis,
        implies: &[Library::Numpy, Library::Pandas],
    },
    EntailmentDef {
        feature: Feature::Plotting,
        implies: &[Library::Plotly],
    },
    EntailmentDef {
        feature: Feature::Graphing,
        implies: &[Library::Plotly],
    },
    EntailmentDef {
        feature: Feature::EquationSolver,
        implies: &[Library::Sympy],
    },
    EntailmentDef {
        feature: Feature::Calculus,
        implies: &[Library::Sympy],
    },
];

/// Libraries entailed by a single feature (empty for features with no row).
pub fn implied_libraries(feature: Feature) -> &'static [Library] {
    ENTAILMENTS
        .iter()
        .find(|def| def.feature == feature)
        .map(|def| def.implies)
        .unwrap_or(&[])
}

/// Compute the library closure for a feature set.
///
/// Returns `explicit` plus everything the enabled features entail. Purely
/// additive and idempotent; the input sets are not modified.
pub fn closure(features: &FeatureSet, explicit: &LibrarySet) -> LibrarySet {
    let mut libraries = explicit.clone();
    for def in ENTAILMENTS {
        if features.contains(def.feature) {
            libraries.extend(def.implies.iter().copied());
        }
    }
    libraries
}
