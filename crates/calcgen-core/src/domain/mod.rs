//! Domain layer: calculator blueprints and the pure composition rules.
//!
//! Everything in this layer is deterministic and side-effect free. The
//! blueprint aggregate captures what the user asked for; the registries
//! (entailment, imports, manifest pins) capture the fixed rules; the
//! remaining modules define the values composition produces.

pub mod artifact;
pub mod blueprint;
pub mod entailment;
pub mod error;
pub mod fragment;
pub mod imports;
pub mod layout;
pub mod manifest;
pub mod selection;
pub mod value_objects;

pub use artifact::{Artifact, GenerationMeta, MainSegment, OutputFile};
pub use blueprint::{Blueprint, Resolved, UiOptions};
pub use entailment::{closure, implied_libraries};
pub use error::DomainError;
pub use fragment::{Fragment, FragmentDef, Gate};
pub use imports::import_lines;
pub use layout::{ButtonKey, LayoutPlan, Placement};
pub use selection::{FeatureSet, LibrarySet, Selection};
pub use value_objects::{AngleUnit, CalculatorKind, Feature, Library, Theme, UiStyle};
