//! The calculator blueprint: one immutable description of what to generate.
//!
//! # Design
//!
//! A `Blueprint` is a *proposed* configuration. Nothing downstream accepts
//! it directly: composition wants a [`Resolved`] value, produced by
//! [`Blueprint::resolve`], which proves the feature→library closure has been
//! taken. Resolution consumes the proposal and never mutates in place, so a
//! blueprint can't be half-resolved, and one resolved value feeds exactly
//! one composition run.
//!
//! Presets are explicit, named starting points. Front ends begin from
//! `Blueprint::basic()` or `Blueprint::scientific()` and merge the user's
//! selections on top with the `with_*` builders — merge order is
//! preset-then-overrides, so what the user asked for always wins.

use std::fmt;
use std::ops::Deref;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entailment;
use crate::domain::error::DomainError;
use crate::domain::selection::{FeatureSet, LibrarySet};
use crate::domain::value_objects::{AngleUnit, CalculatorKind, Feature, Library, Theme, UiStyle};

// ── UiOptions ────────────────────────────────────────────────────────────────

/// Presentation options for the generated calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiOptions {
    pub style: UiStyle,
    pub theme: Theme,
    /// Decimal places results are rounded to (validated range 1..=20).
    pub precision: u8,
    pub angle_unit: AngleUnit,
    pub show_help: bool,
    pub show_banner: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            style: UiStyle::Cli,
            theme: Theme::Light,
            precision: 10,
            angle_unit: AngleUnit::Degrees,
            show_help: true,
            show_banner: true,
        }
    }
}

// ── Blueprint ────────────────────────────────────────────────────────────────

/// A complete, immutable description of the calculator program to generate.
#[derive(Debug, Clone, PartialEq)]
pub struct Blueprint {
    kind: CalculatorKind,
    output_path: PathBuf,
    project_name: String,
    author: String,
    description: String,
    /// Whether the generated CLI calculator runs a read-eval loop.
    interactive: bool,
    libraries: LibrarySet,
    features: FeatureSet,
    ui: UiOptions,
}

impl Blueprint {
    /// The basic preset: arithmetic over the bundled math module, writing
    /// an interactive CLI calculator to `calculator.py`.
    pub fn basic() -> Self {
        Self {
            kind: CalculatorKind::Basic,
            output_path: PathBuf::from("calculator.py"),
            project_name: "Python Calculator".into(),
            author: "Calculator Generator".into(),
            description: "A customizable calculator application".into(),
            interactive: true,
            libraries: LibrarySet::new().with(Library::Math),
            features: FeatureSet::new().with(Feature::BasicArithmetic),
            ui: UiOptions::default(),
        }
    }

    /// The scientific preset: the basic preset plus the scientific library
    /// and feature block.
    pub fn scientific() -> Self {
        let mut blueprint = Self::basic();
        blueprint.kind = CalculatorKind::Scientific;
        blueprint.description =
            "A scientific calculator with advanced mathematical functions".into();
        blueprint.libraries.extend([
            Library::Numpy,
            Library::Scipy,
            Library::Sympy,
        ]);
        blueprint.features.extend([
            Feature::Trigonometric,
            Feature::Logarithmic,
            Feature::Exponential,
            Feature::Statistical,
            Feature::LinearAlgebra,
            Feature::ComplexNumbers,
            Feature::History,
            Feature::Memory,
        ]);
        blueprint
    }

    /// The preset named by `kind`.
    pub fn preset(kind: CalculatorKind) -> Self {
        match kind {
            CalculatorKind::Basic => Self::basic(),
            CalculatorKind::Scientific => Self::scientific(),
        }
    }

    // ── Builders (consuming, preset-then-override) ───────────────────────────

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = name.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.insert(feature);
        self
    }

    pub fn with_features(mut self, features: impl IntoIterator<Item = Feature>) -> Self {
        self.features.extend(features);
        self
    }

    /// Drop a feature picked up from the preset.
    pub fn without_feature(mut self, feature: Feature) -> Self {
        self.features.remove(feature);
        self
    }

    pub fn with_library(mut self, library: Library) -> Self {
        self.libraries.insert(library);
        self
    }

    pub fn with_libraries(mut self, libraries: impl IntoIterator<Item = Library>) -> Self {
        self.libraries.extend(libraries);
        self
    }

    /// Drop an explicitly selected library (resolution may re-add it if a
    /// feature entails it).
    pub fn without_library(mut self, library: Library) -> Self {
        self.libraries.remove(library);
        self
    }

    pub fn with_ui(mut self, ui: UiOptions) -> Self {
        self.ui = ui;
        self
    }

    pub fn with_style(mut self, style: UiStyle) -> Self {
        self.ui.style = style;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.ui.theme = theme;
        self
    }

    pub fn with_precision(mut self, precision: u8) -> Self {
        self.ui.precision = precision;
        self
    }

    pub fn with_angle_unit(mut self, angle_unit: AngleUnit) -> Self {
        self.ui.angle_unit = angle_unit;
        self
    }

    pub fn with_banner(mut self, show_banner: bool) -> Self {
        self.ui.show_banner = show_banner;
        self
    }

    pub fn with_help_text(mut self, show_help: bool) -> Self {
        self.ui.show_help = show_help;
        self
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn kind(&self) -> CalculatorKind {
        self.kind
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn interactive(&self) -> bool {
        self.interactive
    }

    pub fn libraries(&self) -> &LibrarySet {
        &self.libraries
    }

    pub fn features(&self) -> &FeatureSet {
        &self.features
    }

    pub fn ui(&self) -> &UiOptions {
        &self.ui
    }

    // ── Validation and resolution ────────────────────────────────────────────

    /// Fail-fast validation, run before any artifact text is assembled.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.output_path.as_os_str().is_empty() {
            return Err(DomainError::EmptyField {
                field: "output_path",
            });
        }
        if self.project_name.trim().is_empty() {
            return Err(DomainError::EmptyField {
                field: "project_name",
            });
        }
        if !(1..=20).contains(&self.ui.precision) {
            return Err(DomainError::PrecisionOutOfRange {
                value: self.ui.precision,
            });
        }
        Ok(())
    }

    /// Take the feature→library closure, consuming the proposal.
    ///
    /// Additive only: explicitly selected libraries survive, entailed ones
    /// are added, nothing is removed. Idempotent by construction (see
    /// `entailment.rs`).
    pub fn resolve(mut self) -> Resolved {
        self.libraries = entailment::closure(&self.features, &self.libraries);
        Resolved(self)
    }
}

impl fmt::Display for Blueprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} calculator -> {}",
            self.kind,
            self.ui.style,
            self.output_path.display()
        )
    }
}

// ── Resolved ─────────────────────────────────────────────────────────────────

/// A blueprint whose library set is closed under entailment.
///
/// The only way to get one is [`Blueprint::resolve`], so holding a
/// `Resolved` proves every enabled feature's libraries are present.
/// Composition accepts nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved(Blueprint);

impl Resolved {
    /// Unwrap back into a plain blueprint (e.g. to re-resolve after edits).
    pub fn into_inner(self) -> Blueprint {
        self.0
    }
}

impl Deref for Resolved {
    type Target = Blueprint;

    fn deref(&self) -> &Blueprint {
        &self.0
    }
}

impl fmt::Display for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_preset_matches_documented_defaults() {
        let blueprint = Blueprint::basic();
        assert_eq!(blueprint.kind(), CalculatorKind::Basic);
        assert_eq!(blueprint.output_path(), Path::new("calculator.py"));
        assert_eq!(blueprint.project_name(), "Python Calculator");
        assert_eq!(blueprint.author(), "Calculator Generator");
        assert!(blueprint.interactive());
        assert!(blueprint.libraries().contains(Library::Math));
        assert!(blueprint.features().contains(Feature::BasicArithmetic));
        assert_eq!(blueprint.ui().precision, 10);
        assert_eq!(blueprint.ui().angle_unit, AngleUnit::Degrees);
        assert_eq!(blueprint.ui().style, UiStyle::Cli);
        assert_eq!(blueprint.ui().theme, Theme::Light);
        assert!(blueprint.ui().show_help);
        assert!(blueprint.ui().show_banner);
    }

    #[test]
    fn scientific_preset_extends_basic() {
        let blueprint = Blueprint::scientific();
        assert_eq!(blueprint.kind(), CalculatorKind::Scientific);
        for library in [Library::Math, Library::Numpy, Library::Scipy, Library::Sympy] {
            assert!(blueprint.libraries().contains(library));
        }
        for feature in [
            Feature::BasicArithmetic,
            Feature::Trigonometric,
            Feature::Logarithmic,
            Feature::Exponential,
            Feature::Statistical,
            Feature::LinearAlgebra,
            Feature::ComplexNumbers,
            Feature::History,
            Feature::Memory,
        ] {
            assert!(blueprint.features().contains(feature));
        }
        // Pandas and plotly are not part of the preset.
        assert!(!blueprint.libraries().contains(Library::Pandas));
        assert!(!blueprint.libraries().contains(Library::Plotly));
    }

    #[test]
    fn overrides_win_over_the_preset() {
        let blueprint = Blueprint::scientific()
            .with_project_name("Lab Calc")
            .with_precision(4)
            .with_angle_unit(AngleUnit::Radians);
        assert_eq!(blueprint.project_name(), "Lab Calc");
        assert_eq!(blueprint.ui().precision, 4);
        assert_eq!(blueprint.ui().angle_unit, AngleUnit::Radians);
        // Preset content the override didn't touch survives.
        assert!(blueprint.features().contains(Feature::Statistical));
    }

    #[test]
    fn validate_rejects_empty_output_path() {
        let blueprint = Blueprint::basic().with_output_path("");
        assert_eq!(
            blueprint.validate(),
            Err(DomainError::EmptyField {
                field: "output_path"
            })
        );
    }

    #[test]
    fn validate_rejects_blank_project_name() {
        let blueprint = Blueprint::basic().with_project_name("   ");
        assert_eq!(
            blueprint.validate(),
            Err(DomainError::EmptyField {
                field: "project_name"
            })
        );
    }

    #[test]
    fn validate_enforces_precision_boundaries() {
        assert!(Blueprint::basic().with_precision(0).validate().is_err());
        assert!(Blueprint::basic().with_precision(21).validate().is_err());
        assert!(Blueprint::basic().with_precision(1).validate().is_ok());
        assert!(Blueprint::basic().with_precision(20).validate().is_ok());
    }

    #[test]
    fn resolve_adds_entailed_libraries() {
        let resolved = Blueprint::basic()
            .with_feature(Feature::Statistical)
            .resolve();
        assert!(resolved.libraries().contains(Library::Numpy));
        // The explicit math selection survives.
        assert!(resolved.libraries().contains(Library::Math));
    }

    #[test]
    fn resolve_is_idempotent() {
        let once = Blueprint::scientific()
            .with_feature(Feature::DataAnalysis)
            .resolve();
        let twice = once.clone().into_inner().resolve();
        assert_eq!(once, twice);
    }

    #[test]
    fn resolve_never_disables_anything() {
        let resolved = Blueprint::basic()
            .with_library(Library::Plotly)
            .with_feature(Feature::Memory)
            .resolve();
        // Memory entails nothing; the hand-picked plotly selection stays.
        assert!(resolved.libraries().contains(Library::Plotly));
        assert!(resolved.features().contains(Feature::Memory));
    }

    #[test]
    fn without_library_is_pre_resolution_only() {
        let resolved = Blueprint::basic()
            .without_library(Library::Math)
            .with_feature(Feature::Trigonometric)
            .resolve();
        // Trig re-entails math even though it was dropped explicitly.
        assert!(resolved.libraries().contains(Library::Math));
    }

    #[test]
    fn without_feature_trims_a_preset_pick() {
        let blueprint = Blueprint::scientific().without_feature(Feature::Memory);
        assert!(!blueprint.features().contains(Feature::Memory));
        assert!(blueprint.features().contains(Feature::Trigonometric));
    }

    #[test]
    fn display_is_compact() {
        let blueprint = Blueprint::basic();
        assert_eq!(
            blueprint.to_string(),
            "basic cli calculator -> calculator.py"
        );
    }
}
