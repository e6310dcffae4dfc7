//! Domain value objects: CalculatorKind, UiStyle, Theme, AngleUnit, Feature, Library.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity.
//! They hold NO entailment logic. Which feature pulls in which library lives
//! in `entailment.rs`. This file's only job is to define the types, their
//! string representations, and their `FromStr` parsers (canonical name plus
//! the short aliases every front end shares).
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm, the `ALL` entry, and the `FromStr` arm here
//! 3. Add an entailment row in `entailment.rs` if the feature needs libraries
//! 4. Done — nothing else changes

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── CalculatorKind ───────────────────────────────────────────────────────────

/// The kind of calculator program to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculatorKind {
    Basic,
    Scientific,
}

impl CalculatorKind {
    pub const ALL: &'static [CalculatorKind] = &[Self::Basic, Self::Scientific];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Scientific => "scientific",
        }
    }

    pub const fn summary(&self) -> &'static str {
        match self {
            Self::Basic => "arithmetic, optional memory and history",
            Self::Scientific => "adds trig, logs, statistics, linear algebra",
        }
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculatorKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "scientific" | "sci" => Ok(Self::Scientific),
            other => Err(DomainError::UnknownKind { name: other.into() }),
        }
    }
}

// ── UiStyle ──────────────────────────────────────────────────────────────────

/// Which front end the generated calculator presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiStyle {
    Cli,
    Gui,
}

impl UiStyle {
    pub const ALL: &'static [UiStyle] = &[Self::Cli, Self::Gui];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cli => "cli",
            Self::Gui => "gui",
        }
    }
}

impl fmt::Display for UiStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UiStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cli" | "console" | "terminal" => Ok(Self::Cli),
            "gui" | "desktop" => Ok(Self::Gui),
            other => Err(DomainError::UnknownStyle { name: other.into() }),
        }
    }
}

// ── Theme ────────────────────────────────────────────────────────────────────

/// Visual theme for GUI calculators. CLI calculators ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    Colorful,
}

impl Theme {
    pub const ALL: &'static [Theme] = &[Self::Light, Self::Dark, Self::Colorful];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Colorful => "colorful",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "colorful" => Ok(Self::Colorful),
            other => Err(DomainError::UnknownTheme { name: other.into() }),
        }
    }
}

// ── AngleUnit ────────────────────────────────────────────────────────────────

/// Angle unit the generated trig functions interpret their input in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    Degrees,
    Radians,
}

impl AngleUnit {
    pub const ALL: &'static [AngleUnit] = &[Self::Degrees, Self::Radians];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Degrees => "degrees",
            Self::Radians => "radians",
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AngleUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "degrees" | "deg" => Ok(Self::Degrees),
            "radians" | "rad" => Ok(Self::Radians),
            other => Err(DomainError::UnknownAngleUnit { name: other.into() }),
        }
    }
}

// ── Library ──────────────────────────────────────────────────────────────────

/// A library the generated program may import.
///
/// `Math` ships with the target runtime; the rest are third-party packages
/// that end up pinned in the dependency manifest (`manifest.rs`).
///
/// Ordered so that selection sets iterate in declaration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Library {
    Math,
    Numpy,
    Pandas,
    Scipy,
    Sympy,
    Plotly,
}

impl Library {
    pub const ALL: &'static [Library] = &[
        Self::Math,
        Self::Numpy,
        Self::Pandas,
        Self::Scipy,
        Self::Sympy,
        Self::Plotly,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Math => "math",
            Self::Numpy => "numpy",
            Self::Pandas => "pandas",
            Self::Scipy => "scipy",
            Self::Sympy => "sympy",
            Self::Plotly => "plotly",
        }
    }

    /// Whether this library is bundled with the target runtime
    /// (and therefore never appears in the dependency manifest).
    pub const fn is_bundled(&self) -> bool {
        matches!(self, Self::Math)
    }

    pub const fn summary(&self) -> &'static str {
        match self {
            Self::Math => "standard math module (bundled with the runtime)",
            Self::Numpy => "numerical arrays and linear algebra",
            Self::Pandas => "data frames and analysis",
            Self::Scipy => "scientific computing: stats, optimize, integrate",
            Self::Sympy => "symbolic mathematics",
            Self::Plotly => "interactive plotting",
        }
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Library {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "math" => Ok(Self::Math),
            "numpy" | "np" => Ok(Self::Numpy),
            "pandas" | "pd" => Ok(Self::Pandas),
            "scipy" => Ok(Self::Scipy),
            "sympy" => Ok(Self::Sympy),
            "plotly" => Ok(Self::Plotly),
            other => Err(DomainError::UnknownLibrary { name: other.into() }),
        }
    }
}

// ── Feature ──────────────────────────────────────────────────────────────────

/// A calculator capability the user can switch on.
///
/// Enabling a feature may entail libraries (see `entailment.rs`); it never
/// entails other features. Canonical names are kebab-case; `FromStr` also
/// accepts the short aliases listed per feature in [`Feature::aliases`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    // Basic features
    BasicArithmetic,
    History,
    Memory,

    // Scientific features
    Trigonometric,
    Logarithmic,
    Exponential,
    Statistical,
    LinearAlgebra,
    Calculus,
    Plotting,
    UnitConversion,
    ComplexNumbers,

    // Advanced features
    EquationSolver,
    MatrixOperations,
    DataAnalysis,
    Graphing,
    Programming,
}

impl Feature {
    pub const ALL: &'static [Feature] = &[
        Self::BasicArithmetic,
        Self::History,
        Self::Memory,
        Self::Trigonometric,
        Self::Logarithmic,
        Self::Exponential,
        Self::Statistical,
        Self::LinearAlgebra,
        Self::Calculus,
        Self::Plotting,
        Self::UnitConversion,
        Self::ComplexNumbers,
        Self::EquationSolver,
        Self::MatrixOperations,
        Self::DataAnalysis,
        Self::Graphing,
        Self::Programming,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BasicArithmetic => "basic-arithmetic",
            Self::History => "history",
            Self::Memory => "memory",
            Self::Trigonometric => "trigonometric",
            Self::Logarithmic => "logarithmic",
            Self::Exponential => "exponential",
            Self::Statistical => "statistical",
            Self::LinearAlgebra => "linear-algebra",
            Self::Calculus => "calculus",
            Self::Plotting => "plotting",
            Self::UnitConversion => "unit-conversion",
            Self::ComplexNumbers => "complex-numbers",
            Self::EquationSolver => "equation-solver",
            Self::MatrixOperations => "matrix-operations",
            Self::DataAnalysis => "data-analysis",
            Self::Graphing => "graphing",
            Self::Programming => "programming",
        }
    }

    pub const fn summary(&self) -> &'static str {
        match self {
            Self::BasicArithmetic => "add, subtract, multiply, divide, power, modulo",
            Self::History => "calculation history with timestamps and JSON export",
            Self::Memory => "store, recall, and clear a memory register",
            Self::Trigonometric => "sin, cos, tan and their inverses, angle-unit aware",
            Self::Logarithmic => "log, ln, log10, log2 with positive-input guards",
            Self::Exponential => "exponential helpers via the math module",
            Self::Statistical => "mean, median, std deviation, variance, correlation",
            Self::LinearAlgebra => "matrix multiply, inverse, determinant, eigenvalues",
            Self::Calculus => "symbolic differentiation and integration",
            Self::Plotting => "function and data plots",
            Self::UnitConversion => "unit conversion helpers",
            Self::ComplexNumbers => "complex arithmetic via cmath",
            Self::EquationSolver => "solve algebraic equations symbolically",
            Self::MatrixOperations => "matrix workflows on numpy arrays",
            Self::DataAnalysis => "tabular analysis on pandas frames",
            Self::Graphing => "interactive graphs",
            Self::Programming => "user-programmable expressions",
        }
    }

    /// Short names `FromStr` accepts besides the canonical one.
    pub const fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::BasicArithmetic => &["arithmetic"],
            Self::History => &["hist"],
            Self::Memory => &["mem"],
            Self::Trigonometric => &["trig"],
            Self::Logarithmic => &["log"],
            Self::Exponential => &["exp"],
            Self::Statistical => &["stats", "statistics"],
            Self::LinearAlgebra => &["linalg"],
            Self::Calculus => &[],
            Self::Plotting => &["plot"],
            Self::UnitConversion => &["units"],
            Self::ComplexNumbers => &["complex"],
            Self::EquationSolver => &["solver"],
            Self::MatrixOperations => &["matrix"],
            Self::DataAnalysis => &["data"],
            Self::Graphing => &["graph"],
            Self::Programming => &["prog"],
        }
    }

    /// The libraries this feature entails.
    ///
    /// Delegates to `entailment::implied_libraries`. Do not add match arms
    /// here — register entailments in `entailment.rs` instead.
    pub fn implied_libraries(self) -> &'static [Library] {
        crate::domain::entailment::implied_libraries(self)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basic-arithmetic" | "arithmetic" => Ok(Self::BasicArithmetic),
            "history" | "hist" => Ok(Self::History),
            "memory" | "mem" => Ok(Self::Memory),
            "trigonometric" | "trig" => Ok(Self::Trigonometric),
            "logarithmic" | "log" => Ok(Self::Logarithmic),
            "exponential" | "exp" => Ok(Self::Exponential),
            "statistical" | "stats" | "statistics" => Ok(Self::Statistical),
            "linear-algebra" | "linalg" => Ok(Self::LinearAlgebra),
            "calculus" => Ok(Self::Calculus),
            "plotting" | "plot" => Ok(Self::Plotting),
            "unit-conversion" | "units" => Ok(Self::UnitConversion),
            "complex-numbers" | "complex" => Ok(Self::ComplexNumbers),
            "equation-solver" | "solver" => Ok(Self::EquationSolver),
            "matrix-operations" | "matrix" => Ok(Self::MatrixOperations),
            "data-analysis" | "data" => Ok(Self::DataAnalysis),
            "graphing" | "graph" => Ok(Self::Graphing),
            "programming" | "prog" => Ok(Self::Programming),
            other => Err(DomainError::UnknownFeature { name: other.into() }),
        }
    }
}
