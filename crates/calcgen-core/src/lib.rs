//! Calcgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the calcgen
//! calculator generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           calcgen-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ComposeService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (FragmentCatalog, MainRenderer, Fs)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     calcgen-adapters (Infrastructure)   │
//! │  (ConsoleCatalog, LocalFilesystem, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Blueprint, entailment, imports, ...)  │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use calcgen_core::{
//!     application::ComposeService,
//!     domain::{Blueprint, Feature, GenerationMeta},
//! };
//!
//! // 1. Describe the calculator
//! let blueprint = Blueprint::scientific()
//!     .with_feature(Feature::Plotting)
//!     .with_output_path("./sci_calc.py");
//!
//! // 2. Use the application service (with injected adapters)
//! let service = ComposeService::new(strategies, filesystem);
//! let meta = GenerationMeta::new("1.0.0", "2024-03-01 12:00:00");
//! service.generate(blueprint, &meta).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ComposeService, RenderStrategy,
        ports::{Filesystem, FragmentCatalog, MainRenderer},
    };
    pub use crate::domain::{
        AngleUnit, Artifact, Blueprint, CalculatorKind, Feature, FeatureSet, GenerationMeta,
        Library, LibrarySet, Resolved, Theme, UiOptions, UiStyle,
    };
    pub use crate::error::{CalcgenError, CalcgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
