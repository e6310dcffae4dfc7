//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "compose a calculator" or "generate to disk".

pub mod compose_service;

pub use compose_service::{ComposeService, RenderStrategy};
