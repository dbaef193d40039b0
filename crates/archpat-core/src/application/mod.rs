//! Application layer for archpat.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (PatternService)
//! - **DTOs**: Serializable results for the CLI (DateLabelInfo, FactoryInfo, ...)
//!
//! The application layer coordinates the domain layer and owns observability.
//! All pattern logic lives in `crate::domain`.

pub mod services;

// Re-export main services
pub use services::{DateLabelInfo, FactoryInfo, InjectionInfo, PatternService, ProductDraft};
