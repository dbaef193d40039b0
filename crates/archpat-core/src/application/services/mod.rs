//! Application services - orchestrate use cases.
//!
//! Services wrap the domain operations with tracing spans and turn their
//! results into serializable DTOs.

pub mod pattern_service;

pub use pattern_service::{DateLabelInfo, FactoryInfo, InjectionInfo, PatternService, ProductDraft};
