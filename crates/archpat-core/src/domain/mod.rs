//! Core domain layer for archpat.
//!
//! This module contains pure logic with no I/O and no logging. Each file
//! demonstrates one pattern in isolation; none of them depend on each other
//! beyond the shared error type.
//!
//! - **Date labels**: a stateless function plus a fixed format constant
//! - **Builder**: `ProductBuilder` stages fields, `Product` is immutable
//! - **Factory**: closed enums, one product per factory
//! - **Injection**: a constructor table keyed by capability name
//!
// Public API - what the world sees
pub mod date_label;
pub mod entities;
pub mod error;
pub mod injection;
pub mod value_objects;

// Re-exports for convenience
pub use date_label::{
    DATE_LABEL_FORMAT, DateLabelFormat, MonthNames, RUSSIAN, format_date_label, parse_date,
    render_label,
};
pub use entities::{Product, ProductBuilder};
pub use error::{DomainError, ErrorCategory, ParseError};
pub use injection::{Client, Injector, Provided, Service};
pub use value_objects::{Capability, ConcreteProduct, ProductFactory};
