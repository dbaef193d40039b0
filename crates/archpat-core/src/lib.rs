//! archpat Core - design patterns as plain Rust
//!
//! This crate provides the domain and application layers for the archpat
//! pattern showcase. Each pattern is a small, self-contained piece of the
//! domain; the application layer adds tracing around them.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           archpat-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (PatternService)             │
//! │      Spans, events, result DTOs         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (date labels, Product, factory, DI)    │
//! │            No logging, no I/O           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use archpat_core::domain::{Product, format_date_label};
//!
//! assert_eq!(format_date_label("25.12.2024").unwrap(), "25 декабря");
//!
//! let product = Product::builder()
//!     .set_name("Laptop")
//!     .set_price(999.0)
//!     .build();
//! assert_eq!(product.description(), None);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DateLabelInfo, FactoryInfo, InjectionInfo, PatternService, ProductDraft,
    };
    pub use crate::domain::{
        Capability, Client, ConcreteProduct, DATE_LABEL_FORMAT, Injector, ParseError, Product,
        ProductBuilder, ProductFactory, Provided, Service, format_date_label,
    };
    pub use crate::error::{ArchpatError, ArchpatResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
