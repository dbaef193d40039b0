//! The `Product` value object and its builder.
//!
//! A `Product` has three optional fields and no identity; two products with
//! the same fields are equal. The only way to obtain one is
//! [`ProductBuilder::build`].
//!
//! # Builder
//!
//! The builder is a plain mutable staging area. Setters take `&mut self`,
//! overwrite one field and hand back `&mut Self` so calls chain. Nothing is
//! validated: a negative or NaN price is staged as-is. `build` copies the
//! staged fields into a fresh `Product`; fields that were never set stay
//! `None`.
//!
//! # Domain purity
//!
//! This module must not import `tracing`.

use std::fmt;

use serde::{Serialize, Serializer};

// ── Value object ──────────────────────────────────────────────────────────────

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    name: Option<String>,
    #[serde(serialize_with = "serialize_price")]
    price: Option<f64>,
    description: Option<String>,
}

/// JSON has no NaN or infinity. Those prices are written as strings
/// (`"NaN"`, `"inf"`, `"-inf"`) so that only an unset price becomes `null`.
fn serialize_price<S>(price: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match price {
        Some(p) if !p.is_finite() => serializer.serialize_str(&p.to_string()),
        Some(p) => serializer.serialize_some(p),
        None => serializer.serialize_none(),
    }
}

impl Product {
    /// Start building a new `Product`.
    pub fn builder() -> ProductBuilder {
        ProductBuilder::new()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    pub const fn price(&self) -> Option<f64> {
        self.price
    }
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or("-"))?;
        match self.price {
            Some(price) => write!(f, " @ {price}")?,
            None => f.write_str(" @ -")?,
        }
        write!(f, " ({})", self.description().unwrap_or("-"))
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Mutable staging area for a [`Product`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductBuilder {
    name: Option<String>,
    price: Option<f64>,
    description: Option<String>,
}

impl ProductBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn set_price(&mut self, price: f64) -> &mut Self {
        self.price = Some(price);
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Produce a `Product` from whatever is currently staged. Never fails.
    pub fn build(&self) -> Product {
        Product {
            name: self.name.clone(),
            price: self.price,
            description: self.description.clone(),
        }
    }
}

impl From<ProductBuilder> for Product {
    fn from(builder: ProductBuilder) -> Self {
        Self {
            name: builder.name,
            price: builder.price,
            description: builder.description,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
