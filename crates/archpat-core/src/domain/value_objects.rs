//! Domain value objects: ProductFactory, ConcreteProduct, Capability.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity. Each
//! pattern that would otherwise need a trait object with a single
//! implementation per name is a closed enum here instead; selecting a
//! variant is a `match`, not a lookup.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm (and the `FromStr` arm for factories) here
//! 3. Add the `create_product` / injector table entry
//! 4. Done

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

// ── ConcreteProduct ───────────────────────────────────────────────────────────

/// A product made by a [`ProductFactory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConcreteProduct {
    A,
    B,
}

impl ConcreteProduct {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "ConcreteProductA",
            Self::B => "ConcreteProductB",
        }
    }

    /// What happens when the product is used.
    pub const fn use_product(&self) -> &'static str {
        match self {
            Self::A => "Using ConcreteProductA",
            Self::B => "Using ConcreteProductB",
        }
    }
}

impl fmt::Display for ConcreteProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ProductFactory ────────────────────────────────────────────────────────────

/// Factory selector. Each variant makes exactly one kind of product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductFactory {
    A,
    B,
}

impl ProductFactory {
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
        }
    }

    pub const fn create_product(self) -> ConcreteProduct {
        match self {
            Self::A => ConcreteProduct::A,
            Self::B => ConcreteProduct::B,
        }
    }
}

impl fmt::Display for ProductFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductFactory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "product-a" => Ok(Self::A),
            "b" | "product-b" => Ok(Self::B),
            other => Err(DomainError::UnknownFactory {
                name: other.to_owned(),
            }),
        }
    }
}

// ── Capability ────────────────────────────────────────────────────────────────

/// Something the injector knows how to provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Service,
    Client,
}

impl Capability {
    pub const ALL: [Self; 2] = [Self::Service, Self::Client];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Client => "client",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_mapping_is_one_to_one() {
        assert_eq!(ProductFactory::A.create_product(), ConcreteProduct::A);
        assert_eq!(ProductFactory::B.create_product(), ConcreteProduct::B);
    }

    #[test]
    fn use_product_messages() {
        assert_eq!(ConcreteProduct::A.use_product(), "Using ConcreteProductA");
        assert_eq!(ConcreteProduct::B.use_product(), "Using ConcreteProductB");
    }

    #[test]
    fn factory_from_str_aliases() {
        assert_eq!("A".parse::<ProductFactory>().unwrap(), ProductFactory::A);
        assert_eq!(
            "product-b".parse::<ProductFactory>().unwrap(),
            ProductFactory::B
        );
    }

    #[test]
    fn unknown_factory() {
        assert_eq!(
            "c".parse::<ProductFactory>(),
            Err(DomainError::UnknownFactory { name: "c".into() })
        );
    }

    #[test]
    fn factory_display_round_trips() {
        for f in ProductFactory::ALL {
            assert_eq!(f.to_string().parse::<ProductFactory>().unwrap(), f);
        }
    }

    #[test]
    fn capability_names() {
        assert_eq!(Capability::Client.to_string(), "client");
        assert_eq!(Capability::Service.as_str(), "service");
    }
}
