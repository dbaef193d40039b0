//! Manual dependency provisioning.
//!
//! [`Injector`] hands out fully-wired values. There is exactly one concrete
//! [`Service`], so it is a plain struct rather than a trait object, and the
//! [`Client`] owns it by value. Lookup by name goes through a fixed table of
//! constructor functions; nothing is cached and every call builds a fresh
//! value.

use serde::Serialize;

use crate::domain::{error::DomainError, value_objects::Capability};

/// The one service implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Service;

impl Service {
    pub const fn perform_action(&self) -> &'static str {
        "Performing action in ServiceImpl"
    }
}

/// Consumer of a [`Service`], handed one at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Client {
    service: Service,
}

impl Client {
    pub const fn new(service: Service) -> Self {
        Self { service }
    }

    pub const fn service(&self) -> &Service {
        &self.service
    }

    pub const fn do_something(&self) -> &'static str {
        self.service.perform_action()
    }
}

/// A value produced by the injector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "capability", rename_all = "lowercase")]
pub enum Provided {
    Service(Service),
    Client(Client),
}

impl Provided {
    pub const fn capability(&self) -> Capability {
        match self {
            Self::Service(_) => Capability::Service,
            Self::Client(_) => Capability::Client,
        }
    }

    /// Exercise the provided value and return what it did.
    pub const fn run(&self) -> &'static str {
        match self {
            Self::Service(service) => service.perform_action(),
            Self::Client(client) => client.do_something(),
        }
    }
}

type Constructor = fn() -> Provided;

fn construct_service() -> Provided {
    Provided::Service(Injector::provide_service())
}

fn construct_client() -> Provided {
    Provided::Client(Injector::provide_client())
}

const REGISTRY: [(&str, Constructor); 2] = [
    ("service", construct_service),
    ("client", construct_client),
];

/// Builds services and their consumers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Injector;

impl Injector {
    pub const fn provide_service() -> Service {
        Service
    }

    pub const fn provide_client() -> Client {
        Client::new(Self::provide_service())
    }

    /// Look `name` up in the constructor table and call it.
    pub fn provide(name: &str) -> Result<Provided, DomainError> {
        let wanted = name.trim().to_ascii_lowercase();
        REGISTRY
            .iter()
            .find(|(registered, _)| *registered == wanted)
            .map(|(_, construct)| construct())
            .ok_or_else(|| DomainError::UnknownCapability {
                name: wanted,
                available: Self::capabilities(),
            })
    }

    /// Names accepted by [`Injector::provide`].
    pub fn capabilities() -> Vec<&'static str> {
        REGISTRY.iter().map(|(name, _)| *name).collect()
    }
}
