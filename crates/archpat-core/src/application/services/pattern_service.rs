//! Pattern Service - one entry point per demonstrated pattern.
//!
//! The service itself is stateless; it exists so that every use case goes
//! through one place that emits spans and events. The domain layer stays
//! free of `tracing`.

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    domain::{ConcreteProduct, Injector, Product, ProductFactory, format_date_label},
    error::ArchpatResult,
};

/// A converted date, paired with its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateLabelInfo {
    pub input: String,
    pub label: String,
}

/// Optional field values to push through a `ProductBuilder`.
///
/// `None` means "do not call the setter", which leaves the field absent on
/// the built product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
}

/// Outcome of running a factory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactoryInfo {
    pub factory: ProductFactory,
    pub product: ConcreteProduct,
    pub message: String,
}

/// Outcome of asking the injector for a capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InjectionInfo {
    pub capability: String,
    pub message: String,
}

/// Stateless facade over the domain patterns.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternService;

impl PatternService {
    pub fn new() -> Self {
        Self
    }

    /// Convert one `dd.MM.yyyy` date into its label.
    #[instrument(skip(self))]
    pub fn date_label(&self, input: &str) -> ArchpatResult<DateLabelInfo> {
        match format_date_label(input) {
            Ok(label) => {
                debug!(%label, "Date converted");
                Ok(DateLabelInfo {
                    input: input.to_owned(),
                    label,
                })
            }
            Err(e) => {
                debug!(error = %e, "Date rejected");
                Err(e.into())
            }
        }
    }

    /// Convert several dates, stopping at the first one that fails.
    #[instrument(skip_all)]
    pub fn date_labels<I, S>(&self, inputs: I) -> ArchpatResult<Vec<DateLabelInfo>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let labels = inputs
            .into_iter()
            .map(|input| self.date_label(input.as_ref()))
            .collect::<ArchpatResult<Vec<_>>>()?;
        info!(count = labels.len(), "Dates converted");
        Ok(labels)
    }

    /// Run `draft` through a fresh builder.
    #[instrument(
        skip_all,
        fields(
            name = draft.name.is_some(),
            price = draft.price.is_some(),
            description = draft.description.is_some()
        )
    )]
    pub fn build_product(&self, draft: ProductDraft) -> Product {
        let mut builder = Product::builder();
        if let Some(name) = draft.name {
            builder.set_name(name);
        }
        if let Some(price) = draft.price {
            builder.set_price(price);
        }
        if let Some(description) = draft.description {
            builder.set_description(description);
        }

        let product = builder.build();
        info!(%product, "Product built");
        product
    }

    /// Create and use the product of `factory`.
    #[instrument(skip(self))]
    pub fn run_factory(&self, factory: ProductFactory) -> FactoryInfo {
        let product = factory.create_product();
        let message = product.use_product().to_owned();
        info!(%product, "Factory produced");
        FactoryInfo {
            factory,
            product,
            message,
        }
    }

    /// Same as [`Self::run_factory`], selecting the factory by name.
    pub fn run_factory_named(&self, name: &str) -> ArchpatResult<FactoryInfo> {
        let factory = name.parse::<ProductFactory>()?;
        Ok(self.run_factory(factory))
    }

    /// Ask the injector for `capability` and exercise what it returns.
    #[instrument(skip(self))]
    pub fn inject(&self, capability: &str) -> ArchpatResult<InjectionInfo> {
        let provided = Injector::provide(capability)?;
        let message = provided.run().to_owned();
        info!(capability = %provided.capability(), "Capability provided");
        Ok(InjectionInfo {
            capability: provided.capability().to_string(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, ParseError};
    use crate::error::ArchpatError;

    #[test]
    fn date_label_wraps_result() {
        let info = PatternService::new().date_label("25.12.2024").unwrap();
        assert_eq!(info.input, "25.12.2024");
        assert_eq!(info.label, "25 декабря");
    }

    #[test]
    fn date_label_propagates_parse_error() {
        let err = PatternService::new().date_label("31.02.2024").unwrap_err();
        assert!(matches!(
            err,
            ArchpatError::Domain(DomainError::Parse(ParseError::InvalidDate { .. }))
        ));
    }

    #[test]
    fn date_labels_stop_at_first_failure() {
        let service = PatternService::new();
        let ok = service.date_labels(["01.01.2024", "08.03.2024"]).unwrap();
        assert_eq!(ok.len(), 2);
        assert_eq!(ok[1].label, "08 марта");

        let err = service
            .date_labels(["01.01.2024", "bad", "02.01.2024"])
            .unwrap_err();
        assert!(err.to_string().contains("bad"));
    }

    #[test]
    fn build_product_skips_missing_fields() {
        let product = PatternService::new().build_product(ProductDraft {
            name: Some("Lamp".into()),
            price: None,
            description: Some("desk".into()),
        });
        assert_eq!(product.name(), Some("Lamp"));
        assert_eq!(product.price(), None);
        assert_eq!(product.description(), Some("desk"));
    }

    #[test]
    fn empty_draft_builds_empty_product() {
        let product = PatternService::new().build_product(ProductDraft::default());
        assert_eq!(product, Product::builder().build());
    }

    #[test]
    fn run_factory_reports_usage() {
        let info = PatternService::new().run_factory(ProductFactory::B);
        assert_eq!(info.product, ConcreteProduct::B);
        assert_eq!(info.message, "Using ConcreteProductB");
    }

    #[test]
    fn run_factory_named_rejects_unknown() {
        assert!(PatternService::new().run_factory_named("z").is_err());
        assert_eq!(
            PatternService::new()
                .run_factory_named("a")
                .unwrap()
                .product,
            ConcreteProduct::A
        );
    }

    #[test]
    fn inject_client() {
        let info = PatternService::new().inject("client").unwrap();
        assert_eq!(info.capability, "client");
        assert_eq!(info.message, "Performing action in ServiceImpl");
    }

    #[test]
    fn inject_unknown() {
        let err = PatternService::new().inject("cache").unwrap_err();
        assert!(matches!(
            err,
            ArchpatError::Domain(DomainError::UnknownCapability { .. })
        ));
    }
}
