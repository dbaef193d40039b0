//! `archpat product`: run flags through the product builder.

use archpat_core::application::{PatternService, ProductDraft};

use crate::{
    cli::{OutputFormat, ProductArgs},
    error::CliResult,
    output::OutputManager,
};

const ABSENT: &str = "(absent)";

pub fn execute(args: ProductArgs, output: OutputManager) -> CliResult<()> {
    let draft = ProductDraft {
        name: args.name,
        price: args.price,
        description: args.description,
    };
    let product = PatternService::new().build_product(draft);

    match output.format() {
        OutputFormat::Json => output.json(&product)?,
        OutputFormat::Human => {
            output.header("Product")?;
            output.field("name", product.name().unwrap_or(ABSENT))?;
            let price = product.price().map(|p| p.to_string());
            output.field("price", price.as_deref().unwrap_or(ABSENT))?;
            output.field("description", product.description().unwrap_or(ABSENT))?;
        }
        _ => output.print(&product.to_string())?,
    }

    Ok(())
}
