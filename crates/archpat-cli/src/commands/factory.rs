//! `archpat factory`: create a product through a factory and use it.

use archpat_core::application::PatternService;
use tracing::debug;

use crate::{
    cli::{FactoryArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: FactoryArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let name = args.factory.unwrap_or_else(|| {
        debug!(factory = %config.defaults.factory, "No factory given, using config default");
        config.defaults.factory
    });

    let info = PatternService::new().run_factory_named(&name)?;

    match output.format() {
        OutputFormat::Json => output.json(&info)?,
        OutputFormat::Human => output.success(&info.message)?,
        _ => output.print(&info.message)?,
    }

    Ok(())
}
