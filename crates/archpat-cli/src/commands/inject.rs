//! `archpat inject`: provide a dependency and run it.

use archpat_core::application::PatternService;
use tracing::debug;

use crate::{
    cli::{InjectArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: InjectArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let capability = args.capability.unwrap_or_else(|| {
        debug!(capability = %config.defaults.capability, "No capability given, using config default");
        config.defaults.capability
    });

    let info = PatternService::new().inject(&capability)?;

    match output.format() {
        OutputFormat::Json => output.json(&info)?,
        OutputFormat::Human => output.success(&format!("[{}] {}", info.capability, info.message))?,
        _ => output.print(&info.message)?,
    }

    Ok(())
}
