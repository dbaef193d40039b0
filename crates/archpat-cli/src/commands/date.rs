//! `archpat date`: convert `dd.MM.yyyy` dates into labels.

use archpat_core::application::PatternService;

use crate::{
    cli::{DateArgs, OutputFormat},
    error::CliResult,
    output::OutputManager,
};

/// Print one label per input, stopping at the first date that fails.
///
/// JSON output is all-or-nothing: the array is only printed if every input
/// converts.
pub fn execute(args: DateArgs, output: OutputManager) -> CliResult<()> {
    let service = PatternService::new();

    if output.format() == OutputFormat::Json {
        let labels = service.date_labels(&args.dates)?;
        output.json(&labels)?;
        return Ok(());
    }

    for input in &args.dates {
        let info = service.date_label(input)?;
        match output.format() {
            OutputFormat::Human => output.print(&format!("{} \u{2192} {}", info.input, info.label))?,
            _ => output.print(&info.label)?,
        }
    }

    Ok(())
}
