//! Tracing setup for the `archpat` binary.
//!
//! Events go to stderr so stdout carries only command output. The filter is
//! built from `-v`/`-q` unless `RUST_LOG` is set, in which case `RUST_LOG`
//! is used as-is. `archpat-core` emits from its application layer only.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates that follow the verbosity flags; everything else stays at warn.
const OWN_TARGETS: [&str; 2] = ["archpat", "archpat_core"];

/// What the subscriber should look like for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LogSettings {
    level: LevelFilter,
    ansi: bool,
    show_targets: bool,
}

impl LogSettings {
    /// `--quiet` wins over any number of `-v`.
    fn from_args(args: &GlobalArgs, stderr_is_terminal: bool) -> Self {
        let level = if args.quiet {
            LevelFilter::ERROR
        } else {
            match args.verbose {
                0 => LevelFilter::WARN,
                1 => LevelFilter::INFO,
                2 => LevelFilter::DEBUG,
                _ => LevelFilter::TRACE,
            }
        };

        Self {
            level,
            ansi: stderr_is_terminal && !args.no_color,
            show_targets: args.verbose >= 2,
        }
    }

    fn filter(&self) -> EnvFilter {
        let own = OWN_TARGETS
            .iter()
            .map(|target| format!("{target}={}", self.level))
            .collect::<Vec<_>>()
            .join(",");
        EnvFilter::new(format!("warn,{own}"))
    }
}

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let settings = LogSettings::from_args(args, std::io::stderr().is_terminal());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| settings.filter());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(settings.show_targets)
        .with_ansi(settings.ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args(verbose: u8, quiet: bool, no_color: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    fn level(verbose: u8, quiet: bool) -> LevelFilter {
        LogSettings::from_args(&args(verbose, quiet, false), false).level
    }

    #[test]
    fn verbosity_steps() {
        assert_eq!(level(0, false), LevelFilter::WARN);
        assert_eq!(level(1, false), LevelFilter::INFO);
        assert_eq!(level(2, false), LevelFilter::DEBUG);
        assert_eq!(level(3, false), LevelFilter::TRACE);
        assert_eq!(level(9, false), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_beats_verbose() {
        assert_eq!(level(0, true), LevelFilter::ERROR);
        assert_eq!(level(3, true), LevelFilter::ERROR);
    }

    #[test]
    fn ansi_needs_a_terminal_and_colour() {
        assert!(LogSettings::from_args(&args(0, false, false), true).ansi);
        assert!(!LogSettings::from_args(&args(0, false, true), true).ansi);
        assert!(!LogSettings::from_args(&args(0, false, false), false).ansi);
    }

    #[test]
    fn targets_shown_from_debug_up() {
        assert!(!LogSettings::from_args(&args(1, false, false), false).show_targets);
        assert!(LogSettings::from_args(&args(2, false, false), false).show_targets);
    }

    #[test]
    fn filter_names_both_crates() {
        let settings = LogSettings::from_args(&args(1, false, false), false);
        let filter = settings.filter().to_string().to_lowercase();
        assert!(filter.contains("archpat=info"));
        assert!(filter.contains("archpat_core=info"));
    }
}
