//! Flags accepted by every subcommand.
//!
//! [`GlobalArgs`] is flattened into [`super::Cli`] with `global = true` on
//! each flag, so `archpat -v date …` and `archpat date … -v` are the same.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum, builder::FalseyValueParser};

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log more: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print nothing but errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    ///
    /// Also set by a non-empty `NO_COLOR`, whatever its value
    /// (https://no-color.org). `NO_COLOR=0` and `NO_COLOR=false` leave
    /// colors on.
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        hide_env_values = true
    )]
    pub no_color: bool,

    /// Read configuration from FILE instead of the platform default
    ///
    /// The default file may be missing; a FILE given here must exist.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How to render results
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

/// Rendering mode for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `output.format` from config, else human on a TTY and plain otherwise
    #[default]
    Auto,
    /// Colored, with headers and arrows
    Human,
    /// Bare values, one per line
    Plain,
    /// A single JSON document on stdout
    Json,
}
