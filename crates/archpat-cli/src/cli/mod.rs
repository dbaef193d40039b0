//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "archpat",
    bin_name = "archpat",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Design patterns, one command each",
    long_about = "archpat runs small, isolated demonstrations of the builder, \
                  factory, dependency-injection and date-formatting patterns.",
    after_help = "EXAMPLES:\n\
        \x20 archpat date 25.12.2024\n\
        \x20 archpat product --name Laptop --price 999.99\n\
        \x20 archpat factory b\n\
        \x20 archpat inject client\n\
        \x20 archpat completions bash > /usr/share/bash-completion/completions/archpat",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert dd.MM.yyyy dates into "dd MMMM" labels.
    #[command(
        visible_alias = "d",
        about = "Convert dates into day + month labels",
        after_help = "EXAMPLES:\n\
            \x20 archpat date 25.12.2024          # 25 декабря\n\
            \x20 archpat date 01.01.2024 08.03.2024"
    )]
    Date(DateArgs),

    /// Build a product from optional fields.
    #[command(
        visible_alias = "p",
        about = "Build a product with the builder",
        after_help = "EXAMPLES:\n\
            \x20 archpat product\n\
            \x20 archpat product --name Laptop --price 999.99 --description \"14 inch\""
    )]
    Product(ProductArgs),

    /// Create a product through a factory.
    #[command(
        visible_alias = "f",
        about = "Create and use a product from a factory",
        after_help = "EXAMPLES:\n\
            \x20 archpat factory      # default from config\n\
            \x20 archpat factory b"
    )]
    Factory(FactoryArgs),

    /// Ask the injector for a service or client.
    #[command(
        visible_alias = "i",
        about = "Provide a dependency and run it",
        after_help = "EXAMPLES:\n\
            \x20 archpat inject           # default from config\n\
            \x20 archpat inject service"
    )]
    Inject(InjectArgs),

    /// Initialise an archpat configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 archpat init\n\
            \x20 archpat --config ./archpat.toml init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 archpat completions bash > ~/.local/share/bash-completion/completions/archpat\n\
            \x20 archpat completions zsh  > ~/.zfunc/_archpat\n\
            \x20 archpat completions fish > ~/.config/fish/completions/archpat.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the archpat configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 archpat config get defaults.factory\n\
            \x20 archpat config list\n\
            \x20 archpat config path"
    )]
    Config(ConfigCommands),
}

impl Commands {
    /// `false` for commands that must work before a config file exists.
    pub fn reads_config(&self) -> bool {
        !matches!(self, Self::Init(_) | Self::Completions(_))
    }
}

// ── date ──────────────────────────────────────────────────────────────────────

/// Arguments for `archpat date`.
#[derive(Debug, Args)]
pub struct DateArgs {
    /// Dates in dd.MM.yyyy layout.
    #[arg(value_name = "DATE", required = true, help = "Dates as dd.MM.yyyy")]
    pub dates: Vec<String>,
}

// ── product ───────────────────────────────────────────────────────────────────

/// Arguments for `archpat product`.
///
/// Every flag is optional; omitted flags leave the field absent.
#[derive(Debug, Args)]
pub struct ProductArgs {
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Product name")]
    pub name: Option<String>,

    #[arg(
        short = 'p',
        long = "price",
        value_name = "PRICE",
        allow_negative_numbers = true,
        help = "Product price (not validated)"
    )]
    pub price: Option<f64>,

    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "Product description"
    )]
    pub description: Option<String>,
}

// ── factory / inject ──────────────────────────────────────────────────────────

/// Arguments for `archpat factory`.
#[derive(Debug, Args)]
pub struct FactoryArgs {
    /// Factory to use (`a` or `b`).
    #[arg(value_name = "FACTORY", help = "Factory name (a, b)")]
    pub factory: Option<String>,
}

/// Arguments for `archpat inject`.
#[derive(Debug, Args)]
pub struct InjectArgs {
    /// Capability to provide (`service` or `client`).
    #[arg(value_name = "CAPABILITY", help = "Capability name (service, client)")]
    pub capability: Option<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `archpat init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `archpat completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `archpat config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.factory`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_date_command() {
        let cli = Cli::parse_from(["archpat", "date", "25.12.2024", "01.01.2024"]);
        match cli.command {
            Commands::Date(args) => assert_eq!(args.dates, ["25.12.2024", "01.01.2024"]),
            other => panic!("expected Date command, got {other:?}"),
        }
    }

    #[test]
    fn date_requires_an_argument() {
        assert!(Cli::try_parse_from(["archpat", "date"]).is_err());
    }

    #[test]
    fn product_flags_are_optional() {
        let cli = Cli::parse_from(["archpat", "product"]);
        let Commands::Product(args) = cli.command else {
            panic!("expected Product command");
        };
        assert!(args.name.is_none());
        assert!(args.price.is_none());
        assert!(args.description.is_none());
    }

    #[test]
    fn product_accepts_negative_price() {
        let cli = Cli::parse_from(["archpat", "product", "--price", "-3.5"]);
        let Commands::Product(args) = cli.command else {
            panic!("expected Product command");
        };
        assert_eq!(args.price, Some(-3.5));
    }

    #[test]
    fn aliases() {
        let cli = Cli::parse_from(["archpat", "f", "b"]);
        assert!(matches!(cli.command, Commands::Factory(FactoryArgs { factory: Some(ref f) }) if f == "b"));
        let cli = Cli::parse_from(["archpat", "i"]);
        assert!(matches!(
            cli.command,
            Commands::Inject(InjectArgs { capability: None })
        ));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["archpat", "--quiet", "--verbose", "inject"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["archpat", "date", "01.01.2024", "-vv", "--no-color"]);
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.no_color);
        assert_eq!(cli.global.output_format, OutputFormat::Auto);
    }

    #[test]
    fn init_does_not_read_config() {
        assert!(!Cli::parse_from(["archpat", "init"]).command.reads_config());
        assert!(Cli::parse_from(["archpat", "inject"]).command.reads_config());
    }
}
