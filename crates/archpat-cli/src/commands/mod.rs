//! One module per subcommand.  Each exposes an `execute` function that takes
//! the parsed arguments and whatever shared state it needs.

pub mod completions;
pub mod config;
pub mod date;
pub mod factory;
pub mod init;
pub mod inject;
pub mod product;
