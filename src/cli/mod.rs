//! Command-line interface and subcommand drivers.

mod args;
pub mod derive;
pub mod placeholder;

pub use args::{Cli, Commands, DeriveArgs, PlaceholderArgs};
