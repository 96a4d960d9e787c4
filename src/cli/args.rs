//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Sitepix image pipeline CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: sitepix.toml)
    #[arg(short = 'C', long, default_value = "sitepix.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Derive density-tier image variants from authored originals
    #[command(visible_alias = "d")]
    Derive {
        #[command(flatten)]
        args: DeriveArgs,
    },

    /// Generate a placeholder replica of the built site
    #[command(visible_alias = "p")]
    Placeholder {
        #[command(flatten)]
        args: PlaceholderArgs,
    },
}

/// Derive command arguments. Unset options fall back to the config file.
#[derive(clap::Args, Debug, Clone)]
pub struct DeriveArgs {
    /// Source directory of authored images (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub source: Option<PathBuf>,

    /// Destination directory for derived variants
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub dest: Option<PathBuf>,

    /// Encoding quality for WebP/JPEG output (1-100)
    #[arg(short, long)]
    pub quality: Option<u8>,

    /// Emit JPEG/PNG fallbacks alongside WebP variants
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub fallback: Option<bool>,

    /// Clear the destination (videos excepted) before deriving
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub clean: Option<bool>,

    /// Keep source files after a successful export
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub keep: Option<bool>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Placeholder command arguments. Unset options fall back to the config file.
#[derive(clap::Args, Debug, Clone)]
pub struct PlaceholderArgs {
    /// Image tree whose dimensions the placeholders mirror
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub images: Option<PathBuf>,

    /// Built site output to replicate
    #[arg(long, value_hint = clap::ValueHint::DirPath)]
    pub dist: Option<PathBuf>,

    /// Destination directory for the placeholder replica
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub dest: Option<PathBuf>,

    /// WebP encoding quality (1-100)
    #[arg(short, long)]
    pub quality: Option<u8>,

    /// Canvas fill color
    #[arg(short, long)]
    pub background: Option<String>,

    /// Label text color
    #[arg(short, long)]
    pub foreground: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

#[allow(unused)]
impl Cli {
    pub const fn is_derive(&self) -> bool {
        matches!(self.command, Commands::Derive { .. })
    }
    pub const fn is_placeholder(&self) -> bool {
        matches!(self.command, Commands::Placeholder { .. })
    }
}
