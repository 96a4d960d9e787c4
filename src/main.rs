//! Sitepix - image asset pipeline for static sites.
//!
//! Two subcommands cover the asset lifecycle:
//! - `derive`: turn authored originals into density-tier WebP variants
//! - `placeholder`: build a lightweight replica of the site with flat
//!   placeholder canvases instead of photography

#![allow(dead_code)]

mod asset;
mod cli;
mod codec;
mod config;
mod logger;
mod placeholder;
mod report;
mod variant;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::PipelineConfig;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = PipelineConfig::load(cli)?;

    match &cli.command {
        Commands::Derive { .. } => cli::derive::run(&config),
        Commands::Placeholder { .. } => cli::placeholder::run(&config),
    }
}
