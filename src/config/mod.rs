//! Pipeline configuration management for `sitepix.toml`.
//!
//! ```text
//! config/
//! ├── section.rs     # [derive] and [placeholder] sections
//! ├── error.rs       # ConfigError
//! └── mod.rs         # PipelineConfig (this file)
//! ```
//!
//! A missing config file is not an error: every field has a default, so
//! the tool runs out of the box and `sitepix.toml` only overrides. CLI
//! options win over the file.

mod error;
mod section;

pub use error::ConfigError;
pub use section::{DeriveConfig, PlaceholderConfig};

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use crate::cli::{Cli, Commands};
use crate::{debug, log};

/// Root configuration structure representing sitepix.toml
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Variant derivation settings
    #[serde(default)]
    pub derive: DeriveConfig,

    /// Placeholder generation settings
    #[serde(default)]
    pub placeholder: PlaceholderConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            derive: DeriveConfig::default(),
            placeholder: PlaceholderConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file; when none exists the
    /// defaults apply and the project root is the current directory.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = path;
                config
            }
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                Self::default()
            }
        };

        let root = config
            .config_path
            .parent()
            .map_or_else(|| std::env::current_dir().unwrap_or_default(), Path::to_path_buf);
        config.root = normalize_path(&root);

        config.apply_command_options(cli);
        config.normalize_paths();
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            log!("warning"; "unknown fields in {}, ignoring:", path.display());
            for field in &ignored {
                eprintln!("- {field}");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Derive { args } => {
                crate::logger::set_verbose(args.verbose);
                Self::update_option(&mut self.derive.source, args.source.as_ref());
                Self::update_option(&mut self.derive.dest, args.dest.as_ref());
                Self::update_option(&mut self.derive.quality, args.quality.as_ref());
                Self::update_option(&mut self.derive.generate_fallback, args.fallback.as_ref());
                Self::update_option(&mut self.derive.clean_dest, args.clean.as_ref());
                Self::update_option(&mut self.derive.keep_originals, args.keep.as_ref());
            }
            Commands::Placeholder { args } => {
                crate::logger::set_verbose(args.verbose);
                Self::update_option(&mut self.placeholder.images, args.images.as_ref());
                Self::update_option(&mut self.placeholder.dist, args.dist.as_ref());
                Self::update_option(&mut self.placeholder.dest, args.dest.as_ref());
                Self::update_option(&mut self.placeholder.quality, args.quality.as_ref());
                Self::update_option(&mut self.placeholder.background, args.background.as_ref());
                Self::update_option(&mut self.placeholder.foreground, args.foreground.as_ref());
            }
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Normalize all paths relative to the root directory.
    fn normalize_paths(&mut self) {
        let root = self.root.clone();
        for path in [
            &mut self.derive.source,
            &mut self.derive.dest,
            &mut self.placeholder.images,
            &mut self.placeholder.dist,
            &mut self.placeholder.dest,
        ] {
            *path = normalize_path(&root.join(path.as_path()));
        }
    }

    /// Validate configuration values.
    ///
    /// Collects all errors into a single message so a broken config is
    /// reported once, not field by field across runs.
    fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        for (field, quality) in [
            ("derive.quality", self.derive.quality),
            ("placeholder.quality", self.placeholder.quality),
        ] {
            if !(1..=100).contains(&quality) {
                errors.push(format!("{field} must be between 1 and 100, got {quality}"));
            }
        }

        if self.derive.max_width == 0 || self.derive.max_height == 0 {
            errors.push(format!(
                "derive.max_width and derive.max_height must be at least 1, got {}x{}",
                self.derive.max_width, self.derive.max_height
            ));
        }

        for (field, color) in [
            ("placeholder.background", &self.placeholder.background),
            ("placeholder.foreground", &self.placeholder.foreground),
        ] {
            if color.is_empty() {
                errors.push(format!("{field} must not be empty"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors.join("; ")).into())
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }
}

/// Resolve a path to absolute form without requiring it to exist.
fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Find config file by searching upward from current directory.
fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }
        current = current.parent()?;
    }
}

/// Parse config from a TOML fragment, panicking on unknown fields
/// (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> PipelineConfig {
    let (parsed, ignored) = PipelineConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {ignored:?}"
    );
    parsed
}
