//! Site configuration management for `riji.toml`.
//!
//! # Sections
//!
//! | Section    | Purpose                                            |
//! |------------|----------------------------------------------------|
//! | `[source]` | The diary document the entries are split from      |
//! | `[output]` | Pages the run writes or rewrites                   |
//! | `[render]` | Fixed strings injected into every generated page   |
//!
//! Every field defaults to the target site's layout, so an empty (or absent)
//! config file is a complete configuration.
//!
//! # Example
//!
//! ```toml
//! [source]
//! document = "大学自述.md"
//!
//! [output]
//! template = "about/index.html"
//! diary = "diary"
//!
//! [render]
//! category = "杂谈"
//! ```

pub mod defaults;
mod error;
mod output;
mod render;
mod source;

pub use output::OutputConfig;
pub use render::RenderConfig;
pub use source::SourceConfig;

use error::ConfigError;

use anyhow::Result;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing riji.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the site root (set after loading)
    #[serde(skip)]
    pub root: PathBuf,

    /// Source document settings
    #[serde(default)]
    pub source: SourceConfig,

    /// Output page settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Page rendering settings
    #[serde(default)]
    pub render: RenderConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Anchor all configured paths to `root` and normalize them to absolute
    /// paths.
    pub fn update_with_root(&mut self, root: &Path) {
        let root = Self::normalize_path(root);

        self.source.document = Self::normalize_path(&root.join(&self.source.document));

        self.output.template = Self::normalize_path(&root.join(&self.output.template));
        self.output.diary = Self::normalize_path(&root.join(&self.output.diary));
        self.output.index = Self::normalize_path(&root.join(&self.output.index));
        self.output.tag_page = Self::normalize_path(&root.join(&self.output.tag_page));
        self.output.archive_page = Self::normalize_path(&root.join(&self.output.archive_page));
        self.output.permalinks = Self::normalize_path(&root.join(&self.output.permalinks));

        self.root = root;
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate that the artifacts a sync run cannot proceed without exist.
    ///
    /// The tag and archive listing pages are deliberately not checked here:
    /// the listing phase is best-effort and reports its own failures.
    pub fn validate(&self) -> Result<()> {
        for (field, path) in [
            ("[source.document]", &self.source.document),
            ("[output.template]", &self.output.template),
            ("[output.index]", &self.output.index),
        ] {
            if !path.exists() {
                return Err(ConfigError::Validation(format!(
                    "{field} not found: {}",
                    path.display()
                ))
                .into());
            }
            if !path.is_file() {
                return Err(ConfigError::Validation(format!(
                    "{field} is not a file: {}",
                    path.display()
                ))
                .into());
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
