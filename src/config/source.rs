//! `[source]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[source]` section in riji.toml - the diary document.
///
/// # Example
/// ```toml
/// [source]
/// document = "大学自述.md"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// The flat chronological diary document the entries are split from.
    #[serde(default = "defaults::source::document")]
    #[educe(Default = defaults::source::document())]
    pub document: PathBuf,
}
