//! `[output]` section configuration.
//!
//! Names every page a sync run writes or rewrites. All paths are interpreted
//! relative to the site root until [`super::SiteConfig::update_with_root`]
//! anchors them.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[output]` section in riji.toml - generated and rewritten pages.
///
/// # Example
/// ```toml
/// [output]
/// template = "about/index.html"
/// diary = "diary"
/// index = "diary/index.html"
/// tag_page = "tags/杂谈/index.html"
/// archive_page = "archives/index.html"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Template page used as the base for every rendered entry page.
    #[serde(default = "defaults::output::template")]
    #[educe(Default = defaults::output::template())]
    pub template: PathBuf,

    /// Directory receiving one `{slug}.html` page per entry.
    #[serde(default = "defaults::output::diary")]
    #[educe(Default = defaults::output::diary())]
    pub diary: PathBuf,

    /// Legacy table-of-contents page; its anchor list is fully rebuilt.
    #[serde(default = "defaults::output::index")]
    #[educe(Default = defaults::output::index())]
    pub index: PathBuf,

    /// Tag listing page receiving one item fragment per dated entry.
    #[serde(default = "defaults::output::tag_page")]
    #[educe(Default = defaults::output::tag_page())]
    pub tag_page: PathBuf,

    /// Archive listing page receiving the same item fragments.
    #[serde(default = "defaults::output::archive_page")]
    #[educe(Default = defaults::output::archive_page())]
    pub archive_page: PathBuf,

    /// Root under which dated entries get their `/{year}/{month}/{day}/{slug}/`
    /// permalink copy.
    #[serde(default = "defaults::output::permalinks")]
    #[educe(Default = defaults::output::permalinks())]
    pub permalinks: PathBuf,
}
