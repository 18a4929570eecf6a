//! `[render]` section configuration.
//!
//! The fixed strings injected into every generated page: the composed page
//! title parts, the single category tag, the fallback cover image, and the
//! external renderer loaded by each entry page.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[render]` section in riji.toml - per-page fixed strings.
///
/// # Example
/// ```toml
/// [render]
/// title_prefix = "大学自述"
/// site_name = "hecode🍓🥝"
/// category = "杂谈"
/// fallback_cover = "/images/covers/default.png"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Prefix of the composed page title: `{title_prefix} · {entry} | {site_name}`.
    #[serde(default = "defaults::render::title_prefix")]
    #[educe(Default = defaults::render::title_prefix())]
    pub title_prefix: String,

    /// Suffix of the composed page title.
    #[serde(default = "defaults::render::site_name")]
    #[educe(Default = defaults::render::site_name())]
    pub site_name: String,

    /// The single classification label applied to every generated page and
    /// listing item. Not derived from content.
    #[serde(default = "defaults::render::category")]
    #[educe(Default = defaults::render::category())]
    pub category: String,

    /// Cover image used by listing items; no real thumbnail exists.
    #[serde(default = "defaults::render::fallback_cover")]
    #[educe(Default = defaults::render::fallback_cover())]
    pub fallback_cover: String,

    /// URL of the client-side text renderer loaded by each entry page.
    #[serde(default = "defaults::render::renderer")]
    #[educe(Default = defaults::render::renderer())]
    pub renderer: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_render_config_defaults() {
        let config = SiteConfig::from_str("").unwrap();

        assert_eq!(config.render.title_prefix, "大学自述");
        assert_eq!(config.render.site_name, "hecode🍓🥝");
        assert_eq!(config.render.category, "杂谈");
        assert!(config.render.renderer.contains("marked"));
    }

    #[test]
    fn test_render_config_override() {
        let config = r#"
            [render]
            category = "随笔"
            fallback_cover = "/img/cover.png"
        "#;
        let config = SiteConfig::from_str(config).unwrap();

        assert_eq!(config.render.category, "随笔");
        assert_eq!(config.render.fallback_cover, "/img/cover.png");
        // Composed-title parts keep their defaults
        assert_eq!(config.render.title_prefix, "大学自述");
    }
}
