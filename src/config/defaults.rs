//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization. The values
//! are the fixed constants of the target site layout, so a config file only
//! needs to name what differs.

// ============================================================================
// [source] Section Defaults
// ============================================================================

pub mod source {
    use std::path::PathBuf;

    pub fn document() -> PathBuf {
        "大学自述.md".into()
    }
}

// ============================================================================
// [output] Section Defaults
// ============================================================================

pub mod output {
    use std::path::PathBuf;

    pub fn template() -> PathBuf {
        "about/index.html".into()
    }

    pub fn diary() -> PathBuf {
        "diary".into()
    }

    pub fn index() -> PathBuf {
        "diary/index.html".into()
    }

    pub fn tag_page() -> PathBuf {
        "tags/杂谈/index.html".into()
    }

    pub fn archive_page() -> PathBuf {
        "archives/index.html".into()
    }

    pub fn permalinks() -> PathBuf {
        ".".into()
    }
}

// ============================================================================
// [render] Section Defaults
// ============================================================================

pub mod render {
    pub fn title_prefix() -> String {
        "大学自述".into()
    }

    pub fn site_name() -> String {
        "hecode🍓🥝".into()
    }

    pub fn category() -> String {
        "杂谈".into()
    }

    pub fn fallback_cover() -> String {
        "/images/covers/default.png".into()
    }

    pub fn renderer() -> String {
        "https://cdn.jsdelivr.net/npm/marked/marked.min.js".into()
    }
}
