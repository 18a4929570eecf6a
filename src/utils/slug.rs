//! Slug generation for entry titles.
//!
//! Maps an arbitrary entry title to a filesystem- and URL-safe token. Titles
//! are mostly Chinese, so the CJK Unified Ideographs block is kept alongside
//! word characters, dashes and dots; everything else is dropped.
//!
//! There is no collision avoidance: two titles may legitimately collapse to
//! the same slug, in which case the later entry overwrites the earlier one's
//! output page (known limitation of the scheme).

use regex::Regex;
use std::sync::LazyLock;

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static RE_DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\-.\x{4E00}-\x{9FA5}]").unwrap());
static RE_DASH_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());

/// Convert an entry title to its slug.
///
/// Deterministic and idempotent: `slugify(slugify(t)) == slugify(t)`.
pub fn slugify(title: &str) -> String {
    let s = title.trim();
    let s = RE_WHITESPACE.replace_all(s, "-");
    let s = s.replace(':', "-");
    let s = RE_DISALLOWED.replace_all(&s, "");
    RE_DASH_RUNS.replace_all(&s, "-").into_owned()
}

// ============================================================================
// Tests
// ============================================================================
