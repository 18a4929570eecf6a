//! Site synchronization orchestration.
//!
//! One run walks four strictly sequential phases:
//!
//! ```text
//! sync_site()
//!     │
//!     ├── extracting        split the diary into titled entries (empty = fatal)
//!     ├── rendering-pages   one page per entry, plus a permalink copy per dated entry
//!     ├── rebuilding-index  full overwrite of the legacy anchor list
//!     └── syncing-listings  best-effort insertion into the tag/archive pages
//! ```
//!
//! The first three phases must succeed; a listing failure is caught here,
//! logged with its cause, and does not fail the run. Nothing is transactional
//! across the four artifacts.

use crate::{
    config::SiteConfig,
    extract::{extract_titles, section_text},
    listing::{listing_item, year_marker},
    log,
    render::render_entry_page,
    utils::{
        date::EntryDate,
        fs::{read_text, write_text},
        html::{escape_text, unescape_text},
        slug::slugify,
    },
};
use anyhow::{Result, anyhow, bail};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Opening anchor of the item container in the tag/archive listing pages.
const LIST_OPEN: &str = r#"<div class="article-sort">"#;

/// Pagination anchor; the item fragment block is inserted right before it.
const PAGINATION: &str = r#"<nav id="pagination">"#;

/// The legacy index's single list region, always rebuilt as a whole.
static RE_TOC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)(<ul class="toc">)(.*?)(</ul>)"#).unwrap());

/// Links of the pre-split index layout (`entry.html?h=<title>`).
static RE_LEGACY_TARGET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href="\./entry\.html\?h=([^"]+)""#).unwrap());

/// Run one full synchronization pass.
pub fn sync_site(config: &'static SiteConfig) -> Result<()> {
    log!("sync"; "start");

    let document = read_text(&config.source.document)?;
    let titles = extract_titles(&document);
    if titles.is_empty() {
        bail!(
            "no entry headings or date lines found in {}",
            config.source.document.display()
        );
    }
    log!("sync"; "{} entries extracted", titles.len());

    let template = read_text(&config.output.template)?;
    render_pages(&document, &titles, &template, config)?;
    rebuild_index(&titles, config)?;

    // Best-effort: a listing failure never rolls back the pages above.
    if let Err(err) = sync_listings(&titles, config) {
        log!("error"; "listing sync failed: {:#}", err);
    }

    log!("sync"; "done");
    Ok(())
}

/// Render and write one page per entry.
///
/// Every entry gets `{diary}/{slug}.html`. A dated entry additionally gets an
/// identical copy at `{permalinks}/{year}/{month}/{day}/{slug}/index.html`,
/// the layout the blog engine serves regular posts from. Both copies are
/// written unconditionally.
fn render_pages(
    document: &str,
    titles: &[String],
    template: &str,
    config: &'static SiteConfig,
) -> Result<()> {
    for title in titles {
        let body = section_text(document, title);
        let page = render_entry_page(template, title, &body, config);
        let slug = slugify(title);

        let path = config.output.diary.join(format!("{slug}.html"));
        write_text(&path, &page)?;
        log!("render"; "wrote {}", path.display());

        if let Some(date) = EntryDate::parse(title) {
            let permalink = config
                .output
                .permalinks
                .join(format!("{:04}", date.year))
                .join(format!("{:02}", date.month))
                .join(format!("{:02}", date.day))
                .join(&slug)
                .join("index.html");
            write_text(&permalink, &page)?;
            log!("render"; "wrote {}", permalink.display());
        }
    }

    log!("render"; "{} entries rendered", titles.len());
    Ok(())
}

/// Replace the index page's whole anchor list with links for every entry.
///
/// A full overwrite, so re-running produces byte-identical output.
fn rebuild_index(titles: &[String], config: &'static SiteConfig) -> Result<()> {
    let index = read_text(&config.output.index)?;
    let legacy = parse_legacy_targets(&index);

    let items = titles
        .iter()
        .map(|title| {
            format!(
                r#"<li><a href="./{}.html">{}</a></li>"#,
                slugify(title),
                escape_text(title)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let rebuilt = RE_TOC.replace(&index, |caps: &Captures| {
        format!("{}\n{}\n{}", &caps[1], items, &caps[3])
    });
    write_text(&config.output.index, &rebuilt)?;

    log!("index"; "list rebuilt: {} entries ({} legacy links dropped)", titles.len(), legacy.len());
    Ok(())
}

/// Entry titles still referenced through the pre-split `entry.html?h=` links.
fn parse_legacy_targets(index: &str) -> Vec<String> {
    RE_LEGACY_TARGET
        .captures_iter(index)
        .map(|caps| unescape_text(&caps[1]).trim().to_owned())
        .collect()
}

/// Insert listing fragments for every dated entry into the tag page and the
/// archive page.
///
/// Per page: each year not yet present gets its marker right after the
/// container-open anchor (check-before-insert keeps markers unique across
/// runs), then the concatenated fragment block goes in front of the
/// pagination anchor as one bulk insertion. The fragment block itself is NOT
/// guarded: a second run inserts a second copy.
fn sync_listings(titles: &[String], config: &'static SiteConfig) -> Result<()> {
    let dated: Vec<(&str, EntryDate)> = titles
        .iter()
        .filter_map(|t| EntryDate::parse(t).map(|d| (t.as_str(), d)))
        .collect();
    if dated.is_empty() {
        log!("listing"; "no dated entries, nothing to insert");
        return Ok(());
    }

    let fragments = dated
        .iter()
        .map(|(title, date)| {
            let url = date.permalink(&slugify(title));
            listing_item(date, &url, title, config)
        })
        .collect::<Vec<_>>()
        .join("\n");

    // Distinct years, first-seen order
    let mut years: Vec<u16> = Vec::new();
    for (_, date) in &dated {
        if !years.contains(&date.year) {
            years.push(date.year);
        }
    }

    for page_path in [&config.output.tag_page, &config.output.archive_page] {
        let mut page = read_text(page_path)?;

        for &year in &years {
            let marker = year_marker(year);
            if page.contains(&marker) {
                continue;
            }
            let at = page.find(LIST_OPEN).ok_or_else(|| {
                anyhow!("container anchor not found in {}", page_path.display())
            })? + LIST_OPEN.len();
            page.insert_str(at, &marker);
        }

        let at = page
            .find(PAGINATION)
            .ok_or_else(|| anyhow!("pagination anchor not found in {}", page_path.display()))?;
        page.insert_str(at, &fragments);

        write_text(page_path, &page)?;
        log!("listing"; "{} items into {}", dated.len(), page_path.display());
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, path::Path};

    const TEMPLATE: &str = r#"<!DOCTYPE html><html><head>
<title>hecode🍓🥝</title>
<meta property="og:type" content="website">
<script>var GLOBAL_CONFIG_SITE = {isPost: false}</script>
</head><body>
<div id="page-site-info"><h1 id="site-title">hecode🍓🥝</h1></div>
<div id="content"><div id="article-container"><p>about me</p></div></div>
</body></html>"#;

    const INDEX: &str = r#"<html><body>
<a href="./entry.html?h=2024.12.31">old link</a>
<ul class="toc"><li>stale</li></ul>
</body></html>"#;

    const LISTING: &str = r#"<html><body>
<div class="article-sort">
</div>
<nav id="pagination"></nav>
</body></html>"#;

    const DIARY: &str = "#### 2025.1.2 标题A\nbody A\n#### 2025.1.3 标题B\nbody B\n#### 随笔杂记\nno date here\n";

    /// Lay out a minimal site under `root` using the default config paths.
    fn write_site(root: &Path, diary: &str) {
        write_text(&root.join("大学自述.md"), diary).unwrap();
        write_text(&root.join("about/index.html"), TEMPLATE).unwrap();
        write_text(&root.join("diary/index.html"), INDEX).unwrap();
        write_text(&root.join("tags/杂谈/index.html"), LISTING).unwrap();
        write_text(&root.join("archives/index.html"), LISTING).unwrap();
    }

    fn site_config(root: &Path) -> &'static SiteConfig {
        let mut config = SiteConfig::from_str("").unwrap();
        config.update_with_root(root);
        Box::leak(Box::new(config))
    }

    #[test]
    fn test_sync_writes_entry_pages() {
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path(), DIARY);
        let config = site_config(dir.path());

        sync_site(config).unwrap();

        let page_a = fs::read_to_string(config.output.diary.join("2025.1.2-标题A.html")).unwrap();
        assert!(page_a.contains("<title>大学自述 · 2025.1.2 标题A | hecode🍓🥝</title>"));
        assert!(page_a.contains(r#"<script id="md" type="text/markdown">body A</script>"#));
        assert!(config.output.diary.join("2025.1.3-标题B.html").exists());
    }

    #[test]
    fn test_sync_dual_writes_dated_entries_to_permalinks() {
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path(), DIARY);
        let config = site_config(dir.path());

        sync_site(config).unwrap();

        let permalink = config
            .output
            .permalinks
            .join("2025/01/02/2025.1.2-标题A/index.html");
        let slug_page = fs::read_to_string(config.output.diary.join("2025.1.2-标题A.html")).unwrap();
        assert_eq!(fs::read_to_string(&permalink).unwrap(), slug_page);

        // The undated entry gets no permalink copy
        assert!(config.output.diary.join("随笔杂记.html").exists());
        assert!(!config.output.permalinks.join("随笔杂记").exists());
    }

    #[test]
    fn test_sync_rebuilds_index() {
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path(), DIARY);
        let config = site_config(dir.path());

        sync_site(config).unwrap();

        let index = fs::read_to_string(&config.output.index).unwrap();
        assert!(index.contains(r#"<li><a href="./2025.1.2-标题A.html">2025.1.2 标题A</a></li>"#));
        assert!(index.contains(r#"<li><a href="./随笔杂记.html">随笔杂记</a></li>"#));
        assert!(!index.contains("stale"));
        // Content outside the list region is untouched
        assert!(index.contains("old link"));
    }

    #[test]
    fn test_sync_index_rebuild_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path(), DIARY);
        let config = site_config(dir.path());

        sync_site(config).unwrap();
        let first = fs::read_to_string(&config.output.index).unwrap();
        sync_site(config).unwrap();
        let second = fs::read_to_string(&config.output.index).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_sync_inserts_listing_items_and_year_marker() {
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path(), DIARY);
        let config = site_config(dir.path());

        sync_site(config).unwrap();

        for page_path in [&config.output.tag_page, &config.output.archive_page] {
            let page = fs::read_to_string(page_path).unwrap();
            assert_eq!(
                page.matches(r#"<div class="article-sort-item year">2025</div>"#).count(),
                1
            );
            assert_eq!(page.matches(r#"<div class="article-sort-item">"#).count(), 2);
            assert!(page.contains(r#"href="/2025/01/02/2025.1.2-标题A/""#));
            // Marker sits right after the container-open anchor
            let open = page.find(r#"<div class="article-sort">"#).unwrap();
            let marker = page.find(r#"<div class="article-sort-item year">"#).unwrap();
            assert_eq!(marker, open + r#"<div class="article-sort">"#.len());
            // Fragments sit right before the pagination anchor
            assert!(page.find("article-sort-item-title").unwrap() < page.find(PAGINATION).unwrap());
        }
    }

    #[test]
    fn test_sync_twice_keeps_one_marker_but_duplicates_fragments() {
        // Marker insertion is guarded; fragment insertion deliberately is not.
        // The second run doubles every item.
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path(), DIARY);
        let config = site_config(dir.path());

        sync_site(config).unwrap();
        sync_site(config).unwrap();

        for page_path in [&config.output.tag_page, &config.output.archive_page] {
            let page = fs::read_to_string(page_path).unwrap();
            assert_eq!(
                page.matches(r#"<div class="article-sort-item year">2025</div>"#).count(),
                1
            );
            assert_eq!(page.matches(r#"<div class="article-sort-item">"#).count(), 4);
        }
    }

    #[test]
    fn test_sync_listing_failure_does_not_fail_the_run() {
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path(), DIARY);
        // Break one listing page: no anchors at all
        let config = site_config(dir.path());
        fs::write(&config.output.tag_page, "<html><body>no anchors</body></html>").unwrap();

        sync_site(config).unwrap();

        // Pages and index were still produced
        assert!(config.output.diary.join("2025.1.2-标题A.html").exists());
        let index = fs::read_to_string(&config.output.index).unwrap();
        assert!(index.contains("2025.1.2-标题A.html"));
    }

    #[test]
    fn test_sync_missing_listing_page_is_non_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path(), DIARY);
        let config = site_config(dir.path());
        fs::remove_file(&config.output.archive_page).unwrap();

        sync_site(config).unwrap();
        assert!(config.output.diary.join("2025.1.2-标题A.html").exists());
    }

    #[test]
    fn test_sync_empty_document_is_fatal_before_any_write() {
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path(), "just prose\nwith no entry markers\n");
        let config = site_config(dir.path());
        let index_before = fs::read_to_string(&config.output.index).unwrap();

        let err = sync_site(config).unwrap_err().to_string();
        assert!(err.contains("no entry headings or date lines"));

        // Nothing was written
        assert!(!config.output.diary.join("随笔杂记.html").exists());
        assert_eq!(fs::read_to_string(&config.output.index).unwrap(), index_before);
    }

    #[test]
    fn test_sync_undated_entries_skip_listing_insertion() {
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path(), "#### 随笔\nbody\n");
        let config = site_config(dir.path());

        sync_site(config).unwrap();

        let page = fs::read_to_string(&config.output.tag_page).unwrap();
        assert_eq!(page, LISTING);
    }

    #[test]
    fn test_parse_legacy_targets() {
        let targets = parse_legacy_targets(INDEX);
        assert_eq!(targets, vec!["2024.12.31"]);
    }

    #[test]
    fn test_parse_legacy_targets_unescapes_entities() {
        let index = r#"<a href="./entry.html?h=a &amp; b">x</a>"#;
        assert_eq!(parse_legacy_targets(index), vec!["a & b"]);
    }
}
