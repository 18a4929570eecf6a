//! Listing item fragments.
//!
//! One dated entry becomes one fixed-shape item fragment, reused verbatim by
//! both the tag listing page and the archive listing page. The fragment
//! mirrors the theme's archive-item markup: thumbnail link, date block, title
//! link. No real thumbnail exists, so the image points at the generic
//! fallback cover and carries an `onerror` guard re-pointing to it.

use crate::{
    config::SiteConfig,
    utils::{
        date::EntryDate,
        html::{escape_attr, escape_text},
    },
};

/// Build one listing item fragment. Pure function, no side effects.
pub fn listing_item(
    date: &EntryDate,
    url: &str,
    title: &str,
    config: &'static SiteConfig,
) -> String {
    let cover = &config.render.fallback_cover;
    let title_attr = escape_attr(title);

    format!(
        concat!(
            r#"<div class="article-sort-item">"#,
            r#"<a class="article-sort-item-img" href="{url}" title="{title_attr}">"#,
            r#"<img src="{cover}" onerror="this.onerror=null;this.src='{cover}'" alt="{title_attr}">"#,
            "</a>",
            r#"<div class="article-sort-item-info">"#,
            r#"<div class="article-sort-item-time">"#,
            r#"<i class="fas fa-calendar-alt"></i> "#,
            r#"<time datetime="{datetime}" title="发表于 {ymd}">{ymd}</time>"#,
            "</div>",
            r#"<a class="article-sort-item-title" href="{url}" title="{title_attr}">{title}</a>"#,
            "</div></div>",
        ),
        url = url,
        title_attr = title_attr,
        cover = cover,
        datetime = date.to_rfc3339(),
        ymd = date.ymd(),
        title = escape_text(title),
    )
}

/// The one-per-year heading element of a chronological listing page. Its
/// presence in the page text is the idempotency guard for marker insertion.
pub fn year_marker(year: u16) -> String {
    format!(r#"<div class="article-sort-item year">{year}</div>"#)
}

// ============================================================================
// Tests
// ============================================================================
