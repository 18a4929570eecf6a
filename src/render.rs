//! Entry page rendering.
//!
//! Takes the site's template page as opaque text and rewrites a fixed set of
//! anchor regions to produce one standalone entry page. There is no DOM: each
//! anchor is a known literal pattern, each substitution is first-match-only,
//! and a missing anchor degrades that one substitution to a silent no-op
//! rather than failing the page.
//!
//! The entry body is not converted here. It is embedded verbatim in a raw
//! `<script type="text/markdown">` block and rendered client-side by the
//! external renderer the page loads.

use crate::{
    config::SiteConfig,
    utils::html::{escape_attr, escape_script_close, escape_text},
};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_TITLE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<title>.*?</title>").unwrap());

static RE_SITE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)(<div id="page-site-info">\s*<h1 id="site-title">)(.*?)(</h1>)"#).unwrap()
});

static RE_OG_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<meta property="og:type" content="[^"]+">"#).unwrap());

static RE_IS_POST: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(isPost:\s*)false").unwrap());

static RE_ARTICLE_CONTAINER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)(<div id="article-container">)(.*?)(</div></div>)"#).unwrap()
});

/// Bootstrap that renders the mounted raw block into the mount element at
/// page load, undoing the script-close escape on the block's text first so
/// the rendered output matches the source body byte for byte.
const RENDER_BOOTSTRAP: &str = r"<script>document.getElementById('md-container').innerHTML = marked.parse(document.getElementById('md').textContent.replace(/<\\\/script>/g, '<' + '/script>'));</script>";

/// Render one standalone entry page from the template.
///
/// Applies, in order, each exactly once on its first anchor match:
/// 1. `<title>` content
/// 2. site-header title text
/// 3. `og:type` meta -> `article`
/// 4. `isPost: false` -> `true` (all occurrences; it is a textual flag)
/// 5. `article:tag` meta injected before `</head>`
/// 6. the article-container region -> mount + raw body block + renderer +
///    bootstrap + tag link
pub fn render_entry_page(
    template: &str,
    title: &str,
    body: &str,
    config: &'static SiteConfig,
) -> String {
    let page_title = format!(
        "{} · {} | {}",
        config.render.title_prefix,
        escape_text(title),
        config.render.site_name
    );

    let html = RE_TITLE_TAG.replace(template, |_: &Captures| {
        format!("<title>{page_title}</title>")
    });
    let html = RE_SITE_HEADER.replace(&html, |caps: &Captures| {
        format!("{}{}{}", &caps[1], page_title, &caps[3])
    });
    let html = RE_OG_TYPE.replace(&html, r#"<meta property="og:type" content="article">"#);
    let html = RE_IS_POST.replace_all(&html, "${1}true");
    let html = html.replacen(
        "</head>",
        &format!(
            r#"<meta property="article:tag" content="{}"></head>"#,
            escape_attr(&config.render.category)
        ),
        1,
    );

    let block = article_block(body, config);
    RE_ARTICLE_CONTAINER
        .replace(&html, |caps: &Captures| {
            format!("{}{}{}", &caps[1], block, &caps[3])
        })
        .into_owned()
}

/// The replacement content of the article container: an empty mount element,
/// the raw body block, the external renderer, the bootstrap, and the fixed
/// tag link shown under the article.
fn article_block(body: &str, config: &'static SiteConfig) -> String {
    let category = &config.render.category;
    let tag_link = format!(
        r#"<div class="tag_share"><div class="post-meta__tag-list"><a class="post-meta__tags" href="/tags/{}/">{}</a></div></div>"#,
        urlencoding::encode(category),
        escape_text(category),
    );

    format!(
        concat!(
            r#"<div id="md-container"></div>"#,
            r#"<script id="md" type="text/markdown">{body}</script>"#,
            r#"<script src="{renderer}"></script>"#,
            "{bootstrap}",
            "{tag_link}",
        ),
        body = escape_script_close(body),
        renderer = config.render.renderer,
        bootstrap = RENDER_BOOTSTRAP,
        tag_link = tag_link,
    )
}

// ============================================================================
// Tests
// ============================================================================
