//! Entry extraction and section bounds resolution.
//!
//! The diary document mixes two conventions for marking a new entry,
//! sometimes within the same file: a `#### ` sub-heading, or a bare line
//! starting with a date in one of the two recognized notations. Boundary
//! detection is therefore an ordered list of line matchers, first match wins,
//! rather than a single canonical marker.

use regex::Regex;
use std::sync::LazyLock;

/// Sub-heading prefix marking (some, not all) entry starts.
const HEADING_MARKER: &str = "#### ";

/// The two bare-date grammars accepted at the start of a trimmed line.
static DATE_LINE_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"^\d{4}\.\d{1,2}\.\d{1,2}").unwrap(),
        Regex::new(r"^\d{4}年\d{1,2}月\d{1,2}日").unwrap(),
    ]
});

/// Whether a trimmed line starts with a recognized bare date.
fn is_date_line(line: &str) -> bool {
    DATE_LINE_PATTERNS.iter().any(|re| re.is_match(line))
}

/// Whether a trimmed line opens a new entry.
fn is_entry_boundary(line: &str) -> bool {
    line.starts_with(HEADING_MARKER) || is_date_line(line)
}

/// Walk the document once and collect entry titles in encounter order.
///
/// A heading line contributes its remainder (trimmed, non-empty); any other
/// line matching a bare date grammar contributes its whole trimmed text.
/// Duplicates (exact trimmed text) are skipped - first occurrence wins. An
/// empty result means the document has no usable entries; callers treat that
/// as fatal.
pub fn extract_titles(document: &str) -> Vec<String> {
    let mut titles: Vec<String> = Vec::new();

    for raw in document.lines() {
        let line = raw.trim();
        if let Some(rest) = line.strip_prefix(HEADING_MARKER) {
            let title = rest.trim();
            if !title.is_empty() && !titles.iter().any(|t| t == title) {
                titles.push(title.to_owned());
            }
            continue;
        }
        if is_date_line(line) && !titles.iter().any(|t| t == line) {
            titles.push(line.to_owned());
        }
    }

    titles
}

/// Locate the `[start, end)` line range best capturing `title`'s section.
///
/// `start` is the first heading line whose text equals the target or has it
/// as a prefix, or the first non-heading line whose trimmed text does. When
/// the title cannot be matched at all the whole document is returned - a
/// lenient default, not a failure. `end` is the next entry boundary after
/// `start`, or the end of the document.
#[allow(dead_code)] // raw range counterpart of `section_text`
pub fn section_bounds(document: &str, title: &str) -> (usize, usize) {
    let lines: Vec<&str> = document.lines().collect();
    match find_start(&lines, title) {
        Some(start) => (start, find_end(&lines, start)),
        None => (0, lines.len()),
    }
}

/// The entry body: the resolved section without its own boundary line,
/// joined and trimmed. On an unmatched title the whole document is the body.
pub fn section_text(document: &str, title: &str) -> String {
    let lines: Vec<&str> = document.lines().collect();
    match find_start(&lines, title) {
        Some(start) => {
            let end = find_end(&lines, start);
            lines[start + 1..end].join("\n").trim().to_owned()
        }
        None => document.trim().to_owned(),
    }
}

fn find_start(lines: &[&str], title: &str) -> Option<usize> {
    let target = title.trim();
    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if let Some(heading) = line.strip_prefix(HEADING_MARKER) {
            let heading = heading.trim();
            if heading == target || heading.starts_with(target) {
                return Some(i);
            }
        } else if line == target || line.starts_with(target) {
            return Some(i);
        }
    }
    None
}

fn find_end(lines: &[&str], start: usize) -> usize {
    for (j, raw) in lines.iter().enumerate().skip(start + 1) {
        if is_entry_boundary(raw.trim()) {
            return j;
        }
    }
    lines.len()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_ENTRIES: &str = "#### 2025.1.2 标题A\nbody A\n#### 2025.1.3 标题B\nbody B\n";

    #[test]
    fn test_extract_titles_from_headings() {
        let titles = extract_titles(TWO_ENTRIES);
        assert_eq!(titles, vec!["2025.1.2 标题A", "2025.1.3 标题B"]);
    }

    #[test]
    fn test_extract_titles_from_bare_date_lines() {
        let doc = "2025.4.26\nfirst day\n2025年6月7日\nanother day\n";
        let titles = extract_titles(doc);
        assert_eq!(titles, vec!["2025.4.26", "2025年6月7日"]);
    }

    #[test]
    fn test_extract_titles_mixed_conventions() {
        let doc = "2025.4.26\nintro\n#### 2025.4.27 随笔\nbody\n2025年6月7日\nmore\n";
        let titles = extract_titles(doc);
        assert_eq!(titles, vec!["2025.4.26", "2025.4.27 随笔", "2025年6月7日"]);
    }

    #[test]
    fn test_extract_titles_first_occurrence_wins() {
        let doc = "#### 2025.1.2\na\n#### 2025.1.2\nb\n2025.1.2\nc\n";
        let titles = extract_titles(doc);
        assert_eq!(titles, vec!["2025.1.2"]);
    }

    #[test]
    fn test_extract_titles_skips_empty_heading() {
        let doc = "#### \n#### 标题\n";
        let titles = extract_titles(doc);
        assert_eq!(titles, vec!["标题"]);
    }

    #[test]
    fn test_extract_titles_ignores_plain_text() {
        let doc = "just some prose\nwith no markers at all\n";
        assert!(extract_titles(doc).is_empty());
    }

    #[test]
    fn test_extract_titles_empty_document() {
        assert!(extract_titles("").is_empty());
    }

    #[test]
    fn test_extract_titles_date_requires_line_start() {
        // A date somewhere inside a line is not an entry marker
        let doc = "我在 2025.4.26 写下了这些\n";
        assert!(extract_titles(doc).is_empty());
    }

    #[test]
    fn test_section_bounds_exact_heading() {
        let (start, end) = section_bounds(TWO_ENTRIES, "2025.1.2 标题A");
        assert_eq!((start, end), (0, 2));
    }

    #[test]
    fn test_section_bounds_last_entry_runs_to_eof() {
        let (start, end) = section_bounds(TWO_ENTRIES, "2025.1.3 标题B");
        assert_eq!((start, end), (2, 4));
    }

    #[test]
    fn test_section_bounds_prefix_match() {
        // Target may be a prefix of the actual heading text
        let doc = "#### 5.1 23:00    补充一点\nbody\n";
        let (start, end) = section_bounds(doc, "5.1 23:00");
        assert_eq!((start, end), (0, 2));
    }

    #[test]
    fn test_section_bounds_bare_date_terminates_section() {
        // A bare date line ends the previous section just like a heading does
        let doc = "#### 2025.4.27 随笔\nline 1\nline 2\n2025年6月7日\nnext entry\n";
        let (start, end) = section_bounds(doc, "2025.4.27 随笔");
        assert_eq!((start, end), (0, 3));
    }

    #[test]
    fn test_section_bounds_unmatched_title_falls_back_to_whole_document() {
        let (start, end) = section_bounds(TWO_ENTRIES, "不存在的标题");
        assert_eq!((start, end), (0, 4));
    }

    #[test]
    fn test_section_text_excludes_boundary_line() {
        assert_eq!(section_text(TWO_ENTRIES, "2025.1.2 标题A"), "body A");
        assert_eq!(section_text(TWO_ENTRIES, "2025.1.3 标题B"), "body B");
    }

    #[test]
    fn test_section_text_bare_date_entry() {
        let doc = "2025.4.26\nfirst day\nstill first day\n2025年6月7日\nsecond\n";
        assert_eq!(
            section_text(doc, "2025.4.26"),
            "first day\nstill first day"
        );
    }

    #[test]
    fn test_section_text_unmatched_title_is_whole_document() {
        assert_eq!(section_text(TWO_ENTRIES, "不存在"), TWO_ENTRIES.trim());
    }
}
