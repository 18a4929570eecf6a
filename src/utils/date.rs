//! Entry date parsing and formatting.
//!
//! Diary entry titles carry their date in one of two competing notations:
//! dotted (`2025.4.26`) or Chinese (`2025年6月7日`). Both are recognized only
//! at the start of the title; everything after the date is free text.

use regex::Regex;
use std::sync::LazyLock;

/// Calendar date extracted from an entry title.
///
/// Field values are taken as parsed: no calendar validation is performed, so
/// a title claiming month 13 yields month 13. Titles without a recognizable
/// date prefix are a valid state (`None`), not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl EntryDate {
    /// Parse a date from the prefix of `title`.
    ///
    /// Tries the dotted grammar first, then the Chinese grammar. Returns
    /// `None` when neither matches or a component overflows its field.
    pub fn parse(title: &str) -> Option<Self> {
        static RE_DOTTED: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^(?P<y>\d{4})\.(?P<m>\d{1,2})\.(?P<d>\d{1,2})").unwrap()
        });
        static RE_CHINESE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^(?P<y>\d{4})年(?P<m>\d{1,2})月(?P<d>\d{1,2})日").unwrap()
        });

        let caps = RE_DOTTED
            .captures(title)
            .or_else(|| RE_CHINESE.captures(title))?;

        Some(Self {
            year: caps["y"].parse().ok()?,
            month: caps["m"].parse().ok()?,
            day: caps["d"].parse().ok()?,
        })
    }

    /// Zero-padded `YYYY-MM-DD` display form.
    pub fn ymd(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// ISO-8601 timestamp at midnight UTC, as emitted into `<time datetime>`.
    pub fn to_rfc3339(&self) -> String {
        format!(
            "{:04}-{:02}-{:02}T00:00:00.000Z",
            self.year, self.month, self.day
        )
    }

    /// The dated, hierarchical URL path used by the blog engine for posts.
    pub fn permalink(&self, slug: &str) -> String {
        format!(
            "/{:04}/{:02}/{:02}/{}/",
            self.year, self.month, self.day, slug
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
