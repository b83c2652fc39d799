//! Text sanitation checks for short free-text input (titles, tags, excerpts).
//!
//! Provides:
//! - [`contains_invisible`] - flag strings carrying invisible/control characters
//! - [`strip_invisible`] - repair variant: normalize and drop those characters
//! - [`strip_markdown`] - plain-text preview of inline markdown emphasis
//! - [`excerpt`] - bounded plain-text preview for post listings

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::config;

static INVISIBLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(config::INVISIBLE_CHAR_PATTERN).expect("invisible-character pattern must compile")
});

/// Emphasis delimiter pairs, applied in order: inline code first, then the
/// two-character strong markers before their one-character italic forms.
static EMPHASIS_PATTERNS: Lazy<[Regex; 5]> = Lazy::new(|| {
    let compile = |pattern| Regex::new(pattern).expect("emphasis pattern must compile");
    [
        compile(r"`([^`]*)`"),
        compile(r"\*\*(.*?)\*\*"),
        compile(r"__(.*?)__"),
        compile(r"\*(.*?)\*"),
        compile(r"_(.*?)_"),
    ]
});

static WHITESPACE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern must compile"));

/// Check whether `value` contains an invisible or control character.
///
/// Matches any Unicode "Other" category codepoint (control, format,
/// unassigned, private use) or one of the explicitly named zero-width and
/// spacing characters (NBSP, ZWSP, ZWNJ, ZWJ, word joiner, BOM). Used to
/// flag text fields that may carry steganographic or homoglyph payloads.
pub fn contains_invisible(value: &str) -> bool {
    INVISIBLE_RE.is_match(value)
}

/// Remove invisible characters from `value`, keeping ordinary ASCII
/// whitespace.
///
/// The input is NFC-normalized first so decomposed sequences collapse before
/// filtering. Companion to [`contains_invisible`] for callers that want to
/// repair a field instead of rejecting it.
pub fn strip_invisible(value: &str) -> String {
    value
        .nfc()
        .filter(|c| c.is_ascii_whitespace() || !is_invisible_char(*c))
        .collect()
}

fn is_invisible_char(c: char) -> bool {
    let mut buf = [0u8; 4];
    INVISIBLE_RE.is_match(c.encode_utf8(&mut buf))
}

/// Strip inline code, bold, and italic delimiters, preserving the enclosed
/// text.
///
/// Best-effort textual strip with greedy pair matching; nested or unbalanced
/// delimiters are left as-is. This is a display helper for plain-text
/// previews, NOT a security boundary - it must never be relied upon to
/// neutralize HTML.
pub fn strip_markdown(text: &str) -> String {
    let mut out = text.to_string();
    for pattern in EMPHASIS_PATTERNS.iter() {
        out = pattern.replace_all(&out, "$1").into_owned();
    }
    out
}

/// Produce a bounded plain-text excerpt of markdown `text`.
///
/// Strips emphasis markers, collapses whitespace runs to single spaces, and
/// truncates to `max_chars` characters (never splitting a codepoint),
/// appending an ellipsis only when the text was cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let stripped = strip_markdown(text);
    let collapsed = WHITESPACE_RUN_RE.replace_all(stripped.trim(), " ");

    if collapsed.chars().count() <= max_chars {
        return collapsed.into_owned();
    }
    let mut out: String = collapsed.chars().take(max_chars).collect();
    out.push('…');
    out
}
