//! Heading anchor ids.
//!
//! A post-processing pass over the parsed event stream: each heading's
//! inline text is slugified and attached as the `id` attribute on the
//! heading's opening tag.

use pulldown_cmark::{Event, Tag, TagEnd};

/// Derive a URL/anchor-safe identifier from heading text.
///
/// Lowercases, trims, collapses whitespace runs to a single hyphen, and
/// drops remaining ASCII punctuation (except `-` and `_`). Non-ASCII
/// characters are preserved so non-English headings keep readable anchors.
/// Idempotent: slugifying an existing slug returns it unchanged.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.trim().to_lowercase().chars() {
        if c.is_whitespace() {
            if !slug.ends_with('-') {
                slug.push('-');
            }
        } else if !c.is_ascii() || c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            slug.push(c);
        }
    }
    slug.trim_matches('-').to_string()
}

/// Attach a slug id to every heading whose text produces a non-empty slug.
///
/// Walks the buffered event stream; for each heading-open token, the inline
/// text up to the matching close token is collected and slugified. Identical
/// headings produce identical ids - collisions are not deduplicated.
pub(crate) fn attach_heading_ids(events: &mut [Event<'_>]) {
    let mut i = 0;
    while i < events.len() {
        if matches!(events[i], Event::Start(Tag::Heading { .. })) {
            let mut text = String::new();
            let mut j = i + 1;
            while j < events.len() {
                match &events[j] {
                    Event::End(TagEnd::Heading(_)) => break,
                    Event::Text(t) | Event::Code(t) => text.push_str(t),
                    _ => {}
                }
                j += 1;
            }

            let slug = slugify(&text);
            if !slug.is_empty() {
                if let Event::Start(Tag::Heading { id, .. }) = &mut events[i] {
                    *id = Some(slug.into());
                }
            }
            i = j;
        }
        i += 1;
    }
}
