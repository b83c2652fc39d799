//! Markdown rendering with XSS protection, code highlighting, math, and
//! heading anchors.
//!
//! Pipeline, in fixed order: parse with raw HTML demoted to text, highlight
//! fenced code blocks, render dollar-delimited math, attach heading anchor
//! ids, serialize, sanitize. Sanitization runs last so it sees the output of
//! every markup-producing stage.

mod anchors;
mod highlight;
mod math;
mod sanitize;

pub use anchors::slugify;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd, html};

/// Convert markdown content to sanitized HTML.
///
/// Supports extended markdown syntax including:
/// - Strikethrough (`~~text~~`)
/// - Tables
/// - Footnotes
/// - Inline (`$...$`) and display (`$$...$$`) math
///
/// Fenced code blocks with a known language are syntax-highlighted; headings
/// receive a slug `id` attribute (repeated identical headings share the same
/// id - anchors are not deduplicated). The output is sanitized using
/// `ammonia` to prevent XSS attacks, with the allow-list retaining heading
/// ids and the classes emitted by the highlighter and the math wrapper.
///
/// Never fails: malformed constructs degrade to best-effort output, so the
/// display path cannot crash on author input.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut parser = Parser::new_ext(markdown, parser_options());
    let mut events: Vec<Event<'_>> = Vec::new();

    while let Some(event) = parser.next() {
        match event {
            // Author-supplied literal HTML is demoted to text so it gets
            // escaped on serialization. This is the injection boundary.
            Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                let code = collect_code_block(&mut parser);
                events.extend(render_code_block(info, code));
            }
            Event::InlineMath(tex) => {
                events.push(Event::Html(math::render_inline(&tex).into()));
            }
            Event::DisplayMath(tex) => {
                events.push(Event::Html(math::render_display(&tex).into()));
            }
            other => events.push(other),
        }
    }

    anchors::attach_heading_ids(&mut events);

    let mut html_output = String::new();
    html::push_html(&mut html_output, events.into_iter());

    sanitize::clean(&html_output)
}

fn parser_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_MATH);
    options
}

/// Drain the text of the code block whose start tag was just consumed.
fn collect_code_block(parser: &mut Parser<'_>) -> String {
    let mut code = String::new();
    for event in parser.by_ref() {
        match event {
            Event::End(TagEnd::CodeBlock) => break,
            Event::Text(text) => code.push_str(&text),
            _ => {}
        }
    }
    code
}

/// Re-render a fenced code block, highlighted when the language is known.
fn render_code_block<'a>(info: CowStr<'a>, code: String) -> Vec<Event<'a>> {
    let lang = info.split_whitespace().next().unwrap_or("");
    if !lang.is_empty() {
        if let Some(highlighted) = highlight::highlight(lang, &code) {
            return vec![Event::Html(highlighted.into())];
        }
    }
    // Unknown or missing language: plain escaped code fence.
    vec![
        Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))),
        Event::Text(code.into()),
        Event::End(TagEnd::CodeBlock),
    ]
}
