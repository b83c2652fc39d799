//! Fenced code block syntax highlighting.
//!
//! Uses syntect's class-emitting HTML generator so the output carries CSS
//! classes instead of inline styles; the stylesheet decides the theme.

use once_cell::sync::Lazy;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Syntax definitions are expensive to load; built once per process.
static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);

/// Highlight `code` as `lang`, returning class-annotated HTML.
///
/// `lang` is matched against syntax names and file extensions. Returns
/// `None` when the language is unknown or highlighting fails; the caller
/// falls back to a plain escaped code fence.
pub(crate) fn highlight(lang: &str, code: &str) -> Option<String> {
    let syntax = SYNTAX_SET.find_syntax_by_token(lang)?;

    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAX_SET, ClassStyle::Spaced);
    for line in LinesWithEndings::from(code) {
        generator.parse_html_for_line_which_includes_newline(line).ok()?;
    }

    // `lang` matched a known syntax token above, so it is attribute-safe.
    Some(format!(
        "<pre class=\"highlight\"><code class=\"language-{}\">{}</code></pre>",
        lang,
        generator.finalize()
    ))
}
