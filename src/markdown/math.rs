//! Dollar-delimited math rendering.
//!
//! TeX expressions are typeset to MathML. An expression the engine rejects
//! degrades to its visible source text (escaped) inside the same wrapper,
//! so invalid math never breaks the render.

use latex2mathml::{DisplayStyle, latex_to_mathml};

/// Render `$...$` inline math.
pub(crate) fn render_inline(tex: &str) -> String {
    render(tex, DisplayStyle::Inline)
}

/// Render `$$...$$` display math.
pub(crate) fn render_display(tex: &str) -> String {
    render(tex, DisplayStyle::Block)
}

fn render(tex: &str, display: DisplayStyle) -> String {
    let (open, close) = match display {
        DisplayStyle::Inline => ("<span class=\"math math-inline\">", "</span>"),
        DisplayStyle::Block => ("<div class=\"math math-block\">", "</div>"),
    };

    let body = match latex_to_mathml(tex, display) {
        Ok(mathml) => mathml,
        Err(_) => ammonia::clean_text(tex),
    };

    format!("{open}{body}{close}")
}
