//! Allow-list HTML sanitization, the final pipeline stage.
//!
//! The builder extends ammonia's defaults with the markup the earlier
//! stages produce: heading anchor ids, the class attributes emitted by the
//! highlighter and the math wrapper, and the MathML vocabulary. Anything
//! else capable of executing code is stripped.

use ammonia::Builder;
use once_cell::sync::Lazy;

use crate::config;

static SANITIZER: Lazy<Builder<'static>> = Lazy::new(build_sanitizer);

fn build_sanitizer() -> Builder<'static> {
    let mut builder = Builder::new();

    builder.add_tags(config::MATHML_TAGS.iter().copied());
    for tag in config::ID_CARRYING_TAGS.iter().copied() {
        builder.add_tag_attributes(tag, ["id"]);
    }
    for tag in config::CLASS_CARRYING_TAGS.iter().copied() {
        builder.add_tag_attributes(tag, ["class"]);
    }
    for &(tag, attrs) in config::MATHML_TAG_ATTRIBUTES {
        builder.add_tag_attributes(tag, attrs.iter().copied());
    }

    builder
}

/// Clean serialized HTML through the shared allow-list sanitizer.
pub(crate) fn clean(html: &str) -> String {
    SANITIZER.clean(html).to_string()
}
