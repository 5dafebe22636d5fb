//! Two sanitizing policies for user content.
//!
//! Free text (post title and body on write) loses every tag and attribute.
//! Post bodies on read are rendered from Markdown and then filtered through a
//! small allow-list of formatting tags, none of which may carry attributes.

use ammonia::Builder;
use pulldown_cmark::{Options, Parser, html};

/// Tags that survive rendering. Everything else is removed, keeping its text.
const ALLOWED_TAGS: &[&str] = &[
    "p", "br", "ul", "ol", "li", "strong", "b", "i", "em", "h1", "h2", "h3", "h4",
];

/// Elements removed together with their contents.
const DROPPED_WITH_CONTENT: &[&str] = &["script", "style"];

/// Strip all markup, returning trimmed, HTML-safe plain text.
///
/// The result is escaped for HTML text positions: `&`, `<` and `>` come back
/// as entities, so `"Tom & Jerry"` is stored as `"Tom &amp; Jerry"`. Entities
/// in the input are decoded first, so a second pass changes nothing.
pub fn strip_tags(input: &str) -> String {
    Builder::empty()
        .add_clean_content_tags(DROPPED_WITH_CONTENT)
        .clean(input)
        .to_string()
        .trim()
        .to_string()
}

/// Render Markdown to HTML restricted to [`ALLOWED_TAGS`].
pub fn render_markup(source: &str) -> String {
    let mut raw = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut raw, Parser::new_ext(source, Options::empty()));

    Builder::empty()
        .add_tags(ALLOWED_TAGS)
        .add_clean_content_tags(DROPPED_WITH_CONTENT)
        .clean(&raw)
        .to_string()
}
