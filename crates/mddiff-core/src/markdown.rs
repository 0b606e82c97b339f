#![forbid(unsafe_code)]

use pulldown_cmark::{Options, Parser, html};

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Create a `pulldown-cmark` parser with our default options enabled.
pub fn parser(source: &str) -> Parser<'_> {
    Parser::new_ext(source, options())
}

/// Render one Markdown block to an HTML fragment.
///
/// The block views wrap these fragments in kind-tagged containers; rendering
/// itself is delegated entirely to `pulldown-cmark`.
#[must_use]
pub fn to_html(source: &str) -> String {
    let mut out = String::with_capacity(source.len() * 2);
    html::push_html(&mut out, parser(source));
    out
}
