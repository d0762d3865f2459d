//! Listing page rendering.
//!
//! The listing is serialized to JSON and inlined into the page as a JavaScript
//! string literal, which the page script hands to `JSON.parse`.

use minijinja::{AutoEscape, Environment, context};
use percent_encoding::percent_decode_str;

use crate::entry::Entry;
use crate::error::BrowseError;

const INDEX_TEMPLATE: &str = include_str!("../assets/index.html");
const INDEX_NAME: &str = "index.html";

/// Page renderer holding the template compiled once at startup.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, BrowseError> {
        Self::from_source(INDEX_TEMPLATE)
    }

    /// Compile a custom page template. It receives `entries` (the escaped
    /// payload) and `path` (the request path, unescaped).
    pub fn from_source(source: &'static str) -> Result<Self, BrowseError> {
        let mut env = Environment::new();
        // The payload is escaped by escape_payload; templates escape `path` themselves.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_template(INDEX_NAME, source)?;
        Ok(Self { env })
    }

    /// Render the listing page for `url_path`.
    pub fn render(&self, url_path: &str, entries: &[Entry]) -> Result<String, BrowseError> {
        let payload = escape_payload(&serde_json::to_string(entries)?);
        let display_path = percent_decode_str(url_path).decode_utf8_lossy().into_owned();

        let template = self.env.get_template(INDEX_NAME)?;
        Ok(template.render(context! {
            entries => payload,
            path => display_path,
        })?)
    }
}

/// Escape a JSON document so it can sit inside a double-quoted JavaScript
/// string literal within a `<script>` element.
pub fn escape_payload(json: &str) -> String {
    let mut out = String::with_capacity(json.len() + json.len() / 8);
    for c in json.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '<' => out.push_str("\\x3c"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}
