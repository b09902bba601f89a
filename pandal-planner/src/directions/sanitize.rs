//! Plain-text sanitisation for provider instruction strings.
//!
//! Provider instructions arrive HTML-formatted (`Turn <b>left</b> onto
//! <div style="...">...</div>`). Roadmap steps carry plain text only.

/// Strip HTML tags and common entities from instruction text.
///
/// Tags are removed, a handful of entities the provider actually emits are
/// decoded, and runs of whitespace collapse to single spaces.
pub fn strip_html(input: &str) -> String {
    let mut stripped = String::with_capacity(input.len());
    let mut in_tag = false;

    for c in input.chars() {
        match c {
            '<' => {
                in_tag = true;
                // Tag boundaries become spaces so "a<div>b" doesn't run together.
                stripped.push(' ');
            }
            '>' if in_tag => in_tag = false,
            c if !in_tag => stripped.push(c),
            _ => {}
        }
    }

    let decoded = stripped
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}
