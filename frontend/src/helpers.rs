//! Browser utilities shared by components.

use pulldown_cmark::{html, Event, Parser};

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Renders Markdown to HTML. Raw HTML in the source is escaped, not passed through.
pub fn markdown_to_html(source: &str) -> String {
    let parser = Parser::new(source).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_renders_paragraphs_and_emphasis() {
        let out = markdown_to_html("Built with **React**.\n\nSecond paragraph.");
        assert!(out.contains("<strong>React</strong>"));
        assert_eq!(out.matches("<p>").count(), 2);
    }

    #[test]
    fn markdown_escapes_raw_html() {
        let out = markdown_to_html("<script>alert(1)</script>");
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }
}
