//! Inline Markdown
//!
//! Renders the short Markdown snippets used in FAQ answers with
//! pulldown-cmark. External links open in a new tab.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Parse markdown to HTML
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

/// Parse markdown for inline use (strips outer <p> tags)
pub fn parse_markdown_inline(text: &str) -> String {
    let html = parse_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
}

fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut in_external_link = false;

    for event in parser {
        match event {
            Event::Start(Tag::Link { dest_url, .. }) if is_external(&dest_url) => {
                let html = format!(
                    r#"<a href="{}" target="_blank" rel="noopener noreferrer">"#,
                    escape_html(&dest_url)
                );
                events.push(Event::Html(CowStr::from(html)));
                in_external_link = true;
            }
            Event::End(TagEnd::Link) if in_external_link => {
                events.push(Event::Html(CowStr::from("</a>")));
                in_external_link = false;
            }
            other => events.push(other),
        }
    }

    events
}

fn is_external(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FAQS;

    #[test]
    fn test_inline_strips_paragraph() {
        assert_eq!(parse_markdown_inline("**Never** share it"), "<strong>Never</strong> share it");
        assert_eq!(parse_markdown_inline("a `code` b"), "a <code>code</code> b");
    }

    #[test]
    fn test_external_links_open_in_new_tab() {
        let html = parse_markdown_inline("use [Revoke.cash](https://revoke.cash) now");
        assert_eq!(
            html,
            r#"use <a href="https://revoke.cash" target="_blank" rel="noopener noreferrer">Revoke.cash</a> now"#
        );
    }

    #[test]
    fn test_relative_links_untouched() {
        let html = parse_markdown_inline("[faq](#faq)");
        assert_eq!(html, r##"<a href="#faq">faq</a>"##);
    }

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(parse_markdown_inline("fees < 1 & more"), "fees &lt; 1 &amp; more");
    }

    #[test]
    fn test_faq_answers_render_as_one_paragraph() {
        for faq in FAQS {
            let html = parse_markdown_inline(faq.answer);
            assert!(!html.contains("<p>"), "{}", faq.question);
        }
    }
}
