//! Rendering of parsed content to HTML

pub mod article;
pub mod html;
pub mod legal;

pub use article::{ArticleDocument, ArticleSection, Block, Inline, QuestionAnswer, SectionBody, Urgency};

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
