//! Quoted customer testimonials: `"Quote" — **Author**`

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Quote may span lines; attribution is a bold run after a hyphen, en or em dash
    static ref TESTIMONIAL_RE: Regex =
        Regex::new(r#""((?s:.*?))"\s+[-–—]\s+\*\*(.*?)\*\*"#).unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub text: String,
    pub author: String,
}

/// Extract every testimonial, flattening newlines inside the quote to spaces
pub fn parse_testimonials(content: &str) -> Vec<Testimonial> {
    TESTIMONIAL_RE
        .captures_iter(content)
        .filter_map(|caps| {
            let text = caps[1].trim().replace("\r\n", " ").replace('\n', " ");
            let author = caps[2].trim().to_string();
            if text.is_empty() || author.is_empty() {
                None
            } else {
                Some(Testimonial { text, author })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_testimonials() {
        let content = r#"### REVIEWS

"Fixed a hidden leak and restored
the drywall perfectly." — **Jason M.**

"On time and very clean." – **Maria L.**

"Great work" - **Daniel S.**
"#;
        let testimonials = parse_testimonials(content);

        assert_eq!(testimonials.len(), 3);
        assert_eq!(
            testimonials[0].text,
            "Fixed a hidden leak and restored the drywall perfectly."
        );
        assert_eq!(testimonials[0].author, "Jason M.");
        assert_eq!(testimonials[1].author, "Maria L.");
        assert_eq!(testimonials[2].text, "Great work");
    }

    #[test]
    fn test_quote_without_attribution_is_ignored() {
        assert!(parse_testimonials(r#""Just a quote" and nothing else"#).is_empty());
    }
}
