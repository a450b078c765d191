//! Legal pages (privacy policy, terms of service)

use lazy_static::lazy_static;
use regex::Regex;

use super::escape_html;
use crate::config::SiteConfig;
use crate::content::{FrontMatter, Section};

lazy_static! {
    static ref BOLD_RE: Regex = Regex::new(r"\*\*(.*?)\*\*").unwrap();
    static ref MAIL_RE: Regex = Regex::new(r"📧\s*").unwrap();
}

/// Heading text: placeholders filled, markers and mail glyphs removed
pub fn process_title(text: &str, year: i32) -> String {
    let text = text.replace("{year}", &year.to_string()).replace("**", "");
    MAIL_RE.replace_all(&text, "").trim().to_string()
}

fn process_inline(text: &str, year: i32) -> String {
    let text = escape_html(&text.replace("{year}", &year.to_string()));
    let text = BOLD_RE.replace_all(&text, "<strong>$1</strong>");
    MAIL_RE.replace_all(&text, "").trim().to_string()
}

/// Convert a section body to HTML paragraphs and bullet lists.
///
/// Blank lines and `---` rules are dropped; consecutive `- ` lines form one list.
pub fn markdown_to_html(content: &str, year: i32) -> String {
    let processed = process_inline(content, year);
    let mut html = String::new();
    let mut list: Vec<&str> = Vec::new();

    for line in processed.lines().map(str::trim) {
        if line.is_empty() || line == "---" {
            continue;
        }
        if let Some(item) = line.strip_prefix("- ") {
            list.push(item.trim());
            continue;
        }
        flush_list(&mut list, &mut html);
        html.push_str(&format!("<p>{}</p>", line));
    }
    flush_list(&mut list, &mut html);

    html
}

fn flush_list(list: &mut Vec<&str>, html: &mut String) {
    if list.is_empty() {
        return;
    }
    html.push_str("<ul>");
    for item in list.drain(..) {
        html.push_str(&format!("<li>{}</li>", item));
    }
    html.push_str("</ul>");
}

/// Render parsed sections. A section with subsections shows only those.
pub fn render_sections(sections: &[Section], year: i32) -> String {
    let mut html = String::new();

    for section in sections {
        html.push_str(&format!(
            r#"<section class="legal-section"><h2>{}</h2>"#,
            escape_html(&process_title(&section.title, year))
        ));
        if section.subsections.is_empty() {
            html.push_str(&markdown_to_html(&section.content, year));
        } else {
            for sub in &section.subsections {
                html.push_str(&format!(
                    "<div><h3>{}</h3>{}</div>",
                    escape_html(&process_title(&sub.title, year)),
                    markdown_to_html(&sub.content, year)
                ));
            }
        }
        html.push_str("</section>");
    }

    html
}

/// Full standalone legal page
pub fn render_legal_page(
    id: &str,
    front_matter: &FrontMatter,
    sections: &[Section],
    year: i32,
    config: &SiteConfig,
) -> String {
    let title = process_title(&front_matter.title, year);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<meta name="description" content="{description}">
<link rel="canonical" href="{canonical}">
</head>
<body>
<main class="legal">
<h1>{title}</h1>
<p class="effective">Effective Date: {year} | {org}</p>
{body}
</main>
</body>
</html>
"#,
        title = escape_html(&title),
        description = escape_html(&front_matter.description),
        canonical = config.absolute_url(id),
        year = year,
        org = escape_html(&config.organization.name),
        body = render_sections(sections, year),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::parse_sections;

    #[test]
    fn test_markdown_to_html() {
        let html = markdown_to_html(
            "Updated {year}.\n\n- **Email**: 📧 info@example.com\n- Phone\n---\nThat's all.",
            2025,
        );
        assert_eq!(
            html,
            "<p>Updated 2025.</p><ul><li><strong>Email</strong>: info@example.com</li><li>Phone</li></ul><p>That&#39;s all.</p>"
        );
    }

    #[test]
    fn test_process_title() {
        assert_eq!(process_title("📧 **Contact** {year}", 2024), "Contact 2024");
    }

    #[test]
    fn test_render_sections_prefers_subsections() {
        let sections = parse_sections("## Data\nIntro hidden\n### What we collect\n- Name\n## Contact\nWrite to us.");
        let html = render_sections(&sections, 2025);

        assert!(!html.contains("Intro hidden"));
        assert!(html.contains("<h3>What we collect</h3><ul><li>Name</li></ul>"));
        assert!(html.contains("<h2>Contact</h2><p>Write to us.</p>"));
    }

    #[test]
    fn test_legal_page() {
        let fm = FrontMatter {
            title: "Privacy Policy".to_string(),
            description: "How we handle data".to_string(),
            ..Default::default()
        };
        let html = render_legal_page("privacy-policy", &fm, &[], 2025, &SiteConfig::default());
        assert!(html.contains("<title>Privacy Policy</title>"));
        assert!(html.contains("https://vadimgroup.com/privacy-policy"));
        assert!(html.contains("Effective Date: 2025"));
    }
}
