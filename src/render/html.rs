//! HTML output for parsed article documents

use serde_json::json;

use super::article::{ArticleDocument, Block, Inline, QuestionAnswer, SectionBody, Table, Urgency};
use super::escape_html;
use crate::config::{OrganizationConfig, SiteConfig};
use crate::content::BlogArticle;

/// Render every section of a document
pub fn render_document(doc: &ArticleDocument, config: &SiteConfig) -> String {
    let mut html = String::from(r#"<div class="article-content">"#);

    for section in &doc.sections {
        match &section.body {
            SectionBody::Author { content } => {
                html.push_str(&render_author(content, &config.organization));
            }
            SectionBody::Faq { items } => {
                html.push_str(&section_open(&section.title));
                html.push_str(&render_accordion(items));
                html.push_str("</section>");
            }
            SectionBody::Markdown { blocks } => {
                html.push_str(&section_open(&section.title));
                for block in blocks {
                    html.push_str(&render_block(block));
                }
                html.push_str("</section>");
            }
        }
    }

    html.push_str("</div>");
    html
}

fn section_open(title: &str) -> String {
    format!(
        r#"<section class="article-section" id="{}"><h2>{}</h2>"#,
        slug::slugify(title),
        escape_html(title)
    )
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Heading(text) => format!("<h3>{}</h3>", escape_html(text)),
        Block::Paragraph(inlines) => format!("<p>{}</p>", render_inline(inlines)),
        Block::List(items) => {
            let mut html = String::from("<ul>");
            for item in items {
                html.push_str(&format!("<li>{}</li>", render_inline(item)));
            }
            html.push_str("</ul>");
            html
        }
        Block::Table(table) => render_table(table),
    }
}

fn render_inline(inlines: &[Inline]) -> String {
    inlines
        .iter()
        .map(|inline| match inline {
            Inline::Text(text) => escape_html(text),
            Inline::Strong(text) => format!("<strong>{}</strong>", escape_html(text)),
        })
        .collect()
}

/// CSS class for an urgency badge
pub fn urgency_class(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::High => "urgency urgency-high",
        Urgency::Medium => "urgency urgency-medium",
        Urgency::Neutral => "urgency urgency-neutral",
    }
}

fn render_table(table: &Table) -> String {
    let mut html = String::from(r#"<div class="table-wrap"><table><thead><tr>"#);
    for header in &table.headers {
        html.push_str(&format!("<th>{}</th>", escape_html(header)));
    }
    html.push_str("</tr></thead><tbody>");

    for (idx, row) in table.rows.iter().enumerate() {
        let stripe = if idx % 2 == 0 { "even" } else { "odd" };
        html.push_str(&format!(r#"<tr class="{}">"#, stripe));
        for cell in row {
            match cell.urgency {
                Some(urgency) => html.push_str(&format!(
                    r#"<td><span class="{}">{}</span></td>"#,
                    urgency_class(urgency),
                    escape_html(&cell.text)
                )),
                None => {
                    let inlines = super::article::parse_inline(&cell.text);
                    html.push_str(&format!("<td>{}</td>", render_inline(&inlines)));
                }
            }
        }
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table></div>");
    html
}

fn render_accordion(items: &[QuestionAnswer]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let mut html = String::from(r#"<div class="faq-accordion">"#);
    for item in items {
        html.push_str(&format!(
            r#"<details class="faq-item"><summary>{}</summary><p>{}</p></details>"#,
            escape_html(&item.question),
            escape_html(&item.answer)
        ));
    }
    html.push_str("</div>");
    html
}

/// schema.org Organization markup for the author card
pub fn organization_json_ld(org: &OrganizationConfig) -> serde_json::Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": org.name,
        "description": org.description,
        "url": org.url,
        "logo": org.logo,
        "address": {
            "@type": "PostalAddress",
            "addressRegion": org.region,
            "addressLocality": org.locality,
        },
        "areaServed": org.area_served,
        "serviceType": org.service_type,
    })
}

fn render_author(content: &str, org: &OrganizationConfig) -> String {
    // `</` cannot appear inside the script element
    let json_ld = organization_json_ld(org).to_string().replace("</", "<\\/");

    format!(
        r#"<section class="article-author"><blockquote><p>Written by {} — {}</p></blockquote><p>{}</p><a href="/about">Learn more about our services →</a><script type="application/ld+json">{}</script></section>"#,
        escape_html(&org.name),
        escape_html(&org.description),
        escape_html(content.trim()),
        json_ld
    )
}

/// Full standalone page for an article
pub fn render_article_page(article: &BlogArticle, config: &SiteConfig) -> String {
    let meta = &article.meta;
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} | {site}</title>
<meta name="description" content="{description}">
<link rel="canonical" href="{canonical}">
</head>
<body>
<article class="blog-article">
<header>
<span class="badge">{category}</span>
<h1>{title}</h1>
<p class="lead">{description}</p>
<div class="article-meta"><span>{author}</span><span>{reading_time}</span></div>
<img class="hero" src="{hero}" alt="{title}">
</header>
{body}
</article>
</body>
</html>
"#,
        title = escape_html(&meta.title),
        site = escape_html(&config.title),
        description = escape_html(&meta.description),
        canonical = config.absolute_url(&format!("blog/{}", meta.slug)),
        category = escape_html(&meta.category),
        author = escape_html(&meta.author),
        reading_time = escape_html(&meta.reading_time),
        hero = escape_html(&meta.hero_image),
        body = render_document(&article.document, config),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(body: &str) -> String {
        let config = SiteConfig::default();
        let doc = ArticleDocument::parse(body, &config.strip_glyphs);
        render_document(&doc, &config)
    }

    #[test]
    fn test_table_urgency_classes() {
        let html = render("## Warning Signs\n| Sign | Urgency | Action |\n|---|---|---|\n| Leak | High | Fix ASAP |\n| Dust | Low | Clean |");
        assert!(html.contains(r#"<span class="urgency urgency-high">High</span>"#));
        assert!(html.contains(r#"<span class="urgency urgency-neutral">Low</span>"#));
        assert!(html.contains("<th>Sign</th>"));
    }

    #[test]
    fn test_author_block_has_json_ld() {
        let html = render("## Written by **Vadim Group**\nLocal experts since 2010.");
        assert!(html.contains(r#"<script type="application/ld+json">"#));
        assert!(html.contains(r#""@type":"Organization""#));
        assert!(html.contains("Local experts since 2010."));
    }

    #[test]
    fn test_faq_accordion() {
        let html = render("## FAQ\n### Is it safe?\nYes.");
        assert!(html.contains("<summary>Is it safe?</summary><p>Yes.</p>"));
        assert!(html.contains(r#"id="faq""#));
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render("## Tips\nUse <caulk> & **seal**");
        assert!(html.contains("<p>Use &lt;caulk&gt; &amp; <strong>seal</strong></p>"));
    }

    #[test]
    fn test_organization_json_ld() {
        let value = organization_json_ld(&OrganizationConfig::default());
        assert_eq!(value["address"]["addressLocality"], "Orlando");
        assert_eq!(value["serviceType"][2], "RV Repairs");
    }
}
