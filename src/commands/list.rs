//! List site content

use anyhow::Result;

use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    match content_type {
        "page" | "pages" => {
            let ids = site.loader.all_page_ids();
            println!("Pages ({}):", ids.len());
            for id in ids {
                let page = site.loader.markdown_content(&id);
                println!("  {} - {}", id, page.front_matter.title);
            }
        }
        "blog" | "article" | "articles" => {
            let articles = site.loader.all_blog_articles();
            println!("Articles ({}):", articles.len());
            for article in articles {
                let date = article
                    .parsed_date()
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "----------".to_string());
                println!(
                    "  {} - {} [{}, {}]",
                    date, article.title, article.slug, article.reading_time
                );
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: pages, blog", content_type);
        }
    }

    Ok(())
}
