//! Generate static files

use anyhow::{Context, Result};
use chrono::Datelike;
use std::fs;
use std::path::Path;

use crate::content::pages::{page_data, ASSEMBLED_PAGES};
use crate::content::partials::PARTIALS;
use crate::content::parse_sections;
use crate::render::html::render_article_page;
use crate::render::legal::render_legal_page;
use crate::{Site, LEGAL_PAGES};

/// Write articles, legal pages and page data into the public directory
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();
    fs::create_dir_all(&site.public_dir)?;

    let articles = generate_articles(site)?;
    let legal = generate_legal_pages(site, chrono::Local::now().year())?;
    let data = generate_page_data(site)?;

    tracing::info!(
        "Wrote {} articles, {} legal pages and {} data files",
        articles,
        legal,
        data
    );

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

fn generate_articles(site: &Site) -> Result<usize> {
    let mut count = 0;
    for slug in site.loader.blog_slugs() {
        let Some(article) = site.loader.blog_article(&slug) else {
            continue;
        };
        let path = site.public_dir.join("blog").join(&slug).join("index.html");
        write_file(&path, &render_article_page(&article, &site.config))?;
        count += 1;
    }
    Ok(count)
}

fn generate_legal_pages(site: &Site, year: i32) -> Result<usize> {
    let mut count = 0;
    for id in LEGAL_PAGES {
        let page = site.loader.markdown_content(id);
        if page.content.is_empty() {
            tracing::warn!("Skipping legal page {}: no content", id);
            continue;
        }
        let sections = parse_sections(&page.content);
        let html = render_legal_page(id, &page.front_matter, &sections, year, &site.config);
        write_file(&site.public_dir.join(id).join("index.html"), &html)?;
        count += 1;
    }
    Ok(count)
}

/// Every page id gets a data file; assembled pages and partials are always written
fn generate_page_data(site: &Site) -> Result<usize> {
    let mut ids = site.loader.all_page_ids();
    for id in ASSEMBLED_PAGES.into_iter().chain(PARTIALS) {
        if !ids.iter().any(|existing| existing == id) {
            ids.push(id.to_string());
        }
    }

    let data_dir = site.public_dir.join("data");
    for id in &ids {
        let json = serde_json::to_string_pretty(&page_data(&site.loader, id))?;
        write_file(&data_dir.join(format!("{}.json", id)), &json)?;
    }

    let articles = serde_json::to_string_pretty(&site.loader.all_blog_articles())?;
    write_file(&data_dir.join("blog-articles.json"), &articles)?;

    Ok(ids.len() + 1)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content).with_context(|| format!("failed to write {:?}", path))?;
    tracing::debug!("Wrote {:?}", path);
    Ok(())
}
