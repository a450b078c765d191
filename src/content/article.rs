//! Blog article model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::frontmatter::{parse_date_string, FrontMatter, Keywords};
use crate::config::SiteConfig;
use crate::render::ArticleDocument;

/// Metadata for one blog article (`content/blog/<slug>/index.md`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogArticleMeta {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub date: String,
    pub category: String,
    pub keywords: Vec<String>,
    pub reading_time: String,
    pub cover_image: String,
    pub hero_image: String,
    pub og_image: String,
    pub featured: bool,
    pub status: String,
}

impl BlogArticleMeta {
    /// Build metadata from front-matter, filling site defaults
    pub fn from_front_matter(slug: &str, fm: &FrontMatter, body: &str, config: &SiteConfig) -> Self {
        let asset_dir = format!("{}/{}", config.blog_asset_dir.trim_end_matches('/'), slug);
        let cover_default = format!("{}/cover.webp", asset_dir);

        Self {
            slug: slug.to_string(),
            title: fm.title.clone(),
            description: fm.description.clone(),
            author: fm
                .author
                .clone()
                .unwrap_or_else(|| config.default_author.clone()),
            date: fm
                .date
                .clone()
                .unwrap_or_else(|| Local::now().to_rfc3339()),
            category: fm
                .category
                .clone()
                .unwrap_or_else(|| config.default_category.clone()),
            // A plain keyword string is not split for articles
            keywords: match &fm.keywords {
                Some(Keywords::List(list)) => list.clone(),
                _ => Vec::new(),
            },
            reading_time: reading_time(body, config.words_per_minute),
            cover_image: fm.cover_image.clone().unwrap_or_else(|| cover_default.clone()),
            hero_image: fm
                .hero_image
                .clone()
                .unwrap_or_else(|| format!("{}/hero.webp", asset_dir)),
            og_image: fm.share_image.clone().unwrap_or(cover_default),
            featured: fm.featured.unwrap_or(false),
            status: fm.status.clone().unwrap_or_else(|| "published".to_string()),
        }
    }

    /// Parse the date for ordering
    pub fn parsed_date(&self) -> Option<DateTime<Local>> {
        parse_date_string(&self.date)
    }
}

/// A blog article with its body, parsed once into a renderable document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogArticle {
    #[serde(flatten)]
    pub meta: BlogArticleMeta,
    /// Body text with front-matter stripped
    pub content: String,
    pub document: ArticleDocument,
}

/// Count whitespace-separated words
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// `"<N> min read"`, rounded up and never below one minute
pub fn reading_time(body: &str, words_per_minute: usize) -> String {
    let wpm = words_per_minute.max(1);
    let minutes = count_words(body).div_ceil(wpm).max(1);
    format!("{} min read", minutes)
}

/// Sort newest first; articles whose date cannot be parsed go last
pub fn sort_newest_first(articles: &mut [BlogArticleMeta]) {
    articles.sort_by(|a, b| match (a.parsed_date(), b.parsed_date()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}
