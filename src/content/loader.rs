//! Content loader - reads pages and blog articles from the content directory

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::error::{ContentError, Result};
use super::{sort_newest_first, BlogArticle, BlogArticleMeta, FrontMatter};
use crate::cache::ContentCache;
use crate::config::SiteConfig;
use crate::render::ArticleDocument;

/// Front-matter and body of one page file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageContent {
    pub front_matter: FrontMatter,
    pub content: String,
}

impl PageContent {
    /// Placeholder for a page that could not be loaded
    pub fn fallback(id: &str) -> Self {
        Self {
            front_matter: FrontMatter::fallback(id),
            content: String::new(),
        }
    }
}

/// Loads content from `<content_dir>/pages` and `<content_dir>/blog`
#[derive(Debug)]
pub struct ContentLoader {
    content_dir: PathBuf,
    config: SiteConfig,
    pages: ContentCache<PageContent>,
    articles: ContentCache<BlogArticle>,
    partials: ContentCache<String>,
}

impl ContentLoader {
    pub fn new<P: AsRef<Path>>(content_dir: P, config: SiteConfig) -> Self {
        Self {
            content_dir: content_dir.as_ref().to_path_buf(),
            config,
            pages: ContentCache::new(),
            articles: ContentCache::new(),
            partials: ContentCache::new(),
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn pages_dir(&self) -> PathBuf {
        self.content_dir.join("pages")
    }

    pub fn blog_dir(&self) -> PathBuf {
        self.content_dir.join("blog")
    }

    pub fn partials_dir(&self) -> PathBuf {
        self.content_dir.join("partials")
    }

    /// Load `pages/<id>.md`.
    ///
    /// Never fails: unreadable or malformed files are logged and replaced by
    /// [`PageContent::fallback`].
    pub fn markdown_content(&self, id: &str) -> PageContent {
        if !is_safe_id(id) {
            tracing::error!("Refusing to load page with invalid id {:?}", id);
            return PageContent::fallback(id);
        }

        let path = self.pages_dir().join(format!("{}.md", id));
        match self.pages.get_or_load(id, &path, || read_page(id, &path)) {
            Ok(page) => page,
            Err(e) => {
                tracing::error!("Error loading page {} from {:?}: {}", id, path, e);
                PageContent::fallback(id)
            }
        }
    }

    /// Identifiers of every `pages/*.md` file, sorted
    pub fn all_page_ids(&self) -> Vec<String> {
        let dir = self.pages_dir();
        if !dir.is_dir() {
            tracing::warn!("Pages directory {:?} does not exist", dir);
            return Vec::new();
        }

        let mut ids: Vec<String> = WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && is_markdown_file(e.path()))
            .filter_map(|e| {
                e.path()
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .map(str::to_string)
            })
            .collect();
        ids.sort();
        ids
    }

    /// Slugs of every `blog/<slug>/index.md`, sorted
    pub fn blog_slugs(&self) -> Vec<String> {
        let dir = self.blog_dir();
        if !dir.is_dir() {
            tracing::warn!("Blog directory {:?} does not exist", dir);
            return Vec::new();
        }

        let mut slugs: Vec<String> = WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_dir() && e.path().join("index.md").is_file())
            .filter_map(|e| e.file_name().to_str().map(str::to_string))
            .collect();
        slugs.sort();
        slugs
    }

    /// Load one article, body parsed into its document once per file version
    pub fn blog_article(&self, slug: &str) -> Option<BlogArticle> {
        if !is_safe_id(slug) {
            return None;
        }

        let path = self.blog_dir().join(slug).join("index.md");
        if !path.is_file() {
            tracing::debug!("No blog article at {:?}", path);
            return None;
        }

        match self
            .articles
            .get_or_load(slug, &path, || read_article(slug, &path, &self.config))
        {
            Ok(article) => Some(article),
            Err(e) => {
                tracing::error!("Error loading blog article {}: {}", slug, e);
                None
            }
        }
    }

    pub fn blog_article_meta(&self, slug: &str) -> Option<BlogArticleMeta> {
        self.blog_article(slug).map(|article| article.meta)
    }

    /// Metadata of every readable article, newest first
    pub fn all_blog_articles(&self) -> Vec<BlogArticleMeta> {
        let mut articles: Vec<BlogArticleMeta> = self
            .blog_slugs()
            .iter()
            .filter_map(|slug| self.blog_article_meta(slug))
            .collect();
        sort_newest_first(&mut articles);
        articles
    }

    /// Raw text of `partials/<name>.md`, empty when it cannot be read
    pub fn partial(&self, name: &str) -> String {
        if !is_safe_id(name) {
            tracing::error!("Refusing to load partial with invalid name {:?}", name);
            return String::new();
        }

        let path = self.partials_dir().join(format!("{}.md", name));
        match self
            .partials
            .get_or_load(name, &path, || fs::read_to_string(&path))
        {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Partial {} not loaded from {:?}: {}", name, path, e);
                String::new()
            }
        }
    }

    /// Drop every cached page, article and partial
    pub fn clear_cache(&self) {
        self.pages.clear();
        self.articles.clear();
        self.partials.clear();
    }
}

fn read_page(id: &str, path: &Path) -> Result<PageContent> {
    let raw = fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;
    let (front_matter, body) = parse_front_matter(&raw, path)?;

    if !front_matter.is_valid() {
        tracing::warn!(
            "Page {} is missing a required front-matter field (title, description)",
            id
        );
    }

    Ok(PageContent {
        front_matter,
        content: body.to_string(),
    })
}

fn read_article(slug: &str, path: &Path, config: &SiteConfig) -> Result<BlogArticle> {
    let raw = fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;
    let (front_matter, body) = parse_front_matter(&raw, path)?;

    if !front_matter.is_valid() {
        tracing::warn!("Blog article {} is missing title or description", slug);
    }

    Ok(BlogArticle {
        meta: BlogArticleMeta::from_front_matter(slug, &front_matter, body, config),
        content: body.to_string(),
        document: ArticleDocument::parse(body, &config.strip_glyphs),
    })
}

fn parse_front_matter<'a>(raw: &'a str, path: &Path) -> Result<(FrontMatter, &'a str)> {
    FrontMatter::parse(raw).map_err(|e| ContentError::FrontMatter {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Identifiers map to file names and must not climb out of their directory
fn is_safe_id(id: &str) -> bool {
    !id.is_empty() && !id.contains(['/', '\\']) && !id.starts_with('.')
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) -> PathBuf {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    fn loader(dir: &TempDir) -> ContentLoader {
        ContentLoader::new(dir.path(), SiteConfig::default())
    }

    #[test]
    fn test_markdown_content() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "pages/about.md",
            "---\ntitle: About Us\ndescription: Family-run repair shop\n---\n## Story\nSince 2010.\n",
        );

        let page = loader(&dir).markdown_content("about");
        assert_eq!(page.front_matter.title, "About Us");
        assert_eq!(page.front_matter.description, "Family-run repair shop");
        assert_eq!(page.content, "## Story\nSince 2010.\n");
    }

    #[test]
    fn test_missing_page_falls_back() {
        let dir = TempDir::new().unwrap();
        let loader = loader(&dir);

        let page = loader.markdown_content("nope");
        assert_eq!(page.front_matter.title, "Error loading nope");
        assert_eq!(page.front_matter.description, "");
        assert_eq!(page.content, "");
        assert!(loader.pages.is_empty());
    }

    #[test]
    fn test_malformed_front_matter_falls_back() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "pages/bad.md", "---\ntitle: [unclosed\n---\nBody");

        let page = loader(&dir).markdown_content("bad");
        assert_eq!(page.front_matter.title, "Error loading bad");
        assert_eq!(page.content, "");
    }

    #[test]
    fn test_invalid_front_matter_still_renders() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "pages/partial.md", "---\ntitle: Only Title\n---\nBody");

        let page = loader(&dir).markdown_content("partial");
        assert_eq!(page.front_matter.title, "Only Title");
        assert_eq!(page.front_matter.description, "");
        assert_eq!(page.content, "Body");
    }

    #[test]
    fn test_wrongly_typed_fields_keep_the_rest() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "pages/about.md",
            "---\ntitle: About Us\ndescription: Family shop\nkeywords: 42\n---\nSince 2010.\n",
        );
        write(
            dir.path(),
            "blog/deck/index.md",
            "---\ntitle: Deck Care\ndescription: Seal it\nfeatured: \"yes\"\n---\nWash, then seal.\n",
        );
        let loader = loader(&dir);

        let page = loader.markdown_content("about");
        assert_eq!(page.front_matter.title, "About Us");
        assert_eq!(page.content, "Since 2010.\n");

        let article = loader.blog_article("deck").unwrap();
        assert_eq!(article.meta.title, "Deck Care");
        assert!(!article.meta.featured);
        assert_eq!(loader.all_blog_articles().len(), 1);
    }

    #[test]
    fn test_partial() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "partials/header.md", "## [brand]\nname: Vadim\n");
        let loader = loader(&dir);

        assert_eq!(loader.partial("header"), "## [brand]\nname: Vadim\n");
        assert_eq!(loader.partial("footer"), "");
        assert_eq!(loader.partial("../pages/home"), "");

        loader.clear_cache();
        assert!(loader.partials.is_empty());
    }

    #[test]
    fn test_page_cache_follows_mtime() {
        let dir = TempDir::new().unwrap();
        let path = write(dir.path(), "pages/faq.md", "---\ntitle: One\ndescription: d\n---\n");
        let loader = loader(&dir);

        assert_eq!(loader.markdown_content("faq").front_matter.title, "One");

        // Same mtime: the stale cached copy is served
        let mtime = fs::metadata(&path).unwrap().modified().unwrap();
        fs::write(&path, "---\ntitle: Two\ndescription: d\n---\n").unwrap();
        let file = fs::File::options().write(true).open(&path).unwrap();
        file.set_modified(mtime).unwrap();
        assert_eq!(loader.markdown_content("faq").front_matter.title, "One");

        file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(86_400))
            .unwrap();
        assert_eq!(loader.markdown_content("faq").front_matter.title, "Two");

        loader.clear_cache();
        assert!(loader.pages.is_empty());
    }

    #[test]
    fn test_rejects_path_traversal() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "secret.md", "---\ntitle: Secret\ndescription: s\n---\n");
        let loader = loader(&dir);

        assert_eq!(
            loader.markdown_content("../secret").front_matter.title,
            "Error loading ../secret"
        );
        assert!(loader.blog_article("..").is_none());
    }

    #[test]
    fn test_all_page_ids() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "pages/home.md", "");
        write(dir.path(), "pages/faq.md", "");
        write(dir.path(), "pages/notes.txt", "");
        write(dir.path(), "pages/nested/deep.md", "");

        assert_eq!(loader(&dir).all_page_ids(), vec!["faq", "home"]);
    }

    #[test]
    fn test_missing_dirs_are_empty() {
        let dir = TempDir::new().unwrap();
        let loader = loader(&dir);
        assert!(loader.all_page_ids().is_empty());
        assert!(loader.all_blog_articles().is_empty());
    }

    #[test]
    fn test_gutter_tips_article() {
        let dir = TempDir::new().unwrap();
        let body = vec!["word"; 600].join(" ");
        write(
            dir.path(),
            "blog/gutter-tips/index.md",
            &format!(
                "---\ntitle: Gutter Tips\ndescription: Keep water out\nauthor: Vadim\ndate: \"2024-01-01\"\ncategory: Maintenance\n---\n{}",
                body
            ),
        );

        let article = loader(&dir).blog_article("gutter-tips").unwrap();
        assert_eq!(article.meta.slug, "gutter-tips");
        assert_eq!(article.meta.reading_time, "3 min read");
        assert_eq!(article.meta.author, "Vadim");
        assert_eq!(article.meta.category, "Maintenance");
        assert_eq!(article.content, body);
    }

    #[test]
    fn test_all_blog_articles_newest_first() {
        let dir = TempDir::new().unwrap();
        for (slug, date) in [("old", "2023-01-01"), ("new", "2024-03-01"), ("mid", "2023-09-15")] {
            write(
                dir.path(),
                &format!("blog/{}/index.md", slug),
                &format!("---\ntitle: {}\ndescription: d\ndate: \"{}\"\n---\nBody", slug, date),
            );
        }
        // A directory without index.md is not an article
        fs::create_dir_all(dir.path().join("blog/drafts")).unwrap();

        let loader = loader(&dir);
        assert_eq!(loader.blog_slugs(), vec!["mid", "new", "old"]);

        let slugs: Vec<_> = loader
            .all_blog_articles()
            .into_iter()
            .map(|a| a.slug)
            .collect();
        assert_eq!(slugs, vec!["new", "mid", "old"]);
        assert!(loader.blog_article("drafts").is_none());
    }

    #[test]
    fn test_article_document_parsed_on_load() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "blog/roof/index.md",
            "---\ntitle: Roof\ndescription: d\n---\n# Roof\n## FAQ\n### When?\nSpring.",
        );

        let article = loader(&dir).blog_article("roof").unwrap();
        assert_eq!(article.document.sections.len(), 1);
        assert_eq!(article.document.sections[0].title, "FAQ");
    }
}
