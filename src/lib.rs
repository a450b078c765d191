//! repair-site: content pipeline for a home, marine and RV repair business
//!
//! Markdown pages and blog articles are loaded from the content directory,
//! parsed into typed page data, and served or written out as HTML and JSON.

pub mod cache;
pub mod commands;
pub mod config;
pub mod content;
pub mod data;
pub mod render;
pub mod server;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::ContentLoader;

/// Legal pages rendered from `content/pages/<id>.md`
pub const LEGAL_PAGES: [&str; 2] = ["privacy-policy", "terms-of-service"];

/// The site: configuration, directories and the content loader
#[derive(Debug)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content directory
    pub content_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
    /// Cached content loader
    pub loader: ContentLoader,
}

impl Site {
    /// Create a site from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);
        let loader = ContentLoader::new(&content_dir, config.clone());

        Ok(Self {
            config,
            base_dir,
            content_dir,
            public_dir,
            loader,
        })
    }

    /// Write the static output
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Remove the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
