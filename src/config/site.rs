//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub url: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,

    // Blog
    pub default_author: String,
    pub default_category: String,
    pub words_per_minute: usize,
    pub blog_asset_dir: String,
    /// Address shown in the blog page's contact block
    pub contact_email: String,

    /// Glyphs removed from article bodies before rendering
    pub strip_glyphs: Vec<String>,

    /// Business identity emitted as structured data in author blocks
    #[serde(default)]
    pub organization: OrganizationConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "The Vadim Group".to_string(),
            url: "https://vadimgroup.com".to_string(),

            content_dir: "content".to_string(),
            public_dir: "public".to_string(),

            default_author: "Vadim Group".to_string(),
            default_category: "General".to_string(),
            words_per_minute: 200,
            blog_asset_dir: "/assets/blog".to_string(),
            contact_email: "info@thevadimgroup.com".to_string(),

            strip_glyphs: ["🛠️", "🧩", "⚠️", "🔧", "📞"]
                .iter()
                .map(|g| g.to_string())
                .collect(),

            organization: OrganizationConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Absolute URL for a site-relative path
    pub fn absolute_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Organization details for schema.org markup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationConfig {
    pub name: String,
    pub description: String,
    pub url: String,
    pub logo: String,
    pub region: String,
    pub locality: String,
    pub area_served: Vec<String>,
    pub service_type: Vec<String>,
}

impl Default for OrganizationConfig {
    fn default() -> Self {
        Self {
            name: "Vadim Group".to_string(),
            description: "Home Repair Experts in Orlando, Florida".to_string(),
            url: "https://vadimgroup.com".to_string(),
            logo: "https://vadimgroup.com/assets/VG_logo_main.webp".to_string(),
            region: "FL".to_string(),
            locality: "Orlando".to_string(),
            area_served: [
                "Orlando",
                "Lake Nona",
                "Daytona Beach",
                "Cocoa Beach",
                "Winter Park",
                "Lake Mary",
                "Kissimmee",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            service_type: ["Home Repairs", "Marine Repairs", "RV Repairs"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: SiteConfig = serde_yaml::from_str(
            r#"
title: Test Repairs
words_per_minute: 250
organization:
  name: Test Co
"#,
        )
        .unwrap();

        assert_eq!(config.title, "Test Repairs");
        assert_eq!(config.words_per_minute, 250);
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.organization.name, "Test Co");
        assert_eq!(config.organization.locality, "Orlando");
    }

    #[test]
    fn test_unknown_keys_are_retained() {
        let config: SiteConfig = serde_yaml::from_str("contact_email: info@example.com").unwrap();
        assert!(config.extra.contains_key("contact_email"));
    }

    #[test]
    fn test_absolute_url() {
        let config = SiteConfig {
            url: "https://example.com/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.absolute_url("/blog/gutter-tips"),
            "https://example.com/blog/gutter-tips"
        );
    }
}
