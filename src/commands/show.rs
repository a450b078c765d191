//! Print assembled page data

use anyhow::Result;

use crate::content::pages::page_data;
use crate::Site;

/// Print the data for page `id` as pretty JSON
pub fn run(site: &Site, id: &str) -> Result<()> {
    println!("{}", render(site, id)?);
    Ok(())
}

pub fn render(site: &Site, id: &str) -> Result<String> {
    let data = page_data(&site.loader, id);
    Ok(serde_json::to_string_pretty(&data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_show_faq_page() {
        let dir = TempDir::new().unwrap();
        let pages = dir.path().join("content/pages");
        fs::create_dir_all(&pages).unwrap();
        fs::write(
            pages.join("faq.md"),
            "---\ntitle: FAQ\ndescription: Answers\n---\n**Do you travel?**\nAcross Central Florida.\n",
        )
        .unwrap();

        let site = Site::new(dir.path()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&render(&site, "faq").unwrap()).unwrap();

        assert_eq!(json["frontMatter"]["title"], "FAQ");
        assert_eq!(json["generalFAQs"][0]["question"], "Do you travel?");
        assert_eq!(json["generalFAQs"][0]["answer"], "Across Central Florida.");
    }

    #[test]
    fn test_show_missing_page_is_fallback() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&render(&site, "about").unwrap()).unwrap();
        assert_eq!(json["frontMatter"]["title"], "Error loading about");
        assert_eq!(json["content"], "");
    }
}
