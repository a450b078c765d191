//! Service cards and service categories

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::lines::{classify, LineKind};
use super::sections::{collect_list_items, split_h2_blocks};

lazy_static! {
    static ref LINK_RE: Regex = Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").unwrap();
}

/// A group of feature bullets, optionally under a bold category label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCard {
    pub title: String,
    pub description: String,
    pub items: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<FeatureGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCategory {
    pub title: String,
    pub brief: String,
    pub subcategories: Vec<Subcategory>,
}

/// Parse one card per `## ` block
pub fn parse_service_cards(content: &str) -> Vec<ServiceCard> {
    split_h2_blocks(content)
        .iter()
        .map(|block| parse_card(block))
        .collect()
}

fn parse_card(block: &str) -> ServiceCard {
    let mut lines = block.lines();
    let title = lines.next().unwrap_or_default().trim().to_string();
    let body: Vec<&str> = lines.collect();

    let description = body
        .iter()
        .find(|line| is_description_line(line))
        .map(|line| line.trim().to_string())
        .unwrap_or_default();

    let mut features = Vec::new();
    let mut category: Option<String> = None;
    let mut items: Vec<String> = Vec::new();

    for line in &body {
        match classify(line) {
            LineKind::Bold(label) => {
                if category.is_some() || !items.is_empty() {
                    features.push(FeatureGroup {
                        category: category.take(),
                        items: std::mem::take(&mut items),
                    });
                }
                category = Some(label.to_string());
            }
            LineKind::ListItem(item) => items.push(item.to_string()),
            _ => {}
        }
    }
    if category.is_some() || !items.is_empty() {
        features.push(FeatureGroup { category, items });
    }

    let (link_text, link_href) = match LINK_RE.captures(block) {
        Some(caps) => (non_empty(&caps[1]), non_empty(&caps[2])),
        None => (None, None),
    };

    ServiceCard {
        title,
        description,
        items: collect_list_items(block),
        features,
        link_text,
        link_href,
    }
}

fn is_description_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty()
        && !trimmed.starts_with('#')
        && !trimmed.starts_with('-')
        && !trimmed.starts_with("**")
        && !trimmed.starts_with('[')
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// Parse `## ` categories with `### ` subcategories of bullet items.
///
/// Subcategories without items are dropped. With `require_subcategories`,
/// categories left with no subcategories are dropped too.
pub fn parse_service_categories(content: &str, require_subcategories: bool) -> Vec<ServiceCategory> {
    let mut categories = Vec::new();

    for block in split_h2_blocks(content) {
        let mut lines = block.lines();
        let title = lines.next().unwrap_or_default().trim().to_string();
        let body: Vec<&str> = lines.collect();

        let brief = body
            .iter()
            .map(|line| line.trim())
            .find(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
            .unwrap_or_default()
            .to_string();

        let mut subcategories = Vec::new();
        let mut current: Option<(String, Vec<&str>)> = None;
        for line in body.iter().copied().chain(std::iter::once("### ")) {
            if let Some(sub_title) = line.strip_prefix("### ") {
                if let Some((title, sub_lines)) = current.take() {
                    let items = collect_list_items(&sub_lines.join("\n"));
                    if !items.is_empty() {
                        subcategories.push(Subcategory { title, items });
                    }
                }
                current = Some((sub_title.trim().to_string(), Vec::new()));
            } else if let Some((_, sub_lines)) = current.as_mut() {
                sub_lines.push(line);
            }
        }

        if require_subcategories && subcategories.is_empty() {
            continue;
        }
        categories.push(ServiceCategory {
            title,
            brief,
            subcategories,
        });
    }

    categories
}
