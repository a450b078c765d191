//! Header and footer partials
//!
//! A partial is split on `## [key]` lines; the text under each marker is a
//! YAML mapping. Missing keys take the defaults below, and a section that
//! fails to decode is logged and replaced by its defaults.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Partials with a dedicated assembler, read from `partials/<name>.md`
pub const PARTIALS: [&str; 2] = ["header", "footer"];

/// `(key, yaml)` pairs in file order; text before the first marker is ignored
fn keyed_sections(content: &str) -> Vec<(String, String)> {
    let mut sections: Vec<(String, String)> = Vec::new();

    for line in content.lines() {
        let marker = line
            .strip_prefix("## [")
            .and_then(|rest| rest.find(']').map(|end| &rest[..end]));
        if let Some(key) = marker {
            sections.push((key.to_string(), String::new()));
            continue;
        }

        if let Some((_, body)) = sections.last_mut() {
            if line.trim() != "---" {
                body.push_str(line);
                body.push('\n');
            }
        }
    }

    sections
}

fn section<T: DeserializeOwned + Default>(
    sections: &[(String, String)],
    partial: &str,
    key: &str,
) -> T {
    let Some((_, yaml)) = sections.iter().find(|(k, _)| k == key) else {
        return T::default();
    };
    if yaml.trim().is_empty() {
        return T::default();
    }

    serde_yaml::from_str(yaml).unwrap_or_else(|e| {
        tracing::warn!("Failed to parse {} section [{}]: {}", partial, key, e);
        T::default()
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct LinkItems {
    items: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase", deserialize = "kebab-case"))]
pub struct HeaderBrand {
    pub name: String,
    pub logo_alt: String,
    pub href: String,
}

impl Default for HeaderBrand {
    fn default() -> Self {
        Self {
            name: "The Vadim Group".to_string(),
            logo_alt: "Logo".to_string(),
            href: "/".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase", deserialize = "kebab-case"))]
pub struct HeaderCta {
    pub label: String,
    #[serde(alias = "subLabel")]
    pub sub_label: String,
    pub href: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub sticky: bool,
    pub show_on_scroll: bool,
    pub show_messenger_icon: bool,
}

impl Default for HeaderCta {
    fn default() -> Self {
        Self {
            label: "Contact".to_string(),
            sub_label: String::new(),
            href: "#".to_string(),
            kind: "button".to_string(),
            sticky: true,
            show_on_scroll: true,
            show_messenger_icon: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase", deserialize = "kebab-case"))]
pub struct MobileMenu {
    pub enabled: bool,
    pub hamburger_icon: bool,
    pub close_icon: bool,
    pub overlay: bool,
}

impl Default for MobileMenu {
    fn default() -> Self {
        Self {
            enabled: true,
            hamburger_icon: true,
            close_icon: true,
            overlay: true,
        }
    }
}

/// Site header: `[brand]`, `[nav]`, `[cta]` and `[mobile-menu]` sections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderData {
    pub brand: HeaderBrand,
    pub nav: Vec<Link>,
    pub cta: HeaderCta,
    pub mobile_menu: MobileMenu,
}

impl HeaderData {
    pub fn parse(content: &str) -> Self {
        let sections = keyed_sections(content);
        Self {
            brand: section(&sections, "header", "brand"),
            nav: section::<LinkItems>(&sections, "header", "nav").items,
            cta: section(&sections, "header", "cta"),
            mobile_menu: section(&sections, "header", "mobile-menu"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase", deserialize = "kebab-case"))]
pub struct FooterBrand {
    pub logo_alt: String,
    pub tagline: String,
}

impl Default for FooterBrand {
    fn default() -> Self {
        Self {
            logo_alt: "The Vadim Group".to_string(),
            tagline: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuickLinks {
    pub title: String,
    pub items: Vec<Link>,
}

impl Default for QuickLinks {
    fn default() -> Self {
        Self {
            title: "Quick Links".to_string(),
            items: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase", deserialize = "kebab-case"))]
pub struct FooterContact {
    pub title: String,
    pub messenger_label: String,
    pub messenger_href: String,
    pub email_label: String,
    pub email_href: String,
    pub service_area: Vec<String>,
    pub hours: String,
}

impl Default for FooterContact {
    fn default() -> Self {
        Self {
            title: "Contact".to_string(),
            messenger_label: "Facebook Messenger".to_string(),
            messenger_href: "https://m.me/vadimgroup".to_string(),
            email_label: "Email".to_string(),
            email_href: "#".to_string(),
            service_area: Vec::new(),
            hours: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Social {
    pub title: String,
    pub items: Vec<SocialLink>,
}

impl Default for Social {
    fn default() -> Self {
        Self {
            title: "Follow Us".to_string(),
            items: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase", deserialize = "kebab-case"))]
pub struct LegalLinks {
    pub title: String,
    pub items: Vec<Link>,
    pub copyright_template: String,
}

impl Default for LegalLinks {
    fn default() -> Self {
        Self {
            title: "Legal".to_string(),
            items: Vec::new(),
            copyright_template: "© The Vadim Group".to_string(),
        }
    }
}

/// Site footer: `[brand]`, `[quick-links]`, `[contact]`, `[social]` and `[legal]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterData {
    pub brand: FooterBrand,
    pub quick_links: QuickLinks,
    pub contact: FooterContact,
    pub social: Social,
    pub legal: LegalLinks,
}

impl FooterData {
    pub fn parse(content: &str) -> Self {
        let sections = keyed_sections(content);
        Self {
            brand: section(&sections, "footer", "brand"),
            quick_links: section(&sections, "footer", "quick-links"),
            contact: section(&sections, "footer", "contact"),
            social: section(&sections, "footer", "social"),
            legal: section(&sections, "footer", "legal"),
        }
    }
}
