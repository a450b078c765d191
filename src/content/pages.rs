//! Page assemblers: turn one page file into the data its page displays

use serde::Serialize;

use super::lines::bold_line;
use crate::data::{self, Category, PortfolioItem};
use super::partials::{FooterData, HeaderData};
use super::{
    extract_blocks, parse_faqs, parse_process_steps, parse_sections, parse_service_cards,
    parse_service_categories, parse_testimonials, BlogArticleMeta, ContentLoader, Faq,
    FrontMatter, PageContent, ProcessStep, Section, ServiceCard, ServiceCategory, Testimonial,
};

/// Pages with a dedicated assembler
pub const ASSEMBLED_PAGES: [&str; 5] = ["home", "home-repairs", "marine-rv", "faq", "blog"];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePageData {
    pub front_matter: FrontMatter,
    pub services: Vec<ServiceCard>,
    pub testimonials: Vec<Testimonial>,
    pub faqs: Vec<Faq>,
    pub process_steps: Vec<ProcessStep>,
}

impl HomePageData {
    pub fn from_page(page: PageContent) -> Self {
        let blocks = extract_blocks(&page.content);
        let block_with = |markers: &[&str]| {
            blocks
                .iter()
                .find(|b| markers.iter().any(|m| b.contains(m)))
                .map(String::as_str)
                .unwrap_or_default()
        };

        Self {
            services: parse_service_cards(blocks.get(2).map(String::as_str).unwrap_or_default()),
            testimonials: parse_testimonials(block_with(&["### REVIEWS"])),
            faqs: parse_faqs(block_with(&["### FAQ", "### COMMON QUESTIONS"])),
            process_steps: blocks
                .iter()
                .map(|b| parse_process_steps(b))
                .find(|steps| !steps.is_empty())
                .unwrap_or_default(),
            front_matter: page.front_matter,
        }
    }
}

/// Home-repairs and marine-rv pages
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePageData {
    pub front_matter: FrontMatter,
    pub service_categories: Vec<ServiceCategory>,
    pub faqs: Vec<Faq>,
    pub testimonials: Vec<&'static data::Testimonial>,
    pub portfolio: Vec<&'static PortfolioItem>,
}

impl ServicePageData {
    /// Categories come from the `### OUR SERVICES` block, else the second block
    pub fn home_repairs(page: PageContent) -> Self {
        let blocks = extract_blocks(&page.content);
        let services = blocks
            .iter()
            .find(|b| b.contains("### OUR SERVICES"))
            .or_else(|| blocks.get(1))
            .map(String::as_str)
            .unwrap_or_default();
        let faq_block = blocks
            .iter()
            .find(|b| b.contains("### FAQ") || b.contains("FREQUENTLY ASKED"))
            .map(String::as_str)
            .unwrap_or_default();

        Self {
            service_categories: parse_service_categories(services, false),
            faqs: parse_faqs(faq_block),
            testimonials: data::testimonials_by_category(Category::HomeRepairs),
            portfolio: data::portfolio_by_category(Category::HomeRepairs),
            front_matter: page.front_matter,
        }
    }

    /// Categories and FAQs from the whole body; empty categories are dropped
    pub fn marine_rv(page: PageContent) -> Self {
        Self {
            service_categories: parse_service_categories(&page.content, true),
            faqs: parse_faqs(&page.content),
            testimonials: data::testimonials_by_category(Category::MarineRv),
            portfolio: data::portfolio_by_category(Category::MarineRv),
            front_matter: page.front_matter,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FaqBucket {
    Services,
    Pricing,
    Booking,
    General,
}

impl FaqBucket {
    fn for_block(block: &str) -> Self {
        let lower = block.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));

        if has(&["service", "work"]) {
            FaqBucket::Services
        } else if has(&["price", "cost", "payment"]) {
            FaqBucket::Pricing
        } else if has(&["book", "schedule", "appointment"]) {
            FaqBucket::Booking
        } else {
            FaqBucket::General
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqPageData {
    pub front_matter: FrontMatter,
    #[serde(rename = "generalFAQs")]
    pub general: Vec<Faq>,
    #[serde(rename = "servicesFAQs")]
    pub services: Vec<Faq>,
    #[serde(rename = "pricingFAQs")]
    pub pricing: Vec<Faq>,
    #[serde(rename = "bookingFAQs")]
    pub booking: Vec<Faq>,
}

impl FaqPageData {
    /// FAQs bucketed per `---` block by keywords found in the block.
    ///
    /// With at most one block, or when nothing lands in the general bucket,
    /// the general bucket holds every FAQ on the page.
    pub fn from_page(page: PageContent) -> Self {
        let all = parse_faqs(&page.content);
        let blocks = extract_blocks(&page.content);

        let mut data = Self {
            front_matter: page.front_matter,
            general: Vec::new(),
            services: Vec::new(),
            pricing: Vec::new(),
            booking: Vec::new(),
        };

        if blocks.len() > 1 {
            for block in &blocks {
                let faqs = parse_faqs(block);
                match FaqBucket::for_block(block) {
                    FaqBucket::Services => data.services.extend(faqs),
                    FaqBucket::Pricing => data.pricing.extend(faqs),
                    FaqBucket::Booking => data.booking.extend(faqs),
                    FaqBucket::General => data.general.extend(faqs),
                }
            }
        }

        if data.general.is_empty() {
            data.general = all;
        }
        data
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogSeo {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub canonical: String,
}

impl From<&FrontMatter> for BlogSeo {
    fn from(fm: &FrontMatter) -> Self {
        Self {
            title: fm.title.clone(),
            description: fm.description.clone(),
            keywords: fm.keywords.as_ref().map(|k| k.joined()).unwrap_or_default(),
            og_title: fm.og_title.clone().unwrap_or_default(),
            og_description: fm.og_description.clone().unwrap_or_default(),
            og_image: fm.og_image.clone().unwrap_or_default(),
            canonical: fm.canonical.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BlogHero {
    pub title: String,
    pub subtitle: String,
    pub description: String,
}

/// An announced article that has no file yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingArticle {
    pub title: String,
    pub description: String,
    pub category: String,
    pub reading_time: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPageData {
    pub seo: BlogSeo,
    pub hero: BlogHero,
    pub coming_soon_title: String,
    pub coming_soon_description: String,
    pub articles: Vec<BlogArticleMeta>,
    pub upcoming: Vec<UpcomingArticle>,
    pub contact_email: String,
    pub contact_info: String,
    pub subscribe_title: String,
    pub subscribe_info: String,
}

impl BlogPageData {
    pub fn from_page(
        page: &PageContent,
        articles: Vec<BlogArticleMeta>,
        contact_email: &str,
    ) -> Self {
        let lines: Vec<&str> = page.content.lines().collect();
        let heading = |prefix: &str| {
            lines
                .iter()
                .position(|l| l.starts_with(prefix))
                .map(|idx| (lines[idx].trim_start_matches('#').trim().to_string(), idx))
        };

        let (hero_title, hero_idx) = heading("# ").unwrap_or_default();
        let subtitle_idx = lines
            .iter()
            .skip(hero_idx)
            .position(|l| l.starts_with("## "))
            .map(|offset| hero_idx + offset);
        let hero_subtitle = subtitle_idx
            .map(|idx| lines[idx][3..].trim().to_string())
            .unwrap_or_default();
        let (coming_soon_title, coming_idx) = heading("## Coming Soon").unwrap_or_default();
        let (subscribe_title, subscribe_idx) = heading("## Subscribe").unwrap_or_default();

        Self {
            seo: BlogSeo::from(&page.front_matter),
            hero: BlogHero {
                title: hero_title,
                subtitle: hero_subtitle,
                description: paragraph_after(&lines, subtitle_idx.unwrap_or(hero_idx)),
            },
            coming_soon_description: if coming_soon_title.is_empty() {
                String::new()
            } else {
                paragraph_after(&lines, coming_idx)
            },
            coming_soon_title,
            articles,
            upcoming: parse_upcoming(&lines),
            contact_email: contact_email.to_string(),
            contact_info: lines
                .iter()
                .find(|l| l.contains("typically respond"))
                .map(|l| l.trim().to_string())
                .unwrap_or_default(),
            subscribe_info: if subscribe_title.is_empty() {
                String::new()
            } else {
                paragraph_after(&lines, subscribe_idx)
            },
            subscribe_title,
        }
    }
}

/// First plain text line after `idx`, skipping headings, lists, quotes and bold lines
fn paragraph_after(lines: &[&str], idx: usize) -> String {
    lines
        .iter()
        .skip(idx + 1)
        .map(|l| l.trim())
        .take_while(|l| !l.starts_with("## "))
        .find(|l| {
            !l.is_empty()
                && !l.starts_with('#')
                && !l.starts_with('-')
                && !l.starts_with('>')
                && !l.starts_with("**")
                && !l.starts_with('*')
        })
        .unwrap_or_default()
        .to_string()
}

/// `### Category` headings followed by `**Title**`, a description line and
/// optional `*Estimated reading time: ...*` / `Status: ...` lines
fn parse_upcoming(lines: &[&str]) -> Vec<UpcomingArticle> {
    let mut upcoming = Vec::new();
    let mut category = String::new();

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();

        if let Some(heading) = line.strip_prefix("### ") {
            if !heading.contains("Have a Specific") && !heading.contains("Subscribe") {
                category = heading.trim().to_string();
            }
            continue;
        }
        if category.is_empty() {
            continue;
        }
        let Some(title) = bold_line(line) else {
            continue;
        };

        let mut article = UpcomingArticle {
            title: title.trim().to_string(),
            description: lines.get(i + 1).map(|l| l.trim()).unwrap_or_default().to_string(),
            category: category.clone(),
            reading_time: String::new(),
            status: "Coming Soon".to_string(),
        };
        for next in lines.iter().skip(i + 1).take(4) {
            if let Some((_, rest)) = next.split_once("Estimated reading time:") {
                article.reading_time = rest.replace('*', "").trim().to_string();
            }
            if let Some((_, rest)) = next.split_once("Status:") {
                article.status = rest.replace('*', "").trim().to_string();
            }
        }
        upcoming.push(article);
    }

    upcoming
}

/// Any other page: front-matter, sections and raw body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericPageData {
    pub front_matter: FrontMatter,
    pub sections: Vec<Section>,
    pub content: String,
}

impl From<PageContent> for GenericPageData {
    fn from(page: PageContent) -> Self {
        Self {
            sections: parse_sections(&page.content),
            front_matter: page.front_matter,
            content: page.content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PageData {
    Home(HomePageData),
    Services(ServicePageData),
    Faq(FaqPageData),
    Blog(BlogPageData),
    Header(HeaderData),
    Footer(FooterData),
    Generic(GenericPageData),
}

/// Assemble the data for page `id`, loading through the cache.
///
/// `header` and `footer` come from `partials/` rather than `pages/`.
pub fn page_data(loader: &ContentLoader, id: &str) -> PageData {
    match id {
        "header" => return PageData::Header(HeaderData::parse(&loader.partial(id))),
        "footer" => return PageData::Footer(FooterData::parse(&loader.partial(id))),
        _ => {}
    }

    let page = loader.markdown_content(id);
    match id {
        "home" => PageData::Home(HomePageData::from_page(page)),
        "home-repairs" => PageData::Services(ServicePageData::home_repairs(page)),
        "marine-rv" => PageData::Services(ServicePageData::marine_rv(page)),
        "faq" => PageData::Faq(FaqPageData::from_page(page)),
        "blog" => PageData::Blog(BlogPageData::from_page(
            &page,
            loader.all_blog_articles(),
            &loader.config().contact_email,
        )),
        _ => PageData::Generic(GenericPageData::from(page)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(content: &str) -> PageContent {
        PageContent {
            front_matter: FrontMatter {
                title: "T".to_string(),
                description: "D".to_string(),
                ..Default::default()
            },
            content: content.to_string(),
        }
    }

    const HOME: &str = r#"# Repairs done right
---
### HOW IT WORKS
1. **Call** Tell us what broke.
2. **Visit** We inspect and quote.
---
## Home Repairs
Fixes for every room.
- Drywall
[Learn more](/home-repairs)
---
### REVIEWS
"Great work on our deck." — **Maria S.**
---
### FAQ
**Do you offer estimates?**
Yes, free.
"#;

    #[test]
    fn test_home_page() {
        let data = HomePageData::from_page(page(HOME));

        assert_eq!(data.services.len(), 1);
        assert_eq!(data.services[0].title, "Home Repairs");
        assert_eq!(data.services[0].link_href.as_deref(), Some("/home-repairs"));
        assert_eq!(data.testimonials.len(), 1);
        assert_eq!(data.testimonials[0].author, "Maria S.");
        assert_eq!(data.faqs.len(), 1);
        assert_eq!(data.faqs[0].answer, "Yes, free.");
        assert_eq!(data.process_steps.len(), 2);
        assert_eq!(data.process_steps[1].title, "Visit");
    }

    #[test]
    fn test_home_page_empty() {
        let data = HomePageData::from_page(page(""));
        assert!(data.services.is_empty());
        assert!(data.testimonials.is_empty());
        assert!(data.faqs.is_empty());
    }

    #[test]
    fn test_home_repairs_page() {
        let content = "# Home Repairs\n---\n### OUR SERVICES\n## Carpentry\nDoors and trim.\n### Doors\n- Hang doors\n---\n### FAQ\n## Licensed? {#licensed}\n\nYes.\n";
        let data = ServicePageData::home_repairs(page(content));

        assert_eq!(data.service_categories.len(), 1);
        assert_eq!(data.service_categories[0].title, "Carpentry");
        assert_eq!(data.service_categories[0].brief, "Doors and trim.");
        assert_eq!(data.faqs.len(), 1);
        assert_eq!(data.faqs[0].id.as_deref(), Some("licensed"));
    }

    #[test]
    fn test_home_repairs_falls_back_to_second_block() {
        let content = "# Intro\n---\n## Plumbing\nLeaks fixed.\n### Fixtures\n- Faucets\n";
        let data = ServicePageData::home_repairs(page(content));
        assert_eq!(data.service_categories.len(), 1);
        assert_eq!(data.service_categories[0].subcategories[0].items, vec!["Faucets"]);
    }

    #[test]
    fn test_marine_rv_drops_empty_categories() {
        let content = "## Boats\nHulls.\n### Gelcoat\n- Chips\n## About\nJust text.\n";
        let data = ServicePageData::marine_rv(page(content));
        assert_eq!(data.service_categories.len(), 1);
        assert_eq!(data.service_categories[0].title, "Boats");
        assert_eq!(data.testimonials.len(), 5);
        assert!(data.portfolio.iter().all(|p| p.category == Category::MarineRv));
    }

    #[test]
    fn test_faq_buckets() {
        let content = "## General\n**Where are you?**\nOrlando.\n---\n## Pricing\n**How much does it cost?**\nIt depends.\n---\n## Booking\n**How do I book?**\nSend a message.\n";
        let data = FaqPageData::from_page(page(content));

        assert_eq!(data.general.len(), 1);
        assert_eq!(data.general[0].question, "Where are you?");
        assert_eq!(data.pricing.len(), 1);
        assert_eq!(data.booking.len(), 1);
        assert!(data.services.is_empty());
    }

    #[test]
    fn test_faq_single_block_is_general() {
        let content = "**What do you repair?**\nMost things.\n**Do you work weekends?**\nSometimes.";
        let data = FaqPageData::from_page(page(content));
        assert_eq!(data.general.len(), 2);
        assert!(data.services.is_empty());
    }

    #[test]
    fn test_faq_empty_general_takes_all() {
        let content = "**Is the service insured?**\nYes.\n---\n**What payment do you take?**\nCards.";
        let data = FaqPageData::from_page(page(content));
        assert_eq!(data.services.len(), 1);
        assert_eq!(data.pricing.len(), 1);
        assert_eq!(data.general.len(), 2);
    }

    #[test]
    fn test_blog_page() {
        let content = r#"# Repair Tips & Guides
## Expert advice for Florida homes
This blog shares what we learn on the job.

## Coming Soon
We are preparing comprehensive guides.

### Home Maintenance
**Hurricane Prep Checklist**
Get your home ready before the season.
*Estimated reading time: 6 min*
Status: Draft

### Have a Specific Question?
**Not an article**
We typically respond within one business day.

## Subscribe
Want to be notified when new guides go live?
"#;
        let data = BlogPageData::from_page(&page(content), Vec::new(), "info@thevadimgroup.com");

        assert_eq!(data.seo.title, "T");
        assert_eq!(data.hero.title, "Repair Tips & Guides");
        assert_eq!(data.hero.subtitle, "Expert advice for Florida homes");
        assert_eq!(data.hero.description, "This blog shares what we learn on the job.");
        assert_eq!(data.coming_soon_title, "Coming Soon");
        assert_eq!(data.coming_soon_description, "We are preparing comprehensive guides.");
        assert_eq!(data.subscribe_title, "Subscribe");
        assert_eq!(data.subscribe_info, "Want to be notified when new guides go live?");
        assert_eq!(data.contact_email, "info@thevadimgroup.com");
        assert_eq!(
            data.contact_info,
            "We typically respond within one business day."
        );

        // "Have a Specific Question?" does not start a new category
        assert_eq!(data.upcoming.len(), 2);
        let prep = &data.upcoming[0];
        assert_eq!(prep.title, "Hurricane Prep Checklist");
        assert_eq!(prep.category, "Home Maintenance");
        assert_eq!(prep.description, "Get your home ready before the season.");
        assert_eq!(prep.reading_time, "6 min");
        assert_eq!(prep.status, "Draft");
        assert_eq!(data.upcoming[1].status, "Coming Soon");
    }

    #[test]
    fn test_generic_page() {
        let data = GenericPageData::from(page("## Terms\nBe nice.\n### Scope\nAll work."));
        assert_eq!(data.sections.len(), 1);
        assert_eq!(data.sections[0].subsections[0].title, "Scope");
    }

    #[test]
    fn test_page_data_reads_partials() {
        let dir = tempfile::TempDir::new().unwrap();
        let partials = dir.path().join("partials");
        std::fs::create_dir_all(&partials).unwrap();
        std::fs::write(
            partials.join("footer.md"),
            "## [brand]\ntagline: Fixed right the first time\n",
        )
        .unwrap();
        let loader = ContentLoader::new(dir.path(), crate::config::SiteConfig::default());

        let PageData::Footer(footer) = page_data(&loader, "footer") else {
            panic!("footer should assemble footer data");
        };
        assert_eq!(footer.brand.tagline, "Fixed right the first time");
        assert_eq!(footer.brand.logo_alt, "The Vadim Group");

        let PageData::Header(header) = page_data(&loader, "header") else {
            panic!("header should assemble header data");
        };
        assert_eq!(header, HeaderData::default());

        let PageData::Blog(blog) = page_data(&loader, "blog") else {
            panic!("blog should assemble blog data");
        };
        assert_eq!(blog.contact_email, "info@thevadimgroup.com");
    }
}
