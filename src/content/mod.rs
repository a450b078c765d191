//! Content module - loads markdown content and extracts structured page data

mod article;
mod error;
mod faq;
mod frontmatter;
pub mod lines;
pub mod loader;
pub mod pages;
pub mod partials;
mod sections;
mod services;
mod steps;
mod testimonials;

pub use article::{count_words, reading_time, sort_newest_first, BlogArticle, BlogArticleMeta};
pub use error::ContentError;
pub use faq::{parse_faqs, Faq, FaqLayout};
pub use frontmatter::{FrontMatter, Keywords};
pub use loader::{ContentLoader, PageContent};
pub use partials::{FooterData, HeaderData};
pub use sections::{collect_list_items, extract_blocks, parse_list, parse_sections, Section};
pub use services::{
    parse_service_cards, parse_service_categories, FeatureGroup, ServiceCard, ServiceCategory,
    Subcategory,
};
pub use steps::{parse_process_steps, ProcessStep};
pub use testimonials::{parse_testimonials, Testimonial};
