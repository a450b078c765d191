//! Heading-delimited sections, lists and `---` blocks

use serde::{Deserialize, Serialize};

use super::lines::{classify, LineKind};

/// A level-2 heading and its body, with nested level-3 subsections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subsections: Vec<Section>,
}

impl Section {
    fn open(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Default::default()
        }
    }

    /// Serialize back to markdown, headings preserved
    pub fn to_markdown(&self) -> String {
        let mut out = format!("## {}\n{}", self.title, self.content);
        for sub in &self.subsections {
            out.push_str(&format!("\n### {}\n{}", sub.title, sub.content));
        }
        out
    }
}

/// Section scanner state
#[derive(Default)]
struct SectionBuilder {
    sections: Vec<Section>,
    section: Option<Section>,
    subsection: Option<Section>,
    buffer: Vec<String>,
}

impl SectionBuilder {
    fn take_buffer(&mut self) -> String {
        let text = self.buffer.join("\n").trim().to_string();
        self.buffer.clear();
        text
    }

    /// Flush buffered lines into whichever unit is active
    fn flush_text(&mut self) {
        let text = self.take_buffer();
        if let Some(sub) = self.subsection.as_mut() {
            sub.content = text;
        } else if let Some(section) = self.section.as_mut() {
            section.content = text;
        }
    }

    fn close_subsection(&mut self) {
        self.flush_text();
        if let Some(sub) = self.subsection.take() {
            // `open_subsection` guarantees a parent exists
            if let Some(section) = self.section.as_mut() {
                section.subsections.push(sub);
            }
        }
    }

    fn close_section(&mut self) {
        self.close_subsection();
        if let Some(section) = self.section.take() {
            self.sections.push(section);
        }
    }

    fn open_section(&mut self, title: &str) {
        self.close_section();
        self.section = Some(Section::open(title));
    }

    fn open_subsection(&mut self, title: &str) {
        self.close_subsection();
        if self.section.is_none() {
            // A `###` before any `##` gets an implicit untitled parent
            self.section = Some(Section::default());
        }
        self.subsection = Some(Section::open(title));
    }

    fn finish(mut self) -> Vec<Section> {
        self.close_section();
        self.sections
    }
}

/// Parse markdown content by `##` / `###` headings into ordered sections.
///
/// Text before the first heading is dropped. Text between a `##` heading and
/// its first `###` becomes the section's own content.
pub fn parse_sections(content: &str) -> Vec<Section> {
    let mut builder = SectionBuilder::default();

    for line in content.lines() {
        match classify(line) {
            LineKind::Heading { level: 2, text } => builder.open_section(text),
            LineKind::Heading { level: 3, text } => builder.open_subsection(text),
            _ => builder.buffer.push(line.to_string()),
        }
    }

    builder.finish()
}

/// First contiguous run of `- ` items.
///
/// Lines before the first item are skipped; the run ends at the first line
/// that is not a list item.
pub fn parse_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(classify)
        .skip_while(|kind| !matches!(kind, LineKind::ListItem(_)))
        .map_while(|kind| match kind {
            LineKind::ListItem(item) => Some(item.to_string()),
            _ => None,
        })
        .collect()
}

/// Every `- ` item in the content, in order
pub fn collect_list_items(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| match classify(line) {
            LineKind::ListItem(item) => Some(item.to_string()),
            _ => None,
        })
        .collect()
}

/// Split a page body on `---` lines into trimmed, non-empty blocks
pub fn extract_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in content.lines() {
        if line.trim_end() == "---" {
            blocks.push(current.join("\n").trim().to_string());
            current.clear();
        } else {
            current.push(line);
        }
    }
    blocks.push(current.join("\n").trim().to_string());

    blocks.retain(|b| !b.is_empty());
    blocks
}

/// Split content into `## ` blocks; each block starts with its heading text.
/// Text before the first `## ` heading is dropped.
pub(crate) fn split_h2_blocks(content: &str) -> Vec<String> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();

    for line in content.lines() {
        if let Some(title) = line.strip_prefix("## ") {
            blocks.push(vec![title]);
        } else if let Some(block) = blocks.last_mut() {
            block.push(line);
        }
    }

    blocks.into_iter().map(|b| b.join("\n")).collect()
}
