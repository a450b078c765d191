//! Blog article body → structured document
//!
//! The body is parsed once into sections, each classified by its heading:
//! author attribution, FAQ accordion, or generic markdown blocks.

use serde::{Deserialize, Serialize};

use crate::content::lines::{classify, LineKind};

/// Parsed article body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleDocument {
    pub sections: Vec<ArticleSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSection {
    pub title: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionBody {
    /// "Written by ..." attribution card
    Author { content: String },
    /// Question/answer accordion
    Faq { items: Vec<QuestionAnswer> },
    /// Generic markdown
    Markdown { blocks: Vec<Block> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Block {
    Heading(String),
    List(Vec<Vec<Inline>>),
    Table(Table),
    Paragraph(Vec<Inline>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Strong(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<TableCell>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    pub text: String,
    /// Set on the second column only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,
}

/// Visual urgency for a table's second column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    High,
    Medium,
    Neutral,
}

impl Urgency {
    pub fn classify(cell: &str) -> Self {
        let lower = cell.to_lowercase();
        if lower.contains("high") {
            Urgency::High
        } else if lower.contains("medium") {
            Urgency::Medium
        } else {
            Urgency::Neutral
        }
    }
}

impl ArticleDocument {
    /// Parse an article body (front-matter already stripped).
    ///
    /// `strip_glyphs` are removed first, then the first `# ` heading, which
    /// duplicates the page title.
    pub fn parse(body: &str, strip_glyphs: &[String]) -> Self {
        let mut clean = body.to_string();
        for glyph in strip_glyphs {
            clean = clean.replace(glyph.as_str(), "");
        }
        let clean = remove_first_title(clean.trim());

        let mut sections: Vec<(String, Vec<&str>)> = Vec::new();
        for line in clean.lines() {
            match classify(line) {
                LineKind::Heading { level: 1 | 2, text } if !text.is_empty() => {
                    sections.push((text.to_string(), Vec::new()));
                }
                _ => {
                    // Text before the first heading has no section to live in
                    if let Some((_, lines)) = sections.last_mut() {
                        lines.push(line);
                    }
                }
            }
        }

        let sections = sections
            .into_iter()
            .map(|(title, lines)| ArticleSection::classify(title, lines.join("\n").trim()))
            .collect();

        Self { sections }
    }
}

impl ArticleSection {
    fn classify(title: String, content: &str) -> Self {
        let lower = title.to_lowercase();

        if lower.contains("written by") {
            return Self {
                title: title.replace("**", ""),
                body: SectionBody::Author {
                    content: content.to_string(),
                },
            };
        }

        let body = if lower.contains("faq") || lower.contains("questions") {
            SectionBody::Faq {
                items: parse_accordion(content),
            }
        } else {
            SectionBody::Markdown {
                blocks: parse_blocks(content),
            }
        };
        Self { title, body }
    }
}

fn remove_first_title(text: &str) -> String {
    let mut removed = false;
    text.lines()
        .filter(|line| {
            if !removed && line.trim_start().starts_with("# ") {
                removed = true;
                return false;
            }
            true
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `###` questions, each answered by the following non-empty lines
pub fn parse_accordion(content: &str) -> Vec<QuestionAnswer> {
    let mut items = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in content.lines() {
        let trimmed = line.trim();
        if let Some(question) = trimmed.strip_prefix("###") {
            push_answered(current.take(), &mut items);
            let question = question.trim_start().replace("**", "").trim().to_string();
            current = Some((question, Vec::new()));
        } else if let Some((_, answer)) = current.as_mut() {
            if !trimmed.is_empty() {
                answer.push(trimmed);
            }
        }
    }
    push_answered(current, &mut items);

    items
}

fn push_answered(current: Option<(String, Vec<&str>)>, items: &mut Vec<QuestionAnswer>) {
    if let Some((question, answer)) = current {
        if !question.is_empty() && !answer.is_empty() {
            items.push(QuestionAnswer {
                question,
                answer: answer.join(" "),
            });
        }
    }
}

/// Generic markdown: tables, sub-headings, hyphen lists and paragraphs
pub fn parse_blocks(content: &str) -> Vec<Block> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| if is_rule(line) { "" } else { line.trim() })
        .collect();

    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if line.is_empty() {
            i += 1;
            continue;
        }

        if line.starts_with('|') {
            let start = i;
            while i < lines.len() && lines[i].starts_with('|') {
                i += 1;
            }
            if let Some(table) = parse_table(&lines[start..i]) {
                blocks.push(Block::Table(table));
            }
            continue;
        }

        if line.starts_with("##") {
            let text = line.trim_start_matches('#').replace("**", "");
            blocks.push(Block::Heading(text.trim().to_string()));
            i += 1;
            continue;
        }

        if line.starts_with('-') {
            let mut items = Vec::new();
            while i < lines.len() && lines[i].starts_with('-') {
                let item = lines[i].strip_prefix('-').unwrap_or(lines[i]).trim_start();
                items.push(parse_inline(item));
                i += 1;
            }
            blocks.push(Block::List(items));
            continue;
        }

        blocks.push(Block::Paragraph(parse_inline(line)));
        i += 1;
    }

    blocks
}

fn is_rule(line: &str) -> bool {
    line.len() >= 3 && line.chars().all(|c| c == '-')
}

/// Table with at least a header and one more row; divider rows are skipped
pub fn parse_table(lines: &[&str]) -> Option<Table> {
    if lines.len() < 2 {
        return None;
    }

    let mut rows = lines
        .iter()
        .filter(|line| !line.contains("---"))
        .map(|line| split_cells(line));
    let headers = rows.next()?;

    let rows = rows
        .map(|cells| {
            cells
                .into_iter()
                .enumerate()
                .map(|(idx, text)| TableCell {
                    urgency: (idx == 1).then(|| Urgency::classify(&text)),
                    text,
                })
                .collect()
        })
        .collect();

    Some(Table { headers, rows })
}

fn split_cells(line: &str) -> Vec<String> {
    line.split('|')
        .filter(|cell| !cell.is_empty())
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Split `**bold**` spans out of a line of text
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut parts = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find("**") {
        let after = &rest[open + 2..];
        let Some(close) = after.find("**") else {
            break;
        };
        if open > 0 {
            parts.push(Inline::Text(rest[..open].to_string()));
        }
        parts.push(Inline::Strong(after[..close].to_string()));
        rest = &after[close + 2..];
    }
    if !rest.is_empty() {
        parts.push(Inline::Text(rest.to_string()));
    }

    parts
}
