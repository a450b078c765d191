//! FAQ extraction
//!
//! Two layouts are recognised. Anchored headings are tried first:
//!
//! ```text
//! ## Do you offer free estimates? {#free-estimates}
//!
//! Yes, every job starts with one.
//! ```
//!
//! Only when that finds nothing are bold question lines considered:
//!
//! ```text
//! **Do you offer free estimates?**
//! Yes, every job starts with one.
//! ```

use serde::{Deserialize, Serialize};

use super::lines::{bold_line, tokenize, LineKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// FAQ layouts, in the order they are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqLayout {
    AnchoredHeadings,
    BoldQuestions,
}

impl FaqLayout {
    pub const FALLBACK_ORDER: [FaqLayout; 2] = [FaqLayout::AnchoredHeadings, FaqLayout::BoldQuestions];

    pub fn parse(self, content: &str) -> Vec<Faq> {
        match self {
            FaqLayout::AnchoredHeadings => parse_anchored(content),
            FaqLayout::BoldQuestions => parse_bold(content),
        }
    }
}

/// Parse FAQ items using the first layout that yields any match
pub fn parse_faqs(content: &str) -> Vec<Faq> {
    FaqLayout::FALLBACK_ORDER
        .iter()
        .map(|layout| layout.parse(content))
        .find(|faqs| !faqs.is_empty())
        .unwrap_or_default()
}

/// `Question {#id}` heading text split into question and anchor id
fn split_anchor(text: &str) -> Option<(&str, &str)> {
    let inner = text.strip_suffix('}')?;
    let open = inner.rfind(" {#")?;
    Some((inner[..open].trim(), inner[open + 3..].trim()))
}

fn is_blank(line: Option<&(&str, LineKind<'_>)>) -> bool {
    matches!(line, Some((_, LineKind::Blank)))
}

fn ends_anchored_answer(lines: &[(&str, LineKind<'_>)], i: usize) -> bool {
    let raw = lines[i].0;
    if raw.starts_with("##") || raw.starts_with("---") {
        return true;
    }
    // Two blank lines in a row close the answer
    is_blank(lines.get(i)) && is_blank(lines.get(i + 1))
}

fn parse_anchored(content: &str) -> Vec<Faq> {
    let lines = tokenize(content);
    let mut faqs = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let anchored = match &lines[i].1 {
            LineKind::Heading { level, text } if *level >= 2 => split_anchor(text),
            _ => None,
        };
        let Some((question, id)) = anchored else {
            i += 1;
            continue;
        };

        // The heading must be followed by a blank line
        if !is_blank(lines.get(i + 1)) {
            i += 1;
            continue;
        }

        let start = i + 2;
        let mut end = start;
        while end < lines.len() && !ends_anchored_answer(&lines, end) {
            end += 1;
        }

        let answer = lines[start.min(end)..end]
            .iter()
            .map(|(raw, _)| *raw)
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string();
        if !question.is_empty() && !answer.is_empty() {
            faqs.push(Faq {
                question: question.to_string(),
                answer,
                id: Some(id.to_string()).filter(|id| !id.is_empty()),
            });
        }

        i = end.max(i + 1);
    }

    faqs
}

fn parse_bold(content: &str) -> Vec<Faq> {
    let lines: Vec<&str> = content.lines().collect();
    let mut faqs = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let Some(question) = bold_line(lines[i].trim()) else {
            i += 1;
            continue;
        };

        let mut answer: Vec<&str> = Vec::new();
        i += 1;
        while i < lines.len() && !lines[i].trim().starts_with("**") {
            let line = lines[i].trim();
            if !line.is_empty() {
                answer.push(line);
            }
            i += 1;
        }

        if !question.is_empty() && !answer.is_empty() {
            faqs.push(Faq {
                question: question.to_string(),
                answer: answer.join(" "),
                id: None,
            });
        }
    }

    faqs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchored_headings() {
        let content = "## Do you offer free estimates? {#estimates}\n\nYes, always.\nNo obligation.\n\n## How fast can you come out? {#speed}\n\nWithin 48 hours.\n";
        let faqs = parse_faqs(content);

        assert_eq!(faqs.len(), 2);
        assert_eq!(faqs[0].question, "Do you offer free estimates?");
        assert_eq!(faqs[0].id.as_deref(), Some("estimates"));
        assert_eq!(faqs[0].answer, "Yes, always.\nNo obligation.");
        assert_eq!(faqs[1].question, "How fast can you come out?");
        assert_eq!(faqs[1].answer, "Within 48 hours.");
    }

    #[test]
    fn test_anchored_answer_terminators() {
        let content = "## Q1 {#a}\n\nAnswer one\n---\nnot part\n\n## Q2 {#b}\n\nAnswer two\n\n\nstray text";
        let faqs = parse_faqs(content);
        assert_eq!(faqs.len(), 2);
        assert_eq!(faqs[0].answer, "Answer one");
        assert_eq!(faqs[1].answer, "Answer two");
    }

    #[test]
    fn test_anchored_requires_blank_line() {
        let content = "## Q {#a}\nAnswer directly below";
        assert!(FaqLayout::AnchoredHeadings.parse(content).is_empty());
    }

    #[test]
    fn test_bold_questions() {
        let content = "**Do you work on boats?**\nYes, fiberglass and gelcoat\nrepairs too.\n\n**Are you insured?**\nFully insured.";
        let faqs = parse_faqs(content);

        assert_eq!(faqs.len(), 2);
        assert_eq!(faqs[0].question, "Do you work on boats?");
        assert_eq!(faqs[0].answer, "Yes, fiberglass and gelcoat repairs too.");
        assert_eq!(faqs[0].id, None);
        assert_eq!(faqs[1].answer, "Fully insured.");
    }

    #[test]
    fn test_bold_layout_not_used_when_anchored_matches() {
        let content = "## Anchored {#one}\n\nFrom headings.\n\n**Bold question?**\nBold answer.";
        let faqs = parse_faqs(content);

        assert_eq!(faqs.len(), 1);
        assert_eq!(faqs[0].question, "Anchored");
        assert!(faqs.iter().all(|f| f.question != "Bold question?"));
    }

    #[test]
    fn test_bold_question_without_answer_is_skipped() {
        assert!(parse_faqs("**Lonely question?**\n\n**Next?**\nAnswer.")
            .iter()
            .all(|f| f.question != "Lonely question?"));
    }

    #[test]
    fn test_no_faqs() {
        assert!(parse_faqs("Plain paragraph.\n\n- list").is_empty());
    }
}
