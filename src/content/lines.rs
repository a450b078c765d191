//! Line tokenizer shared by the structural parsers
//!
//! Every parser in this module tree works on a stream of classified lines
//! instead of matching patterns against the raw text. Classification looks at
//! the trimmed line, except for headings which must start in column zero.

/// Classification of a single markdown line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty or whitespace-only line
    Blank,
    /// `#`-style heading starting in column zero, `level` in 1..=6
    Heading { level: usize, text: &'a str },
    /// `- item`, with the marker stripped
    ListItem(&'a str),
    /// A line that is entirely `**bold**`, with the markers stripped
    Bold(&'a str),
    /// `N. **Title** rest`
    NumberedBold {
        number: u32,
        title: &'a str,
        rest: &'a str,
    },
    /// A line of three or more dashes
    Rule,
    /// `| a | b |`
    TableRow(&'a str),
    /// Anything else, trimmed
    Text(&'a str),
}

/// Classify one line
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(heading) = heading(line) {
        return heading;
    }

    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if trimmed.len() >= 3 && trimmed.chars().all(|c| c == '-') {
        return LineKind::Rule;
    }
    if let Some(item) = trimmed.strip_prefix("- ") {
        return LineKind::ListItem(item.trim());
    }
    if trimmed.starts_with('|') {
        return LineKind::TableRow(trimmed);
    }
    if let Some(inner) = bold_line(trimmed) {
        return LineKind::Bold(inner);
    }
    if let Some(step) = numbered_bold(trimmed) {
        return step;
    }

    LineKind::Text(trimmed)
}

/// Split text into lines and classify each one
pub fn tokenize(text: &str) -> Vec<(&str, LineKind<'_>)> {
    text.lines().map(|line| (line, classify(line))).collect()
}

fn heading(line: &str) -> Option<LineKind<'_>> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = &line[level..];
    if !rest.starts_with(' ') {
        return None;
    }
    Some(LineKind::Heading {
        level,
        text: rest.trim(),
    })
}

/// `**text**` spanning the whole trimmed line
pub fn bold_line(trimmed: &str) -> Option<&str> {
    let inner = trimmed.strip_prefix("**")?.strip_suffix("**")?;
    if inner.is_empty() || inner.contains("**") {
        return None;
    }
    Some(inner.trim())
}

fn numbered_bold(trimmed: &str) -> Option<LineKind<'_>> {
    let digits = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let number = trimmed[..digits].parse().ok()?;
    let after_dot = trimmed[digits..].strip_prefix('.')?;
    let after_space = after_dot.strip_prefix(char::is_whitespace)?;
    let bold = after_space.strip_prefix("**")?;
    let close = bold.find("**")?;

    Some(LineKind::NumberedBold {
        number,
        title: bold[..close].trim(),
        rest: bold[close + 2..].trim(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings() {
        assert_eq!(
            classify("## Services"),
            LineKind::Heading {
                level: 2,
                text: "Services"
            }
        );
        assert_eq!(
            classify("### Drywall  "),
            LineKind::Heading {
                level: 3,
                text: "Drywall"
            }
        );
        // Needs a space after the hashes and must start the line
        assert_eq!(classify("##Services"), LineKind::Text("##Services"));
        assert_eq!(classify("  ## Indented"), LineKind::Text("## Indented"));
    }

    #[test]
    fn test_list_and_rule() {
        assert_eq!(classify("  - Fence repair"), LineKind::ListItem("Fence repair"));
        assert_eq!(classify("---"), LineKind::Rule);
        assert_eq!(classify("-----"), LineKind::Rule);
        assert_eq!(classify("-"), LineKind::Text("-"));
    }

    #[test]
    fn test_bold_line() {
        assert_eq!(classify("**Interior**"), LineKind::Bold("Interior"));
        assert_eq!(
            classify("**Fast** and **clean**"),
            LineKind::Text("**Fast** and **clean**")
        );
        assert_eq!(classify("****"), LineKind::Text("****"));
    }

    #[test]
    fn test_numbered_bold() {
        assert_eq!(
            classify("2. **Inspect** We look at the damage."),
            LineKind::NumberedBold {
                number: 2,
                title: "Inspect",
                rest: "We look at the damage."
            }
        );
        assert_eq!(classify("2. Inspect"), LineKind::Text("2. Inspect"));
    }

    #[test]
    fn test_table_row() {
        assert_eq!(
            classify("| Leak | High |"),
            LineKind::TableRow("| Leak | High |")
        );
    }

    #[test]
    fn test_tokenize_keeps_raw_lines() {
        let lines = tokenize("## A\n  text  \n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].0, "  text  ");
        assert_eq!(lines[1].1, LineKind::Text("text"));
    }
}
