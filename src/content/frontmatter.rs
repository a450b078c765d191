//! Front-matter parsing

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Custom deserializer that accepts any YAML scalar as text.
///
/// Numbers and booleans are kept in their textual form, null becomes `None`.
fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct ScalarText;

    impl<'de> Visitor<'de> for ScalarText {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or scalar value")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(ScalarText)
        }
    }

    deserializer.deserialize_any(ScalarText)
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}

/// Keywords as a string, or a list of scalars; any other shape is dropped with a warning
fn lenient_keywords<'de, D>(deserializer: D) -> Result<Option<Keywords>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_yaml::Value;

    let keywords = match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::Sequence(items) => Some(Keywords::List(
            items.iter().filter_map(scalar_text).collect(),
        )),
        other => match scalar_text(&other) {
            Some(text) => Some(Keywords::Text(text)),
            None => {
                tracing::warn!("Ignoring front-matter keywords of unsupported shape");
                None
            }
        },
    };
    Ok(keywords)
}

/// `true`/`false`, also as text; anything else is dropped with a warning
fn lenient_opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_yaml::Value;

    let flag = match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::Bool(b) => Some(b),
        Value::String(s) if s.trim().eq_ignore_ascii_case("true") => Some(true),
        Value::String(s) if s.trim().eq_ignore_ascii_case("false") => Some(false),
        other => {
            tracing::warn!("Ignoring non-boolean front-matter flag: {:?}", other);
            None
        }
    };
    Ok(flag)
}

fn scalar_text(value: &serde_yaml::Value) -> Option<String> {
    use serde_yaml::Value;

    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Keywords may be written as one comma-separated string or as a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Keywords {
    Text(String),
    List(Vec<String>),
}

impl Keywords {
    /// Keywords joined for a `<meta name="keywords">` value
    pub fn joined(&self) -> String {
        match self {
            Keywords::Text(text) => text.clone(),
            Keywords::List(list) => list.join(", "),
        }
    }
}

/// Front-matter data from a page or blog article
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub headline: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub subheadline: Option<String>,
    #[serde(deserialize_with = "lenient_keywords")]
    pub keywords: Option<Keywords>,
    #[serde(rename = "og:title", deserialize_with = "lenient_opt_string")]
    pub og_title: Option<String>,
    #[serde(rename = "og:description", deserialize_with = "lenient_opt_string")]
    pub og_description: Option<String>,
    #[serde(rename = "og:image", deserialize_with = "lenient_opt_string")]
    pub og_image: Option<String>,
    #[serde(rename = "og:type", deserialize_with = "lenient_opt_string")]
    pub og_type: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub canonical: Option<String>,

    // Blog articles
    #[serde(deserialize_with = "lenient_opt_string")]
    pub author: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub category: Option<String>,
    #[serde(rename = "coverImage", deserialize_with = "lenient_opt_string")]
    pub cover_image: Option<String>,
    #[serde(rename = "heroImage", deserialize_with = "lenient_opt_string")]
    pub hero_image: Option<String>,
    /// Share image for articles (`ogImage`), distinct from the page-level `og:image`
    #[serde(rename = "ogImage", deserialize_with = "lenient_opt_string")]
    pub share_image: Option<String>,
    #[serde(deserialize_with = "lenient_opt_bool")]
    pub featured: Option<bool>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub status: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), serde_yaml::Error> {
        let trimmed = content.trim_start();

        if !trimmed.starts_with("---") {
            return Ok((FrontMatter::default(), content));
        }

        let rest = trimmed[3..].trim_start_matches(['\n', '\r']);
        let Some(end_pos) = rest.find("\n---") else {
            // No closing ---, treat as no front-matter
            return Ok((FrontMatter::default(), content));
        };

        let yaml_content = &rest[..end_pos];
        let remaining = strip_line_break(rest[end_pos + 4..].trim_start_matches(['-']));

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        // A leading horizontal rule is not front-matter unless the block
        // holds at least one `key: value` line
        if !yaml_content.lines().any(looks_like_yaml_key) {
            return Ok((FrontMatter::default(), content));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml_content)?;
        Ok((fm, remaining))
    }

    /// Placeholder returned when a content file cannot be loaded
    pub fn fallback(id: &str) -> Self {
        Self {
            title: format!("Error loading {}", id),
            description: String::new(),
            ..Default::default()
        }
    }

    /// Required fields `title` and `description` are both non-empty
    pub fn is_valid(&self) -> bool {
        !self.title.is_empty() && !self.description.is_empty()
    }

    /// Parse the date string into a DateTime
    pub fn parse_date(&self) -> Option<DateTime<Local>> {
        self.date.as_deref().and_then(parse_date_string)
    }
}

/// Drop the single line terminator that closes the front-matter fence
fn strip_line_break(s: &str) -> &str {
    s.strip_prefix("\r\n")
        .or_else(|| s.strip_prefix('\n'))
        .unwrap_or(s)
}

fn looks_like_yaml_key(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return false;
    }
    let Some(colon_pos) = trimmed.find(':') else {
        return false;
    };

    let key = &trimmed[..colon_pos];
    let after_colon = &trimmed[colon_pos + 1..];

    // `og:title` style keys put the first colon inside the key
    let key_ok = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        && !matches!(key, "http" | "https" | "ftp");

    key_ok && (after_colon.is_empty() || after_colon.starts_with(' ') || key == "og")
}

/// Parse a date string in various formats
pub(crate) fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];

    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return dt.and_local_timezone(Local).earliest();
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = chrono::NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0)?.and_local_timezone(Local).earliest();
        }
    }

    None
}
