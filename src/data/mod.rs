//! Static site data compiled into the binary

mod portfolio;
mod testimonials;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub use portfolio::{portfolio_by_category, PortfolioItem, PORTFOLIO};
pub use testimonials::{testimonials_by_category, Testimonial, TESTIMONIALS};

/// Which page a static entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    General,
    HomeRepairs,
    MarineRv,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::HomeRepairs => "home-repairs",
            Category::MarineRv => "marine-rv",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(Category::General),
            "home-repairs" => Ok(Category::HomeRepairs),
            "marine-rv" => Ok(Category::MarineRv),
            other => Err(format!("unknown category: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in [Category::General, Category::HomeRepairs, Category::MarineRv] {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert!("boats".parse::<Category>().is_err());
        assert_eq!(
            serde_json::to_string(&Category::MarineRv).unwrap(),
            "\"marine-rv\""
        );
    }
}
