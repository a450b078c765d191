//! Before/after project gallery

use serde::Serialize;

use super::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: u32,
    pub category: Category,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub before_image: &'static str,
    pub after_image: &'static str,
}

pub static PORTFOLIO: [PortfolioItem; 6] = [
    PortfolioItem {
        id: 1,
        category: Category::HomeRepairs,
        title: "Drywall & Ceiling Restoration",
        subtitle: "Water Damage",
        description: "Replaced damaged drywall, matched the texture, repainted, and left a clean finish.",
        before_image: "/images/portfolio/drywall-before.jpg",
        after_image: "/images/portfolio/drywall-after.jpg",
    },
    PortfolioItem {
        id: 2,
        category: Category::HomeRepairs,
        title: "Kitchen Cabinet Repair",
        subtitle: "Water Exposure",
        description: "Restored cabinet base, reinforced structure, resealed surfaces, and realigned doors.",
        before_image: "/images/portfolio/cabinet-before.jpg",
        after_image: "/images/portfolio/cabinet-after.jpg",
    },
    PortfolioItem {
        id: 3,
        category: Category::HomeRepairs,
        title: "Exterior Fence & Gate Repair",
        subtitle: "Storm Damage",
        description: "Replaced damaged posts, reinforced gate, sealed joints, and ensured smooth operation.",
        before_image: "/images/portfolio/fence-before.jpg",
        after_image: "/images/portfolio/fence-after.jpg",
    },
    PortfolioItem {
        id: 101,
        category: Category::MarineRv,
        title: "RV Water Damage Restoration",
        subtitle: "Moisture Intrusion",
        description: "Removed damaged paneling, dried interior framing thoroughly, and rebuilt with moisture-resistant materials — finish matches perfectly.",
        before_image: "/images/portfolio/rv-water-before.jpg",
        after_image: "/images/portfolio/rv-water-after.jpg",
    },
    PortfolioItem {
        id: 102,
        category: Category::MarineRv,
        title: "Boat Gelcoat Repair",
        subtitle: "Dock Impact",
        description: "Repaired deep gelcoat scratches, color-matched perfectly, and blended seamlessly — you cannot tell where the repair was done.",
        before_image: "/images/portfolio/boat-gelcoat-before.jpg",
        after_image: "/images/portfolio/boat-gelcoat-after.jpg",
    },
    PortfolioItem {
        id: 103,
        category: Category::MarineRv,
        title: "Motorhome Electrical Repair",
        subtitle: "Electrical System",
        description: "Diagnosed failed connection points, repaired wiring properly, tested every circuit — back on the road within hours.",
        before_image: "/images/portfolio/rv-electrical-before.jpg",
        after_image: "/images/portfolio/rv-electrical-after.jpg",
    },
];

pub fn portfolio_by_category(category: Category) -> Vec<&'static PortfolioItem> {
    PORTFOLIO.iter().filter(|p| p.category == category).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_by_category() {
        let home = portfolio_by_category(Category::HomeRepairs);
        assert_eq!(home.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3]);

        let marine = portfolio_by_category(Category::MarineRv);
        assert_eq!(marine.len(), 3);
        assert_eq!(marine[1].title, "Boat Gelcoat Repair");

        assert!(portfolio_by_category(Category::General).is_empty());
    }
}
