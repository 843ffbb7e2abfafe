use serde::Serialize;
use strum::IntoEnumIterator;

use crate::domain::models::badge::{Badge, BadgeCategory};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BadgeGroup {
    pub category: BadgeCategory,
    pub badges: Vec<Badge>,
}

/// One group per category, in display order, including empty ones.
pub fn group_badges(badges: &[Badge]) -> Vec<BadgeGroup> {
    BadgeCategory::iter()
        .map(|category| BadgeGroup {
            category,
            badges: badges.iter().filter(|b| b.category == category).cloned().collect(),
        })
        .collect()
}

pub fn unlocked_count(badges: &[Badge]) -> usize {
    badges.iter().filter(|b| b.unlocked).count()
}

pub fn showcase(badges: &[Badge], limit: usize) -> Vec<Badge> {
    badges.iter().filter(|b| b.unlocked).take(limit).cloned().collect()
}

pub fn next_badge(badges: &[Badge]) -> Option<Badge> {
    badges.iter().find(|b| !b.unlocked).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::seed::seed_badges;

    #[test]
    fn test_grouping_order_and_counts() {
        let badges = seed_badges();
        let groups = group_badges(&badges);
        let shape: Vec<(BadgeCategory, usize)> = groups.iter().map(|g| (g.category, g.badges.len())).collect();
        assert_eq!(
            shape,
            vec![
                (BadgeCategory::Core, 4),
                (BadgeCategory::Contribution, 1),
                (BadgeCategory::Compliance, 2),
            ]
        );
        assert_eq!(unlocked_count(&badges), 4);
    }

    #[test]
    fn test_showcase_and_next() {
        let badges = seed_badges();
        let shown: Vec<String> = showcase(&badges, 4).into_iter().map(|b| b.name).collect();
        assert_eq!(shown, vec!["Council-Ready", "First 10", "Halfway There", "Speaker"]);
        assert_eq!(next_badge(&badges).unwrap().name, "Full Cycle");
        assert!(next_badge(&showcase(&badges, 10)).is_none());
    }
}
