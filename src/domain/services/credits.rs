use serde::Serialize;

use crate::domain::models::event::Council;
use crate::domain::models::profile::{CreditSummary, CreditsBreakdown, MonthCredits, SpecialtyHours};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditProgress {
    pub current: f32,
    pub total: f32,
    /// Fraction of the cycle requirement met, capped at 1.
    pub ratio: f32,
    pub remaining: f32,
    pub days_to_renewal: u32,
    pub cycle: String,
}

pub fn credit_progress(summary: &CreditSummary) -> CreditProgress {
    let ratio = if summary.total > 0.0 {
        (summary.current / summary.total).clamp(0.0, 1.0)
    } else {
        1.0
    };

    CreditProgress {
        current: summary.current,
        total: summary.total,
        ratio,
        remaining: (summary.total - summary.current).max(0.0),
        days_to_renewal: summary.days_to_renewal,
        cycle: summary.cycle.clone(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CouncilShare {
    pub council: Council,
    pub hours: f32,
    /// Part of the cycle requirement this council's hours cover, capped at 1.
    pub share: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownView {
    pub this_month: MonthCredits,
    pub by_council: Vec<CouncilShare>,
    /// e.g. "DMC 14.5 • RMC 4.0"
    pub council_summary: String,
    pub by_specialty: Vec<SpecialtyHours>,
    pub specialty_count: usize,
}

pub fn credits_breakdown(breakdown: CreditsBreakdown, summary: &CreditSummary) -> BreakdownView {
    let by_council: Vec<CouncilShare> = breakdown
        .by_council
        .into_iter()
        .map(|c| CouncilShare {
            council: c.council,
            hours: c.hours,
            share: if summary.total > 0.0 {
                (c.hours / summary.total).clamp(0.0, 1.0)
            } else {
                0.0
            },
        })
        .collect();

    let council_summary = by_council
        .iter()
        .map(|c| format!("{} {:.1}", c.council, c.hours))
        .collect::<Vec<_>>()
        .join(" • ");

    BreakdownView {
        this_month: breakdown.this_month,
        by_council,
        council_summary,
        specialty_count: breakdown.by_specialty.len(),
        by_specialty: breakdown.by_specialty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(current: f32, total: f32) -> CreditSummary {
        CreditSummary {
            current,
            total,
            days_to_renewal: 225,
            cycle: "2025–2030".into(),
        }
    }

    #[test]
    fn test_partial_progress() {
        let p = credit_progress(&summary(18.5, 30.0));
        assert!((p.ratio - 18.5 / 30.0).abs() < 1e-6);
        assert!((p.remaining - 11.5).abs() < 1e-6);
    }

    #[test]
    fn test_breakdown_shares_and_summary() {
        use crate::infra::seed::seed_credits_breakdown;

        let view = credits_breakdown(seed_credits_breakdown(), &summary(18.5, 30.0));
        assert_eq!(view.council_summary, "DMC 14.5 • RMC 4.0");
        assert_eq!(view.by_council[0].council, Council::Dmc);
        assert!((view.by_council[0].share - 14.5 / 30.0).abs() < 1e-6);
        assert_eq!(view.specialty_count, 4);
        assert_eq!(view.this_month.events[0].title, "Critical Care Update 2025");

        let untracked = credits_breakdown(seed_credits_breakdown(), &summary(0.0, 0.0));
        assert!(untracked.by_council.iter().all(|c| c.share == 0.0));
    }

    #[test]
    fn test_over_target_is_capped() {
        let p = credit_progress(&summary(42.0, 30.0));
        assert_eq!(p.ratio, 1.0);
        assert_eq!(p.remaining, 0.0);
        assert_eq!(credit_progress(&summary(0.0, 0.0)).ratio, 1.0);
    }
}
