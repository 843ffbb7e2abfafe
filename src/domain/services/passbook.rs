use serde::Serialize;

use crate::domain::models::certificate::{Certificate, PassbookFilter};
use crate::domain::models::event::Council;
use crate::domain::models::notification::Notification;
use crate::error::AppError;

pub const EMPTY_FILTER_MESSAGE: &str = "No certificates found with this filter";
pub const MISSING_COUNCIL_MESSAGE: &str = "Please select a council";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerTotals {
    pub certificate_count: usize,
    pub total_hours: f32,
}

pub fn totals(certificates: &[Certificate]) -> LedgerTotals {
    LedgerTotals {
        certificate_count: certificates.len(),
        total_hours: certificates.iter().map(|c| c.hours).sum(),
    }
}

pub fn apply_filter(certificates: &[Certificate], filter: PassbookFilter) -> Vec<Certificate> {
    certificates
        .iter()
        .filter(|c| filter.admits(c))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenewalPack {
    pub council: Council,
    pub certificates: Vec<Certificate>,
    pub total_hours: f32,
}

/// Bundles the ledger entries recognised by `council`. Nothing is generated;
/// the pack is a summary of what would be exported.
pub fn renewal_pack(certificates: &[Certificate], council: Option<Council>) -> Result<RenewalPack, AppError> {
    let council = council.ok_or_else(|| AppError::Validation(MISSING_COUNCIL_MESSAGE.into()))?;
    let selected: Vec<Certificate> = certificates
        .iter()
        .filter(|c| c.council == council)
        .cloned()
        .collect();
    let total_hours = selected.iter().map(|c| c.hours).sum();

    Ok(RenewalPack {
        council,
        certificates: selected,
        total_hours,
    })
}

pub fn renewal_ready_notification(council: Council) -> Notification {
    Notification::success("Renewal pack ready").with_description(format!(
        "Your {council} renewal pack has been prepared and will download shortly."
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::seed::seed_certificates;

    fn ids(certs: &[Certificate]) -> Vec<&str> {
        certs.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_totals_over_whole_ledger() {
        let totals = totals(&seed_certificates());
        assert_eq!(totals.certificate_count, 6);
        assert!((totals.total_hours - 18.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_filters() {
        let ledger = seed_certificates();
        assert_eq!(apply_filter(&ledger, PassbookFilter::All).len(), 6);
        assert_eq!(ids(&apply_filter(&ledger, PassbookFilter::Dmc)), vec!["1", "2", "4", "5"]);
        assert_eq!(ids(&apply_filter(&ledger, PassbookFilter::Rmc)), vec!["3", "6"]);
        assert_eq!(ids(&apply_filter(&ledger, PassbookFilter::Locked)), vec!["3"]);
    }

    #[test]
    fn test_renewal_pack_requires_council() {
        let err = renewal_pack(&seed_certificates(), None).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == MISSING_COUNCIL_MESSAGE));
    }

    #[test]
    fn test_renewal_pack_for_rmc() {
        let pack = renewal_pack(&seed_certificates(), Some(Council::Rmc)).unwrap();
        assert_eq!(ids(&pack.certificates), vec!["3", "6"]);
        assert!((pack.total_hours - 6.0).abs() < f32::EPSILON);

        let toast = renewal_ready_notification(Council::Rmc);
        assert_eq!(toast.title, "Renewal pack ready");
        assert!(toast.description.unwrap().starts_with("Your RMC renewal pack"));
    }
}
