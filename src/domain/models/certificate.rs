use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::domain::models::event::Council;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CertificateStatus {
    Verified,
    /// Awaiting the council reference ("RMC Ref pending").
    Pending,
    Locked,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,
    pub event_title: String,
    pub date: String,
    pub council: Council,
    pub hours: f32,
    pub status: CertificateStatus,
    pub venue: Option<String>,
    // Ledger entries keep whatever the issuing event called its specialty.
    pub specialty: Option<String>,
    pub certificate_url: Option<String>,
}

/// Passbook filter chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum PassbookFilter {
    #[default]
    #[serde(rename = "all")]
    #[strum(serialize = "all")]
    All,
    #[serde(rename = "DMC")]
    #[strum(serialize = "DMC")]
    Dmc,
    #[serde(rename = "RMC")]
    #[strum(serialize = "RMC")]
    Rmc,
    #[serde(rename = "locked")]
    #[strum(serialize = "locked")]
    Locked,
}

impl PassbookFilter {
    pub fn admits(&self, certificate: &Certificate) -> bool {
        match self {
            PassbookFilter::All => true,
            PassbookFilter::Dmc => certificate.council == Council::Dmc,
            PassbookFilter::Rmc => certificate.council == Council::Rmc,
            PassbookFilter::Locked => certificate.status == CertificateStatus::Pending,
        }
    }
}
