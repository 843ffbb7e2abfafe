use serde::{Deserialize, Serialize};

use crate::domain::models::event::Council;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreditSummary {
    pub current: f32,
    pub total: f32,
    pub days_to_renewal: u32,
    pub cycle: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoctorProfile {
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub credits: CreditSummary,
    pub next_actions: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCredit {
    pub title: String,
    pub hours: f32,
    pub date: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthCredits {
    pub total: f32,
    pub events: Vec<MonthlyCredit>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CouncilHours {
    pub council: Council,
    pub hours: f32,
}

/// Specialty labels here are free text as recorded on certificates.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpecialtyHours {
    pub name: String,
    pub hours: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreditsBreakdown {
    pub this_month: MonthCredits,
    pub by_council: Vec<CouncilHours>,
    pub by_specialty: Vec<SpecialtyHours>,
}

/// The signed-in organizer. Events are attributed by organizer display name,
/// so `hosted_as` lists every name this account publishes under.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizerProfile {
    pub name: String,
    pub avatar: String,
    pub hosted_as: Vec<String>,
}
