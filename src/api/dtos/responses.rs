use serde::Serialize;
use strum::IntoEnumIterator;

use crate::domain::models::{
    badge::Badge,
    certificate::{Certificate, PassbookFilter},
    criteria::{DateRange, FilterCriteria, Place, Selection, SortKey},
    draft::{EventDraft, WizardStep},
    event::{City, Council, Event, EventFormat, Specialty},
    notification::Notification,
    profile::{DoctorProfile, OrganizerProfile},
};
use crate::domain::services::{
    achievements::BadgeGroup,
    credits::{BreakdownView, CreditProgress},
    navigation::Shell,
    organizer_stats::{HostedEvent, OrganizerStats},
    passbook::{LedgerTotals, RenewalPack},
};

/// Envelope for every GET view. Public pages carry no shell.
#[derive(Debug, Serialize)]
pub struct Page<T: Serialize> {
    pub route: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shell: Option<Shell>,
    pub view: T,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorHomeView {
    pub profile: DoctorProfile,
    pub progress: CreditProgress,
    pub breakdown: BreakdownView,
    pub next_actions: Vec<String>,
    pub recent_certificates: Vec<Certificate>,
    pub badges: Vec<Badge>,
    pub next_badge: Option<Badge>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementsView {
    pub unlocked: usize,
    pub total: usize,
    pub groups: Vec<BadgeGroup>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassbookView {
    pub filter: PassbookFilter,
    pub filters: Vec<PassbookFilter>,
    pub councils: Vec<Council>,
    pub totals: LedgerTotals,
    pub certificates: Vec<Certificate>,
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub formats: Vec<Selection<EventFormat>>,
    pub councils: Vec<Selection<Council>>,
    pub specialties: Vec<Selection<Specialty>>,
    pub locations: Vec<Selection<Place>>,
    pub date_ranges: Vec<DateRange>,
    pub sorts: Vec<SortKey>,
}

fn choices<T: IntoEnumIterator>() -> Vec<Selection<T>> {
    std::iter::once(Selection::All)
        .chain(T::iter().map(Selection::Only))
        .collect()
}

impl FilterOptions {
    pub fn all() -> Self {
        let locations = std::iter::once(Selection::All)
            .chain(City::iter().map(|c| Selection::Only(Place::City(c))))
            .chain(std::iter::once(Selection::Only(Place::Online)))
            .collect();

        Self {
            formats: choices(),
            councils: choices(),
            specialties: choices(),
            locations,
            date_ranges: DateRange::iter().collect(),
            sorts: SortKey::iter().collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryView {
    pub criteria: FilterCriteria,
    pub options: FilterOptions,
    pub result_label: String,
    pub events: Vec<Event>,
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepStatus {
    pub number: u8,
    pub name: String,
    pub required: bool,
    pub valid: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardView {
    pub steps: Vec<StepStatus>,
    pub can_publish: bool,
    pub preview: Event,
    pub draft: EventDraft,
}

impl WizardView {
    pub fn of(draft: EventDraft) -> Self {
        let steps = WizardStep::iter()
            .map(|step| StepStatus {
                number: step.number(),
                name: step.to_string(),
                required: step.required(),
                valid: draft.is_step_valid(step),
            })
            .collect();

        Self {
            steps,
            can_publish: draft.can_publish(),
            preview: draft.preview(),
            draft,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPageView {
    pub event: Event,
    pub long_date: Option<String>,
    pub time_range: String,
    pub venue: Option<String>,
    pub agenda_empty_message: Option<&'static str>,
    pub faculty_empty_message: Option<&'static str>,
    pub back: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizerProfileView {
    pub profile: OrganizerProfile,
    pub stats: OrganizerStats,
    pub events: Vec<HostedEvent>,
}

#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub notification: Notification,
}

#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub path: String,
    pub url: String,
    pub notification: Notification,
}

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub pack: RenewalPack,
    pub notification: Notification,
}

#[derive(Debug, Serialize)]
pub struct PublishResponse {
    pub draft: EventDraft,
    pub notification: Notification,
}
