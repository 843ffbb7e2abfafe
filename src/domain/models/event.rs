use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum EventFormat {
    #[strum(serialize = "Online")]
    #[serde(rename = "Online")]
    Online,
    #[strum(serialize = "In-person")]
    #[serde(rename = "In-person")]
    InPerson,
    #[strum(serialize = "Hybrid")]
    #[serde(rename = "Hybrid")]
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum Council {
    #[strum(serialize = "DMC")]
    #[serde(rename = "DMC")]
    Dmc,
    #[strum(serialize = "RMC")]
    #[serde(rename = "RMC")]
    Rmc,
}

/// Specialties offered in discovery. Closed so that a filter value can never
/// drift away from what the catalog actually carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum Specialty {
    #[strum(serialize = "Critical Care")]
    #[serde(rename = "Critical Care")]
    CriticalCare,
    #[strum(serialize = "Cardiology")]
    #[serde(rename = "Cardiology")]
    Cardiology,
    #[strum(serialize = "Neurology")]
    #[serde(rename = "Neurology")]
    Neurology,
    #[strum(serialize = "Anesthesiology")]
    #[serde(rename = "Anesthesiology")]
    Anesthesiology,
    #[strum(serialize = "Emergency Medicine")]
    #[serde(rename = "Emergency Medicine")]
    EmergencyMedicine,
    #[strum(serialize = "Pediatrics")]
    #[serde(rename = "Pediatrics")]
    Pediatrics,
    #[strum(serialize = "Obstetrics")]
    #[serde(rename = "Obstetrics")]
    Obstetrics,
    #[strum(serialize = "Geriatrics")]
    #[serde(rename = "Geriatrics")]
    Geriatrics,
    #[strum(serialize = "Radiology")]
    #[serde(rename = "Radiology")]
    Radiology,
    #[strum(serialize = "Pain Medicine")]
    #[serde(rename = "Pain Medicine")]
    PainMedicine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum City {
    Delhi,
    Mumbai,
    Jaipur,
    Lucknow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EventStatus {
    Live,
    New,
    Pending,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum FacultyRole {
    Speaker,
    Chair,
    Moderator,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgendaItem {
    pub id: String,
    pub start_time: String,
    pub title: String,
    pub speaker: String,
    pub duration_min: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FacultyMember {
    pub id: String,
    pub name: String,
    pub role: FacultyRole,
    pub affiliation: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OrganizerRef {
    pub name: String,
    pub avatar: String,
}

/// A catalog event. Date and times stay as the raw strings the catalog was
/// seeded with; use the typed accessors to interpret them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub format: EventFormat,
    pub council: Council,
    pub specialty: Option<Specialty>,
    pub status: Option<EventStatus>,
    pub venue: Option<String>,
    pub city: Option<City>,
    pub location: Option<String>,
    pub seats_left: Option<u32>,
    pub estimated_credits: Option<f32>,
    pub cover_image: String,
    pub organizer: OrganizerRef,
    pub agenda: Vec<AgendaItem>,
    pub faculty: Vec<FacultyMember>,
    pub streaming_link: Option<String>,
    pub ref_number: Option<String>,
}

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

impl Event {
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }

    pub fn start_time_of_day(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(self.start_time.trim(), TIME_FORMAT).ok()
    }

    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        Some(self.calendar_date()?.and_time(self.start_time_of_day()?))
    }

    pub fn is_online(&self) -> bool {
        self.format == EventFormat::Online
    }

    /// Venue details only make sense for events with a physical component.
    pub fn physical_venue(&self) -> Option<&str> {
        if self.is_online() {
            return None;
        }
        self.venue.as_deref().filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_enum_labels_match_ui_strings() {
        assert_eq!(EventFormat::InPerson.to_string(), "In-person");
        assert_eq!(EventFormat::from_str("Hybrid").unwrap(), EventFormat::Hybrid);
        assert_eq!(Specialty::from_str("Pain Medicine").unwrap(), Specialty::PainMedicine);
        assert_eq!(Council::Rmc.to_string(), "RMC");
        assert!(Specialty::from_str("Anesthesia").is_err());
        assert_eq!(serde_json::to_value(EventStatus::Live).unwrap(), "live");
    }
}
