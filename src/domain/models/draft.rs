use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};
use uuid::Uuid;

use crate::domain::models::event::{
    AgendaItem, City, Council, Event, EventFormat, FacultyMember, FacultyRole, OrganizerRef,
};
use crate::error::AppError;

pub const DEFAULT_ORGANIZER_AVATAR: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=organizer";
pub const DEFAULT_AGENDA_MINUTES: u32 = 60;
pub const DEFAULT_ESTIMATED_CREDITS: f32 = 3.0;
pub const PREVIEW_EVENT_ID: &str = "preview";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
pub enum WizardStep {
    #[strum(serialize = "Basics")]
    Basics,
    #[strum(serialize = "Agenda & Faculty")]
    AgendaAndFaculty,
    #[strum(serialize = "Compliance")]
    Compliance,
    #[strum(serialize = "Preview & Publish")]
    PreviewAndPublish,
}

impl WizardStep {
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Basics => 1,
            WizardStep::AgendaAndFaculty => 2,
            WizardStep::Compliance => 3,
            WizardStep::PreviewAndPublish => 4,
        }
    }

    pub fn required(self) -> bool {
        !matches!(self, WizardStep::PreviewAndPublish)
    }
}

/// The create-event form. Never reaches the catalog; it only feeds the live
/// preview and the simulated publish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventDraft {
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub format: EventFormat,
    pub location: String,
    pub city: Option<City>,
    pub cover_image: Option<String>,
    pub organizer_name: String,
    pub organizer_avatar: String,
    pub auto_poster: bool,
    pub description: String,
    pub agenda: Vec<AgendaItem>,
    pub faculty: Vec<FacultyMember>,
    pub streaming_link: String,
    pub council: Council,
    pub advertising_policy: String,
    pub coi_acknowledged: bool,
    pub observer_link: String,
    pub estimated_credits: f32,
    pub published: bool,
}

impl Default for EventDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            date: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            format: EventFormat::Online,
            location: String::new(),
            city: None,
            cover_image: None,
            organizer_name: String::new(),
            organizer_avatar: DEFAULT_ORGANIZER_AVATAR.to_string(),
            auto_poster: true,
            description: String::new(),
            agenda: Vec::new(),
            faculty: Vec::new(),
            streaming_link: String::new(),
            council: Council::Dmc,
            advertising_policy: String::new(),
            coi_acknowledged: false,
            observer_link: String::new(),
            estimated_credits: DEFAULT_ESTIMATED_CREDITS,
            published: false,
        }
    }
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

fn non_empty(value: &str) -> Option<String> {
    filled(value).then(|| value.to_string())
}

impl EventDraft {
    pub fn is_step_valid(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::Basics => {
                filled(&self.title)
                    && filled(&self.date)
                    && filled(&self.start_time)
                    && filled(&self.end_time)
                    && filled(&self.organizer_name)
            }
            WizardStep::AgendaAndFaculty => !self.agenda.is_empty() && !self.faculty.is_empty(),
            WizardStep::Compliance => filled(&self.advertising_policy) && self.coi_acknowledged,
            WizardStep::PreviewAndPublish => true,
        }
    }

    pub fn can_publish(&self) -> bool {
        WizardStep::iter()
            .filter(|s| s.required())
            .all(|s| self.is_step_valid(s))
    }

    pub fn publish(&mut self) -> Result<(), AppError> {
        if self.published {
            return Err(AppError::Conflict("Event is already published".into()));
        }
        if !self.can_publish() {
            let missing: Vec<String> = WizardStep::iter()
                .filter(|s| s.required() && !self.is_step_valid(*s))
                .map(|s| s.to_string())
                .collect();
            return Err(AppError::Validation(format!(
                "Complete required steps before publishing: {}",
                missing.join(", ")
            )));
        }
        self.published = true;
        Ok(())
    }

    pub fn add_agenda_item(&mut self) -> String {
        let id = Uuid::new_v4().to_string();
        self.agenda.push(AgendaItem {
            id: id.clone(),
            start_time: String::new(),
            title: String::new(),
            speaker: String::new(),
            duration_min: DEFAULT_AGENDA_MINUTES,
        });
        id
    }

    /// Returns false when no row has that id.
    pub fn update_agenda_item(&mut self, id: &str, edit: impl FnOnce(&mut AgendaItem)) -> bool {
        match self.agenda.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                edit(item);
                true
            }
            None => false,
        }
    }

    /// Returns false when no row has that id.
    pub fn remove_agenda_item(&mut self, id: &str) -> bool {
        let before = self.agenda.len();
        self.agenda.retain(|item| item.id != id);
        self.agenda.len() != before
    }

    pub fn add_faculty(&mut self) -> String {
        let id = Uuid::new_v4().to_string();
        self.faculty.push(FacultyMember {
            id: id.clone(),
            name: String::new(),
            role: FacultyRole::Speaker,
            affiliation: String::new(),
            avatar: Some(format!("https://api.dicebear.com/7.x/avataaars/svg?seed={id}")),
        });
        id
    }

    pub fn update_faculty(&mut self, id: &str, edit: impl FnOnce(&mut FacultyMember)) -> bool {
        match self.faculty.iter_mut().find(|f| f.id == id) {
            Some(member) => {
                edit(member);
                true
            }
            None => false,
        }
    }

    pub fn remove_faculty(&mut self, id: &str) -> bool {
        let before = self.faculty.len();
        self.faculty.retain(|f| f.id != id);
        self.faculty.len() != before
    }

    /// What the public page would show if this draft were published.
    pub fn preview(&self) -> Event {
        let physical = self.format != EventFormat::Online;
        Event {
            id: PREVIEW_EVENT_ID.to_string(),
            title: if filled(&self.title) { self.title.clone() } else { "Untitled Event".to_string() },
            subtitle: non_empty(&self.subtitle),
            description: non_empty(&self.description),
            date: self.date.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            format: self.format,
            council: self.council,
            specialty: None,
            status: None,
            venue: if physical { non_empty(&self.location) } else { None },
            city: if physical { self.city } else { None },
            location: if physical { non_empty(&self.location) } else { None },
            seats_left: None,
            estimated_credits: Some(self.estimated_credits),
            cover_image: self.cover_image.clone().unwrap_or_default(),
            organizer: OrganizerRef {
                name: self.organizer_name.clone(),
                avatar: self.organizer_avatar.clone(),
            },
            agenda: self.agenda.clone(),
            faculty: self.faculty.clone(),
            streaming_link: non_empty(&self.streaming_link),
            ref_number: None,
        }
    }
}
