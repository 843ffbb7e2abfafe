//! Route-level concerns shared by every view: which role a path belongs to,
//! the shell navigation, and where "back" leads.

use serde::Serialize;
use strum::Display;

pub const HOME_PATH: &str = "/";
pub const ORGANIZER_PREFIX: &str = "/organizer";
pub const ORGANIZER_EVENTS_PATH: &str = "/organizer/events";
pub const PUBLIC_EVENT_PREFIX: &str = "/event/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Doctor,
    Organizer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shell {
    pub role: Role,
    pub nav: Vec<NavItem>,
}

const DOCTOR_NAV: [(&str, &str); 3] = [
    ("Home", "/"),
    ("Achievements", "/achievements"),
    ("Passbook", "/passbook"),
];

const ORGANIZER_NAV: [(&str, &str); 3] = [
    ("Create Event", "/organizer/create"),
    ("My Events", "/organizer/events"),
    ("Profile", "/organizer/profile"),
];

pub fn role_for_path(path: &str) -> Role {
    if path.starts_with(ORGANIZER_PREFIX) {
        Role::Organizer
    } else {
        Role::Doctor
    }
}

/// Public pages are shareable and render without navigation chrome.
pub fn is_public_path(path: &str) -> bool {
    path.starts_with(PUBLIC_EVENT_PREFIX)
}

pub fn shell_for_path(path: &str) -> Option<Shell> {
    if is_public_path(path) {
        return None;
    }
    let role = role_for_path(path);
    let entries: &[(&str, &str)] = match role {
        Role::Doctor => &DOCTOR_NAV,
        Role::Organizer => &ORGANIZER_NAV,
    };
    Some(Shell {
        role,
        nav: entries
            .iter()
            .map(|&(label, target)| NavItem {
                label,
                path: target,
                active: target == path,
            })
            .collect(),
    })
}

pub fn event_path(id: &str) -> String {
    format!("{PUBLIC_EVENT_PREFIX}{id}")
}

/// Where the public page's back action goes. Organizer pages all return to
/// the organizer listing; anything that is not an in-app path goes home.
pub fn back_target(referrer: Option<&str>) -> String {
    match referrer.map(str::trim) {
        Some(r) if r.starts_with(ORGANIZER_PREFIX) => ORGANIZER_EVENTS_PATH.to_string(),
        Some(r) if r.starts_with('/') && !r.starts_with("//") => r.to_string(),
        _ => HOME_PATH.to_string(),
    }
}
