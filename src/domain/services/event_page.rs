use crate::domain::models::event::Event;

pub const EMPTY_AGENDA_MESSAGE: &str = "Agenda will be announced soon";
pub const EMPTY_FACULTY_MESSAGE: &str = "Faculty will be announced soon";

/// e.g. "Thursday, November 20, 2025"
pub fn long_date(event: &Event) -> Option<String> {
    event
        .calendar_date()
        .map(|d| d.format("%A, %B %-d, %Y").to_string())
}

pub fn time_range(event: &Event) -> String {
    format!("{} – {}", event.start_time, event.end_time)
}

pub fn agenda_empty_message(event: &Event) -> Option<&'static str> {
    event.agenda.is_empty().then_some(EMPTY_AGENDA_MESSAGE)
}

pub fn faculty_empty_message(event: &Event) -> Option<&'static str> {
    event.faculty.is_empty().then_some(EMPTY_FACULTY_MESSAGE)
}
