//! Compiled-in demo data served by the in-memory repositories.

use crate::domain::models::badge::{Badge, BadgeCategory};
use crate::domain::models::certificate::{Certificate, CertificateStatus};
use crate::domain::models::event::{
    AgendaItem, City, Council, Event, EventFormat, EventStatus, FacultyMember, FacultyRole,
    OrganizerRef, Specialty,
};
use crate::domain::models::profile::{
    CouncilHours, CreditSummary, CreditsBreakdown, DoctorProfile, MonthCredits, MonthlyCredit,
    OrganizerProfile, SpecialtyHours,
};

const AVATAR_BASE: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";
const COVER_BASE: &str = "https://images.unsplash.com/";

fn avatar(seed: &str) -> String {
    format!("{AVATAR_BASE}{seed}")
}

fn cover(photo: &str) -> String {
    format!("{COVER_BASE}{photo}?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080")
}

fn organizer(name: &str, seed: &str) -> OrganizerRef {
    OrganizerRef {
        name: name.to_string(),
        avatar: avatar(seed),
    }
}

fn agenda(id: &str, start: &str, title: &str, speaker: &str, duration_min: u32) -> AgendaItem {
    AgendaItem {
        id: id.to_string(),
        start_time: start.to_string(),
        title: title.to_string(),
        speaker: speaker.to_string(),
        duration_min,
    }
}

fn faculty(id: &str, name: &str, role: FacultyRole, affiliation: &str, seed: &str) -> FacultyMember {
    FacultyMember {
        id: id.to_string(),
        name: name.to_string(),
        role,
        affiliation: affiliation.to_string(),
        avatar: Some(avatar(seed)),
    }
}

struct Base<'a> {
    id: &'a str,
    title: &'a str,
    subtitle: &'a str,
    date: &'a str,
    start: &'a str,
    end: &'a str,
    format: EventFormat,
    council: Council,
    specialty: Specialty,
    credits: f32,
    seats_left: u32,
    photo: &'a str,
    organizer: OrganizerRef,
    description: &'a str,
}

impl Base<'_> {
    fn build(self) -> Event {
        Event {
            id: self.id.to_string(),
            title: self.title.to_string(),
            subtitle: Some(self.subtitle.to_string()),
            description: Some(self.description.to_string()),
            date: self.date.to_string(),
            start_time: self.start.to_string(),
            end_time: self.end.to_string(),
            format: self.format,
            council: self.council,
            specialty: Some(self.specialty),
            status: None,
            venue: None,
            city: None,
            location: None,
            seats_left: Some(self.seats_left),
            estimated_credits: Some(self.credits),
            cover_image: cover(self.photo),
            organizer: self.organizer,
            agenda: Vec::new(),
            faculty: Vec::new(),
            streaming_link: None,
            ref_number: None,
        }
    }
}

fn at(mut event: Event, location: &str, city: City, venue: &str) -> Event {
    event.location = Some(location.to_string());
    event.city = Some(city);
    event.venue = Some(venue.to_string());
    event
}

fn streamed(mut event: Event, link: &str) -> Event {
    event.streaming_link = Some(link.to_string());
    event
}

pub fn seed_events() -> Vec<Event> {
    let mut critical_care = at(
        Base {
            id: "1",
            title: "Critical Care Update (Day-1)",
            subtitle: "Advanced ICU management strategies for 2025",
            date: "2025-11-20",
            start: "09:00",
            end: "17:00",
            format: EventFormat::Hybrid,
            council: Council::Dmc,
            specialty: Specialty::CriticalCare,
            credits: 6.0,
            seats_left: 15,
            photo: "photo-1605654580413-5a7f24649936",
            organizer: organizer("Dr. Rajesh Kumar", "male-doc-2"),
            description: "Comprehensive update on critical care management with hands-on workshops and case discussions.",
        }
        .build(),
        "AIIMS Convention Center",
        City::Delhi,
        "AIIMS Convention Center",
    );
    critical_care.status = Some(EventStatus::Live);
    critical_care.agenda = vec![
        agenda("a1", "09:00", "ARDS Management 2025", "Dr. Sharma", 60),
        agenda("a2", "10:15", "Sepsis Protocol Updates", "Dr. Verma", 45),
        agenda("a3", "11:15", "Ventilator Strategies", "Dr. Kumar", 60),
    ];
    critical_care.faculty = vec![
        faculty("f1", "Dr. Anjali Sharma", FacultyRole::Speaker, "AIIMS Delhi", "female-doc-1"),
        faculty("f2", "Dr. Vikram Verma", FacultyRole::Speaker, "PGIMER Chandigarh", "male-doc-1"),
        faculty("f3", "Dr. Rajesh Kumar", FacultyRole::Chair, "AIIMS Delhi", "male-doc-2"),
    ];
    let critical_care = streamed(critical_care, "https://zoom.us/j/123456789");

    let mut airway = Base {
        id: "2",
        title: "Airway Workshop — Hands-on",
        subtitle: "Practical skills in difficult airway management",
        date: "2025-11-22",
        start: "08:00",
        end: "16:00",
        format: EventFormat::Online,
        council: Council::Dmc,
        specialty: Specialty::Anesthesiology,
        credits: 5.0,
        seats_left: 3,
        photo: "photo-1637743408313-c9d5e869d9db",
        organizer: organizer("Dr. Priya Singh", "female-doc-2"),
        description: "Intensive hands-on workshop focusing on difficult airway management techniques.",
    }
    .build();
    airway.status = Some(EventStatus::New);
    airway.agenda = vec![
        agenda("a1", "08:00", "Introduction to Difficult Airway", "Dr. Singh", 30),
        agenda("a2", "09:00", "Hands-on: Video Laryngoscopy", "Dr. Malhotra", 120),
        agenda("a3", "11:30", "Fiber-optic Intubation", "Dr. Gupta", 90),
    ];
    airway.faculty = vec![
        faculty("f1", "Dr. Priya Singh", FacultyRole::Chair, "SMS Medical College", "female-doc-2"),
        faculty("f2", "Dr. Amit Malhotra", FacultyRole::Speaker, "AIIMS Jodhpur", "male-doc-3"),
        faculty("f3", "Dr. Neha Gupta", FacultyRole::Speaker, "RML Hospital", "female-doc-3"),
    ];

    let ecmo = streamed(
        Base {
            id: "3",
            title: "ECMO Basics",
            subtitle: "Understanding extracorporeal membrane oxygenation",
            date: "2025-11-25",
            start: "14:00",
            end: "18:00",
            format: EventFormat::Online,
            council: Council::Dmc,
            specialty: Specialty::CriticalCare,
            credits: 3.0,
            seats_left: 50,
            photo: "photo-1759270463144-02b90c57135d",
            organizer: organizer("Dr. Suresh Menon", "male-doc-4"),
            description: "Introduction to ECMO technology, indications, and patient management.",
        }
        .build(),
        "https://zoom.us/j/987654321",
    );

    let cardio = at(
        Base {
            id: "4",
            title: "Cardio Summit Jaipur",
            subtitle: "Latest advances in cardiovascular medicine",
            date: "2025-11-28",
            start: "09:00",
            end: "18:00",
            format: EventFormat::InPerson,
            council: Council::Dmc,
            specialty: Specialty::Cardiology,
            credits: 7.0,
            seats_left: 25,
            photo: "photo-1715111965882-bbdf35de510c",
            organizer: organizer("Dr. Anil Kapoor", "male-doc-5"),
            description: "Full-day summit covering the latest developments in cardiology and interventional procedures.",
        }
        .build(),
        "Fortis Escorts Hospital",
        City::Jaipur,
        "ITC Rajputana",
    );

    let mut neuro = streamed(
        Base {
            id: "5",
            title: "Neuro Imaging Pearls",
            subtitle: "Advanced neuroimaging techniques and interpretation",
            date: "2025-12-01",
            start: "15:00",
            end: "17:30",
            format: EventFormat::Online,
            council: Council::Rmc,
            specialty: Specialty::Neurology,
            credits: 2.0,
            seats_left: 100,
            photo: "photo-1758691463165-ca9b5bc2b28a",
            organizer: organizer("Dr. Meera Iyer", "meera"),
            description: "Learn to interpret complex neuroimaging findings with expert radiologists.",
        }
        .build(),
        "https://meet.google.com/abc-defg-hij",
    );
    neuro.status = Some(EventStatus::Pending);

    let sepsis = streamed(
        at(
            Base {
                id: "6",
                title: "Sepsis Review 2025",
                subtitle: "Evidence-based management of sepsis and septic shock",
                date: "2025-12-03",
                start: "10:00",
                end: "16:00",
                format: EventFormat::Hybrid,
                council: Council::Dmc,
                specialty: Specialty::CriticalCare,
                credits: 5.0,
                seats_left: 12,
                photo: "photo-1718224326658-489bbfbeb2ca",
                organizer: organizer("Dr. Sanjay Desai", "sanjay"),
                description: "Comprehensive review of sepsis management based on latest guidelines.",
            }
            .build(),
            "KEM Hospital",
            City::Mumbai,
            "Taj Lands End",
        ),
        "https://zoom.us/j/456789123",
    );

    let pediatric = streamed(
        Base {
            id: "7",
            title: "Pediatric Emergency Care",
            subtitle: "Managing critically ill children",
            date: "2025-12-05",
            start: "09:00",
            end: "13:00",
            format: EventFormat::Online,
            council: Council::Dmc,
            specialty: Specialty::Pediatrics,
            credits: 3.5,
            seats_left: 75,
            photo: "photo-1758204054548-2d2bb32831c7",
            organizer: organizer("Dr. Kavita Reddy", "kavita"),
            description: "Focused session on pediatric emergency scenarios and management protocols.",
        }
        .build(),
        "https://zoom.us/j/789123456",
    );

    let trauma = at(
        Base {
            id: "8",
            title: "Trauma Life Support Workshop",
            subtitle: "ATLS principles and practice",
            date: "2025-12-08",
            start: "08:00",
            end: "17:00",
            format: EventFormat::InPerson,
            council: Council::Dmc,
            specialty: Specialty::EmergencyMedicine,
            credits: 8.0,
            seats_left: 20,
            photo: "photo-1659353888338-ce940a0f252f",
            organizer: organizer("Dr. Ravi Shankar", "ravi"),
            description: "Comprehensive trauma management workshop following ATLS guidelines.",
        }
        .build(),
        "Trauma Center, KGMU",
        City::Lucknow,
        "Renaissance Lucknow Hotel",
    );

    let obstetric = streamed(
        Base {
            id: "9",
            title: "Obstetric Emergencies Online",
            subtitle: "Managing critical obstetric situations",
            date: "2025-12-10",
            start: "16:00",
            end: "19:00",
            format: EventFormat::Online,
            council: Council::Rmc,
            specialty: Specialty::Obstetrics,
            credits: 2.5,
            seats_left: 60,
            photo: "photo-1762784574791-ded574c44c1f",
            organizer: organizer("Dr. Lakshmi Narayanan", "lakshmi"),
            description: "Case-based learning for managing obstetric emergencies.",
        }
        .build(),
        "https://teams.microsoft.com/l/meetup-join/xxx",
    );

    let geriatric = streamed(
        at(
            Base {
                id: "10",
                title: "Geriatric Care Symposium",
                subtitle: "Comprehensive care for elderly patients",
                date: "2025-12-12",
                start: "09:30",
                end: "16:30",
                format: EventFormat::Hybrid,
                council: Council::Dmc,
                specialty: Specialty::Geriatrics,
                credits: 5.5,
                seats_left: 4,
                photo: "photo-1733222765056-b0790217baa9",
                organizer: organizer("Dr. Ashok Mehta", "ashok"),
                description: "Multi-disciplinary approach to geriatric patient care.",
            }
            .build(),
            "Max Hospital",
            City::Delhi,
            "The Leela Ambience",
        ),
        "https://zoom.us/j/321654987",
    );

    let radiology = at(
        Base {
            id: "11",
            title: "Radiology Update 2025",
            subtitle: "Latest imaging techniques and AI applications",
            date: "2025-12-15",
            start: "10:00",
            end: "17:00",
            format: EventFormat::InPerson,
            council: Council::Rmc,
            specialty: Specialty::Radiology,
            credits: 6.0,
            seats_left: 30,
            photo: "photo-1758691462620-9018c602ed3e",
            organizer: organizer("Dr. Pooja Patel", "pooja"),
            description: "Explore the latest advancements in medical imaging and AI integration.",
        }
        .build(),
        "Tata Memorial Hospital",
        City::Mumbai,
        "Grand Hyatt Mumbai",
    );

    let pain = streamed(
        Base {
            id: "12",
            title: "Pain Management Masterclass",
            subtitle: "Multimodal approaches to chronic pain",
            date: "2025-12-18",
            start: "09:00",
            end: "15:00",
            format: EventFormat::Online,
            council: Council::Dmc,
            specialty: Specialty::PainMedicine,
            credits: 4.5,
            seats_left: 40,
            photo: "photo-1694787590597-ba49c7cdc2cc",
            organizer: organizer("Dr. Arjun Nair", "arjun"),
            description: "Advanced pain management techniques and interventional procedures.",
        }
        .build(),
        "https://zoom.us/j/654987321",
    );

    vec![
        critical_care, airway, ecmo, cardio, neuro, sepsis, pediatric, trauma, obstetric, geriatric,
        radiology, pain,
    ]
}

#[allow(clippy::too_many_arguments)]
fn certificate(
    id: &str,
    event_title: &str,
    date: &str,
    council: Council,
    hours: f32,
    status: CertificateStatus,
    venue: &str,
    specialty: &str,
) -> Certificate {
    Certificate {
        id: id.to_string(),
        event_title: event_title.to_string(),
        date: date.to_string(),
        council,
        hours,
        status,
        venue: Some(venue.to_string()),
        specialty: Some(specialty.to_string()),
        certificate_url: None,
    }
}

/// The four most recent entries, newest first.
pub fn seed_recent_certificates() -> Vec<Certificate> {
    use CertificateStatus::{Pending, Verified};
    vec![
        certificate("1", "Critical Care Update 2025", "Oct 12, 2025", Council::Dmc, 4.0, Verified, "Sheraton Grand, Delhi", "Critical Care"),
        certificate("2", "Advanced Airway Workshop", "Sep 8, 2025", Council::Dmc, 3.5, Verified, "AIIMS Convention Center", "Anesthesia"),
        certificate("3", "ECMO Basics: A Practical Approach", "Aug 20, 2025", Council::Rmc, 4.0, Pending, "Fortis Hospital, Mumbai", "Critical Care"),
        certificate("4", "Cardiac Arrhythmia Summit", "Jul 15, 2025", Council::Dmc, 3.0, Verified, "ITC Grand Bharat", "Cardiology"),
    ]
}

pub fn seed_certificates() -> Vec<Certificate> {
    let mut all = seed_recent_certificates();
    all.push(certificate("5", "Sepsis Management Review", "Jun 10, 2025", Council::Dmc, 2.0, CertificateStatus::Verified, "Max Hospital, Delhi", "Critical Care"));
    all.push(certificate("6", "Neuro Imaging Pearls", "May 22, 2025", Council::Rmc, 2.0, CertificateStatus::Verified, "Manipal Hospital, Bangalore", "Neurology"));
    all
}

fn badge(id: &str, name: &str, description: &str, icon: &str, unlocked_date: Option<&str>, category: BadgeCategory) -> Badge {
    Badge {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        unlocked: unlocked_date.is_some(),
        unlocked_date: unlocked_date.map(str::to_string),
        category,
    }
}

pub fn seed_badges() -> Vec<Badge> {
    use BadgeCategory::{Compliance, Contribution, Core};
    vec![
        badge("1", "Council-Ready", "Completed all required documentation", "council-ready", Some("Jan 2025"), Core),
        badge("2", "First 10", "Earned your first 10 CME hours", "first-10", Some("Feb 2025"), Core),
        badge("3", "Halfway There", "Reached 15 of 30 hours", "halfway", Some("Oct 2025"), Core),
        badge("4", "Speaker", "Contributed as faculty at an accredited event", "speaker", Some("Sep 2025"), Contribution),
        badge("5", "Full Cycle", "Complete all 30 hours in current cycle", "full-cycle", None, Core),
        badge("6", "Evidence Pro", "Maintained complete audit trail", "evidence-pro", None, Compliance),
        badge("7", "RMC Seal", "All certificates verified by RMC", "rmc-seal", None, Compliance),
    ]
}

pub fn seed_doctor_profile() -> DoctorProfile {
    DoctorProfile {
        name: "Dr. Priya Sharma".to_string(),
        email: "priya.sharma@example.com".to_string(),
        avatar: avatar("Priya"),
        credits: CreditSummary {
            current: 18.5,
            total: 30.0,
            days_to_renewal: 225,
            cycle: "2025–2030".to_string(),
        },
        next_actions: vec![
            "Find 2-hr webinar".to_string(),
            "Claim speaker +1".to_string(),
            "Nudge organizer for RMC Ref".to_string(),
        ],
    }
}

pub fn seed_credits_breakdown() -> CreditsBreakdown {
    let specialty = |name: &str, hours: f32| SpecialtyHours { name: name.to_string(), hours };

    CreditsBreakdown {
        this_month: MonthCredits {
            total: 3.0,
            events: vec![MonthlyCredit {
                title: "Critical Care Update 2025".to_string(),
                hours: 4.0,
                date: "Oct 12".to_string(),
            }],
        },
        by_council: vec![
            CouncilHours { council: Council::Dmc, hours: 14.5 },
            CouncilHours { council: Council::Rmc, hours: 4.0 },
        ],
        by_specialty: vec![
            specialty("Cardiology", 7.0),
            specialty("Critical Care", 6.5),
            specialty("Neurology", 2.0),
            specialty("Anesthesia", 3.0),
        ],
    }
}

pub fn seed_organizer_profile() -> OrganizerProfile {
    OrganizerProfile {
        name: "Dr. Rajesh Kumar".to_string(),
        avatar: avatar("male-doc-2"),
        hosted_as: vec![
            "Dr. Rajesh Kumar".to_string(),
            "Dr. Priya Singh".to_string(),
            "Dr. Suresh Menon".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_unique_and_dates_valid() {
        let events = seed_events();
        assert_eq!(events.len(), 12);
        let ids: HashSet<_> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), 12);
        assert!(events.iter().all(|e| e.calendar_date().is_some() && e.starts_at().is_some()));
    }

    #[test]
    fn test_online_events_have_no_city() {
        for event in seed_events().iter().filter(|e| e.is_online()) {
            assert_eq!(event.city, None, "event {}", event.id);
            assert_eq!(event.physical_venue(), None);
        }
    }

    #[test]
    fn test_recent_certificates_prefix_ledger() {
        let recent = seed_recent_certificates();
        let all = seed_certificates();
        assert_eq!(&all[..recent.len()], recent.as_slice());
    }
}
