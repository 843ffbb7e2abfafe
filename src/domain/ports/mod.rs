use crate::domain::models::{
    badge::Badge, certificate::Certificate, event::Event, notification::Notification,
    profile::{CreditsBreakdown, DoctorProfile, OrganizerProfile},
};
use crate::error::AppError;
use async_trait::async_trait;

/// Source of the event catalog. Always hands out the full ordered list;
/// filtering happens in `services::event_query`.
#[async_trait]
pub trait EventCatalog: Send + Sync {
    async fn list(&self) -> Result<Vec<Event>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError>;
}

#[async_trait]
pub trait CertificateRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Certificate>, AppError>;
    async fn list_recent(&self) -> Result<Vec<Certificate>, AppError>;
}

#[async_trait]
pub trait BadgeRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Badge>, AppError>;
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn doctor(&self) -> Result<DoctorProfile, AppError>;
    async fn credits_breakdown(&self) -> Result<CreditsBreakdown, AppError>;
    async fn organizer(&self) -> Result<OrganizerProfile, AppError>;
}

/// Toast sink. Callers treat it as fire-and-forget.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: Notification) -> Result<(), AppError>;
}
