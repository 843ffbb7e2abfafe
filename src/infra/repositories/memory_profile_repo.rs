use crate::domain::{
    models::profile::{CreditsBreakdown, DoctorProfile, OrganizerProfile},
    ports::ProfileRepository,
};
use crate::error::AppError;
use async_trait::async_trait;

pub struct MemoryProfileRepo {
    doctor: DoctorProfile,
    breakdown: CreditsBreakdown,
    organizer: OrganizerProfile,
}

impl MemoryProfileRepo {
    pub fn new(doctor: DoctorProfile, breakdown: CreditsBreakdown, organizer: OrganizerProfile) -> Self {
        Self { doctor, breakdown, organizer }
    }
}

#[async_trait]
impl ProfileRepository for MemoryProfileRepo {
    async fn doctor(&self) -> Result<DoctorProfile, AppError> {
        Ok(self.doctor.clone())
    }

    async fn credits_breakdown(&self) -> Result<CreditsBreakdown, AppError> {
        Ok(self.breakdown.clone())
    }

    async fn organizer(&self) -> Result<OrganizerProfile, AppError> {
        Ok(self.organizer.clone())
    }
}
