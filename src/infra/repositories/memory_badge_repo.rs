use crate::domain::{models::badge::Badge, ports::BadgeRepository};
use crate::error::AppError;
use async_trait::async_trait;

pub struct MemoryBadgeRepo {
    badges: Vec<Badge>,
}

impl MemoryBadgeRepo {
    pub fn new(badges: Vec<Badge>) -> Self {
        Self { badges }
    }
}

#[async_trait]
impl BadgeRepository for MemoryBadgeRepo {
    async fn list(&self) -> Result<Vec<Badge>, AppError> {
        Ok(self.badges.clone())
    }
}
