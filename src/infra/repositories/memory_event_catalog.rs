use crate::domain::{models::event::Event, ports::EventCatalog};
use crate::error::AppError;
use async_trait::async_trait;
use std::sync::Arc;

/// Read-only catalog. The list is shared, never mutated after construction.
pub struct MemoryEventCatalog {
    events: Arc<[Event]>,
}

impl MemoryEventCatalog {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events: events.into() }
    }
}

#[async_trait]
impl EventCatalog for MemoryEventCatalog {
    async fn list(&self) -> Result<Vec<Event>, AppError> {
        Ok(self.events.to_vec())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError> {
        Ok(self.events.iter().find(|e| e.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::seed::seed_events;

    #[tokio::test]
    async fn test_find_by_id() {
        let catalog = MemoryEventCatalog::new(seed_events());
        let ecmo = catalog.find_by_id("3").await.unwrap().unwrap();
        assert_eq!(ecmo.title, "ECMO Basics");
        assert!(catalog.find_by_id("999").await.unwrap().is_none());
        assert_eq!(catalog.list().await.unwrap().len(), 12);
    }
}
