use crate::domain::models::notification::{Notification, NotificationLevel};
use crate::domain::ports::Notifier;
use crate::error::AppError;
use async_trait::async_trait;
use tracing::{info, warn};

/// Toasts have no client to land on server-side, so they go to the log.
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    async fn notify(&self, notification: Notification) -> Result<(), AppError> {
        let description = notification.description.as_deref().unwrap_or("");
        match notification.level {
            NotificationLevel::Success => {
                info!(toast = %notification.title, description, "notification");
            }
            NotificationLevel::Error => {
                warn!(toast = %notification.title, description, "notification");
            }
        }
        Ok(())
    }
}
