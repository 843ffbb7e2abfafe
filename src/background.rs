use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::domain::models::notification::Notification;
use crate::domain::ports::Notifier;

/// Emits `notification` once after `delay`. The task is never cancelled;
/// it outlives the request that scheduled it.
pub fn schedule_notification(
    notifier: Arc<dyn Notifier>,
    notification: Notification,
    delay: Duration,
) -> JoinHandle<()> {
    let span = info_span!(
        "delayed_notification",
        job_id = %Uuid::new_v4(),
        title = %notification.title,
        delay_ms = delay.as_millis() as u64,
    );

    tokio::spawn(
        async move {
            sleep(delay).await;
            info!("Delivering delayed notification");
            if let Err(e) = notifier.notify(notification).await {
                warn!("Delayed notification dropped: {:?}", e);
            }
        }
        .instrument(span),
    )
}

/// Fire-and-forget delivery: a failing sink is logged, never surfaced.
pub async fn notify_now(notifier: &dyn Notifier, notification: Notification) {
    if let Err(e) = notifier.notify(notification).await {
        warn!("Notification dropped: {:?}", e);
    }
}
