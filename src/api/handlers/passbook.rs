use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::info;

use crate::api::dtos::{
    requests::{ExportRequest, PassbookQuery},
    responses::{ExportResponse, Page, PassbookView},
};
use crate::api::extractors::shell::ViewShell;
use crate::background::notify_now;
use crate::domain::models::{certificate::PassbookFilter, event::Council, notification::Notification};
use crate::domain::services::passbook::{
    apply_filter, renewal_pack, renewal_ready_notification, totals, EMPTY_FILTER_MESSAGE,
};
use crate::error::AppError;
use crate::state::AppState;

pub async fn passbook(
    State(state): State<Arc<AppState>>,
    page: ViewShell,
    Query(query): Query<PassbookQuery>,
) -> Result<Json<Page<PassbookView>>, AppError> {
    let ledger = state.certificate_repo.list().await?;
    let certificates = apply_filter(&ledger, query.filter);

    Ok(Json(page.render(PassbookView {
        filter: query.filter,
        filters: PassbookFilter::iter().collect(),
        councils: Council::iter().collect(),
        totals: totals(&ledger),
        empty_message: certificates.is_empty().then_some(EMPTY_FILTER_MESSAGE),
        certificates,
    })))
}

pub async fn export_renewal_pack(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ExportRequest>,
) -> Result<Json<ExportResponse>, AppError> {
    let ledger = state.certificate_repo.list().await?;

    let pack = match renewal_pack(&ledger, payload.council) {
        Ok(pack) => pack,
        Err(e) => {
            if let AppError::Validation(msg) = &e {
                notify_now(state.notifier.as_ref(), Notification::error(msg.clone())).await;
            }
            return Err(e);
        }
    };

    info!(council = %pack.council, certificates = pack.certificates.len(), "Renewal pack prepared");
    let notification = renewal_ready_notification(pack.council);
    notify_now(state.notifier.as_ref(), notification.clone()).await;

    Ok(Json(ExportResponse { pack, notification }))
}
