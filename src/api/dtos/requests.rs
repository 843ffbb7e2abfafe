use serde::Deserialize;

use crate::domain::models::certificate::PassbookFilter;
use crate::domain::models::draft::EventDraft;
use crate::domain::models::event::Council;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PassbookQuery {
    pub filter: PassbookFilter,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExportRequest {
    pub council: Option<Council>,
}

/// Replaces one wizard row; the row keeps the id from the path.
#[derive(Debug, Deserialize)]
pub struct RowEdit<T> {
    pub draft: EventDraft,
    pub row: T,
}
