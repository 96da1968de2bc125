//! Notification entity model.

use buildease_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `notifications` table.
///
/// Created only as a side effect of project operations and read back by the
/// notification bell UI, so the row doubles as the wire representation.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: DbId,
    #[serde(rename = "user")]
    pub user_id: DbId,
    #[serde(rename = "type")]
    pub notification_type: String,
    pub text: String,
    #[serde(rename = "read")]
    pub is_read: bool,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
