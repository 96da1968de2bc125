//! Best-effort notification emission.
//!
//! Notifications are a side channel: the parent operation (bid submission,
//! progress update) has already persisted its own write when emission runs,
//! and a delivery failure must never surface as the operation's error.

use buildease_core::types::DbId;
use buildease_db::repositories::NotificationRepo;
use sqlx::PgPool;

/// Insert a notification addressed to `user_id`, swallowing failures.
///
/// Failures are logged at warn level and otherwise ignored.
pub async fn emit(pool: &PgPool, user_id: DbId, kind: &str, text: &str) {
    if let Err(err) = NotificationRepo::create(pool, user_id, kind, text).await {
        tracing::warn!(error = %err, user_id, kind, "failed to emit notification");
    }
}
