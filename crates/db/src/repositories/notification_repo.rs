//! Repository for the `notifications` table.

use buildease_core::types::DbId;
use sqlx::PgPool;

use crate::models::notification::Notification;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, notification_type, text, is_read, read_at, created_at, updated_at";

/// The notification bell shows at most this many recent entries.
const RECENT_LIMIT: i64 = 20;

/// Provides create, list, and mark-read operations for notifications.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Create a notification addressed to `user_id`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        notification_type: &str,
        text: &str,
    ) -> Result<Notification, sqlx::Error> {
        let query = format!(
            "INSERT INTO notifications (user_id, notification_type, text)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(user_id)
            .bind(notification_type)
            .bind(text)
            .fetch_one(pool)
            .await
    }

    /// The user's most recent notifications, newest first, capped at 20.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notifications
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(user_id)
            .bind(RECENT_LIMIT)
            .fetch_all(pool)
            .await
    }

    /// Mark a notification as read, scoped to its owner.
    ///
    /// Returns `None` when no notification with that id belongs to
    /// `user_id`; a notification owned by someone else is indistinguishable
    /// from one that does not exist. Marking an already-read notification
    /// again succeeds and leaves `read_at` untouched.
    pub async fn mark_read(
        pool: &PgPool,
        notification_id: DbId,
        user_id: DbId,
    ) -> Result<Option<Notification>, sqlx::Error> {
        let query = format!(
            "UPDATE notifications
             SET is_read = TRUE, read_at = COALESCE(read_at, NOW()), updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(notification_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
