//! Well-known notification kind constants.
//!
//! These must match the `notification_type` values stored in the
//! `notifications` table and rendered by the notification bell UI.

/// Emitted to a project's customer when a contractor places a bid.
pub const KIND_BID: &str = "bid";

/// Emitted to a project's customer when progress is updated.
pub const KIND_MILESTONE: &str = "milestone";
