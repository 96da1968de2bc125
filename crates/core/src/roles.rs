//! Well-known role name constants.
//!
//! These must match the `users.role` CHECK constraint in
//! `20260301000001_create_users_table.sql`.

pub const ROLE_CUSTOMER: &str = "customer";
pub const ROLE_CONTRACTOR: &str = "contractor";
