//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create/patch DTO where the API accepts input
//! - `Serialize` view structs shaping the wire response (camelCase)

pub mod bid;
pub mod milestone;
pub mod notification;
pub mod project;
pub mod project_update;
pub mod user;
