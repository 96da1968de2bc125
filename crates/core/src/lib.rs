//! Shared domain types for the BuildEase backend.
//!
//! Leaf crate with no I/O: id and timestamp aliases, the domain error
//! taxonomy, role and notification-kind constants, the project status/type
//! vocabulary, and the milestone plan configuration.

pub mod error;
pub mod milestones;
pub mod notifications;
pub mod project;
pub mod roles;
pub mod types;
