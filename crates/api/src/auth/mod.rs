//! Bearer-token validation.
//!
//! Token issuance lives in the external auth service; this module only
//! validates what it issued and exposes the claims to the extractors.

pub mod jwt;
