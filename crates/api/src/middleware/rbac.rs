//! Role-based access control extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does not
//! meet the requirement, so the capability check is declared in the handler
//! signature and runs before the operation body.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use buildease_core::error::CoreError;
use buildease_core::roles::{ROLE_CONTRACTOR, ROLE_CUSTOMER};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `customer` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn customer_only(RequireCustomer(user): RequireCustomer) -> AppResult<Json<()>> {
///     // user is guaranteed to be a customer here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireCustomer(pub AuthUser);

impl FromRequestParts<AppState> for RequireCustomer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_CUSTOMER {
            return Err(AppError::Core(CoreError::Forbidden(
                "Customer role required".into(),
            )));
        }
        Ok(RequireCustomer(user))
    }
}

/// Requires the `contractor` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn contractor_only(RequireContractor(user): RequireContractor) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireContractor(pub AuthUser);

impl FromRequestParts<AppState> for RequireContractor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_CONTRACTOR {
            return Err(AppError::Core(CoreError::Forbidden(
                "Contractor role required".into(),
            )));
        }
        Ok(RequireContractor(user))
    }
}

/// Requires any authenticated user (any valid role).
///
/// Functionally equivalent to [`AuthUser`] but named explicitly for use in
/// route definitions where the intent "this route requires authentication"
/// should be self-documenting.
pub struct RequireAuth(pub AuthUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(RequireAuth(user))
    }
}
