use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use datalab_core::error::CoreError;
use datalab_core::roles::ROLE_ADMIN;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Staff-only guard. A missing or invalid token is 401; a valid token for
/// any role other than `admin` is 403.
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        match user.role.as_str() {
            ROLE_ADMIN => Ok(Self(user)),
            other => {
                tracing::warn!(subject = %user.subject, role = other, "Staff route refused");
                Err(CoreError::Forbidden("Admin role required".into()).into())
            }
        }
    }
}
