use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use shared::{api::error::ServerError, types::UserId};
use tracing::debug;

/// The `:_id` route parameter. Ids that can't name a user are rejected the
/// same way as ids of users that don't exist
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserIdParam(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for UserIdParam
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ServerError::unknown_user())?;

        let id = UserId::parse(&id).map_err(|e| {
            debug!(%id, ?e, "Malformed user id");
            ServerError::unknown_user()
        })?;

        Ok(Self(id))
    }
}
