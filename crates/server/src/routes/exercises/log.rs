use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use shared::{
    api::{error::ServerError, payloads::LogResponse},
    model::{LogQuery, ValidateModel},
};
use tracing::instrument;

use crate::{Store, UserIdParam};

#[instrument(skip(store))]
pub async fn fetch_log(
    State(store): State<Store>,
    UserIdParam(id): UserIdParam,
    query: Result<Query<LogQuery>, QueryRejection>,
) -> Result<Json<LogResponse>, ServerError> {
    if store.user(&id).is_none() {
        return Err(ServerError::unknown_user());
    }

    let Query(query) = query.map_err(|e| ServerError::validation(e.body_text()))?;
    let filter = query.validate()?;
    let (user, log) = store.log(&id, &filter)?;

    Ok(Json(LogResponse::new(&user, log)))
}
