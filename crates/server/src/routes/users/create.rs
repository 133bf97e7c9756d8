use axum::{extract::State, Json};
use shared::{
    api::error::ServerError,
    model::{NewUserPayload, User, ValidateModel},
};
use tracing::{info, instrument};

use crate::{Payload, Store};

#[instrument(skip(store))]
pub async fn create_user(
    State(store): State<Store>,
    Payload(payload): Payload<NewUserPayload>,
) -> Result<Json<User>, ServerError> {
    let new_user = payload.validate()?;
    let user = store.create_user(new_user).await;
    info!(id = %user.id, username = %user.username, "Created user");

    Ok(Json(user))
}
