use axum::{extract::State, Json};
use shared::{
    api::{error::ServerError, payloads::ExerciseResponse},
    model::{NewExercisePayload, ValidateModel},
};
use tracing::{info, instrument};

use crate::{Payload, Store, UserIdParam};

#[instrument(skip(store))]
pub async fn add_exercise(
    State(store): State<Store>,
    UserIdParam(id): UserIdParam,
    payload: Result<Payload<NewExercisePayload>, ServerError>,
) -> Result<Json<ExerciseResponse>, ServerError> {
    // An unknown user wins over anything wrong with the body
    if store.user(&id).is_none() {
        return Err(ServerError::unknown_user());
    }

    let Payload(payload) = payload?;
    let exercise = payload.validate()?;
    let user = store.add_exercise(&id, exercise.clone())?;
    info!(%id, ?exercise, "Logged exercise");

    Ok(Json(ExerciseResponse::new(&user, &exercise)))
}
