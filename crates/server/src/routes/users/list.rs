use axum::{extract::State, Json};
use shared::model::User;

use crate::Store;

pub async fn list_users(State(store): State<Store>) -> Json<Vec<User>> {
    Json(store.users().await)
}
