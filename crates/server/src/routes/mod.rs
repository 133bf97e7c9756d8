use axum::{
    routing::{get, post},
    Router,
};
use shared::api::Object;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::AppState;

mod root;
pub use root::*;

pub mod exercises;
pub mod users;

/// API routes without any middleware attached
pub fn router() -> Router<AppState> {
    Router::new()
        .route(Object::Root.path(), get(root))
        .route(
            Object::Users.path(),
            get(users::list_users).post(users::create_user),
        )
        .route(Object::UserExercises.path(), post(exercises::add_exercise))
        .route(Object::UserLogs.path(), get(exercises::fetch_log))
}

/// The full application as served
pub fn app(state: AppState, cors: CorsLayer) -> Router {
    router()
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
