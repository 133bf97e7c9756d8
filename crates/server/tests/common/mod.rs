use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::Value;
use server::{routes, AppState};
use shared::api::Object;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            router: routes::app(AppState::default(), CorsLayer::permissive()),
        }
    }

    pub fn with_cors(cors: CorsLayer) -> Self {
        Self {
            router: routes::app(AppState::default(), cors),
        }
    }

    pub async fn response(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.response(request).await;
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    pub async fn send_json(&self, request: Request<Body>) -> (StatusCode, Value) {
        let (status, body) = self.send(request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send_json(request).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send_json(request).await
    }

    /// Values are expected to be plain text, only spaces are encoded
    pub async fn post_form(&self, uri: &str, fields: &[(&str, &str)]) -> (StatusCode, Value) {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{k}={}", v.replace(' ', "+")))
            .collect::<Vec<_>>()
            .join("&");
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();
        self.send_json(request).await
    }

    /// Creates a user and returns its id
    pub async fn create_user(&self, username: &str) -> String {
        let (status, body) = self
            .post_form(Object::Users.path(), &[("username", username)])
            .await;
        assert_eq!(status, StatusCode::OK);
        body["_id"].as_str().unwrap().to_owned()
    }

    pub async fn add_exercise(&self, id: &str, description: &str, duration: &str, date: &str) {
        let (status, body) = self
            .post_form(
                &Object::UserExercises.path_for(id),
                &[("description", description), ("duration", duration), ("date", date)],
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
    }

    pub async fn log(&self, id: &str, query: &str) -> (StatusCode, Value) {
        let uri = if query.is_empty() {
            Object::UserLogs.path_for(id)
        } else {
            format!("{}?{query}", Object::UserLogs.path_for(id))
        };
        self.get(&uri).await
    }
}
