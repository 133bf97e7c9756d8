use std::ops::{Deref, DerefMut};

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    Form, Json,
};
use serde::de::DeserializeOwned;
use shared::{api::error::ServerError, other_error};

/// Request body read as JSON or as a url encoded form depending on the
/// content type. Requests without a content type carry no usable body and
/// give `T::default()`
#[derive(Debug, Clone, Default)]
pub struct Payload<T>(pub T);

impl<T> Deref for Payload<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Payload<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum BodyKind {
    Json,
    Form,
    Missing,
}

fn body_kind(req: &Request) -> BodyKind {
    let Some(content_type) = req.headers().get(CONTENT_TYPE) else {
        return BodyKind::Missing;
    };

    let is_json = content_type
        .to_str()
        .ok()
        .and_then(|v| v.parse::<mime::Mime>().ok())
        .map_or(false, |m| {
            m.type_() == mime::APPLICATION
                && (m.subtype() == mime::JSON || m.suffix() == Some(mime::JSON))
        });

    if is_json {
        BodyKind::Json
    } else {
        BodyKind::Form
    }
}

/// Bodies the client got wrong are a validation error. Anything else went
/// wrong on our side
fn body_rejection(status: StatusCode, message: String) -> ServerError {
    if status.is_server_error() {
        other_error!("Failed to read request body: {message}")
    } else {
        ServerError::validation(message)
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&req) {
            BodyKind::Json => {
                let Json(payload) = Json::<T>::from_request(req, state)
                    .await
                    .map_err(|e| body_rejection(e.status(), e.body_text()))?;
                Ok(Self(payload))
            }
            BodyKind::Form => {
                let Form(payload) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|e| body_rejection(e.status(), e.body_text()))?;
                Ok(Self(payload))
            }
            BodyKind::Missing => Ok(Self(T::default())),
        }
    }
}
