use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::constants::UNKNOWN_USER_ID;

/// Body sent back for every failed request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServerError {
    /// A required field was missing or the body couldn't be read
    #[error("{message}")]
    Validation { message: String },
    /// The referenced user doesn't exist
    #[error("{message}")]
    NotFound { message: String },
    /// A field was present but couldn't be parsed
    #[error("{message}")]
    Parse { message: String },
    #[error("{message}")]
    Other { message: String },
}

impl ServerError {
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation { message: message.into() }
    }

    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse { message: message.into() }
    }

    pub fn unknown_user() -> Self {
        Self::NotFound { message: UNKNOWN_USER_ID.to_owned() }
    }

    /// Unknown users are reported as a bad request rather than 404. Clients
    /// of this API already depend on that
    pub fn code(&self) -> StatusCode {
        use ServerError::*;
        match self {
            Validation { .. } | NotFound { .. } | Parse { .. } => StatusCode::BAD_REQUEST,
            Other { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse { error: self.to_string() }
    }
}

#[macro_export]
macro_rules! other_error {
    ($($arg:tt)*) => {
        $crate::api::error::ServerError::Other { message: format!($($arg)*) }
    };
}

#[cfg(feature = "backend")]
mod backend {
    use axum::{
        response::{IntoResponse, Response},
        Json,
    };
    use tracing::{debug, error};

    use super::ServerError;

    impl IntoResponse for ServerError {
        fn into_response(self) -> Response {
            let code = self.code();
            if code.is_server_error() {
                error!(%code, error = %self, "Request failed");
            } else {
                debug!(%code, error = %self, "Request rejected");
            }
            (code, Json(self.to_response())).into_response()
        }
    }
}
