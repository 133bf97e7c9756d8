use serde::{Deserialize, Serialize};

use crate::{
    api::error::ServerError,
    model::{constants::USERNAME_REQUIRED, non_empty, ValidateModel},
};

/// Body of a user creation request, as sent by the client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewUserPayload {
    #[serde(default)]
    pub username: Option<String>,
}

impl NewUserPayload {
    pub fn new<T: Into<String>>(username: T) -> Self {
        Self {
            username: Some(username.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
}

impl ValidateModel for NewUserPayload {
    type Valid = NewUser;

    fn validate(self) -> Result<NewUser, ServerError> {
        let username =
            non_empty(self.username).ok_or_else(|| ServerError::validation(USERNAME_REQUIRED))?;
        Ok(NewUser { username })
    }
}
