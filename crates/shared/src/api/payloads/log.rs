use serde::{Deserialize, Serialize};

use crate::{
    model::{Exercise, User},
    types::UserId,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub username: String,
    /// Number of entries in `log`, after filtering
    pub count: usize,
    pub log: Vec<Exercise>,
}

impl LogResponse {
    pub fn new(user: &User, log: Vec<Exercise>) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            count: log.len(),
            log,
        }
    }
}
