use serde::{Deserialize, Serialize};

use crate::model::ExerciseDate;

/// A logged activity. Field order matches the entries of a log response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub description: String,
    /// Minutes
    pub duration: u32,
    pub date: ExerciseDate,
}

impl Exercise {
    pub fn new<T: Into<String>>(description: T, duration: u32, date: ExerciseDate) -> Self {
        Self {
            description: description.into(),
            duration,
            date,
        }
    }
}
