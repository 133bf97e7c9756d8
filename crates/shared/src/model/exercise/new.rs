use serde::{Deserialize, Serialize};

use crate::{
    api::error::ServerError,
    model::{
        constants::{
            DESCRIPTION_AND_DURATION_REQUIRED, DURATION_NOT_A_NUMBER, DURATION_NOT_POSITIVE,
            INVALID_DATE,
        },
        leading_integer, non_empty, string_or_number, Exercise, ExerciseDate, ValidateModel,
    },
};

/// Body of a log exercise request, as sent by the client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewExercisePayload {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub duration: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl NewExercisePayload {
    pub fn new<D: Into<String>, U: Into<String>>(description: D, duration: U) -> Self {
        Self {
            description: Some(description.into()),
            duration: Some(duration.into()),
            date: None,
        }
    }

    pub fn with_date<T: Into<String>>(mut self, date: T) -> Self {
        self.date = Some(date.into());
        self
    }
}

impl ValidateModel for NewExercisePayload {
    type Valid = Exercise;

    fn validate(self) -> Result<Exercise, ServerError> {
        let (description, duration) =
            match (non_empty(self.description), non_empty(self.duration)) {
                (Some(description), Some(duration)) => (description, duration),
                _ => return Err(ServerError::validation(DESCRIPTION_AND_DURATION_REQUIRED)),
            };

        let duration = parse_duration(&duration)?;

        let date = match non_empty(self.date) {
            None => ExerciseDate::today(),
            Some(date) => date
                .parse()
                .map_err(|_| ServerError::parse(INVALID_DATE))?,
        };

        Ok(Exercise::new(description, duration, date))
    }
}

fn parse_duration(input: &str) -> Result<u32, ServerError> {
    let minutes =
        leading_integer(input).ok_or_else(|| ServerError::parse(DURATION_NOT_A_NUMBER))?;

    u32::try_from(minutes)
        .ok()
        .filter(|m| *m > 0)
        .ok_or_else(|| ServerError::validation(DURATION_NOT_POSITIVE))
}
