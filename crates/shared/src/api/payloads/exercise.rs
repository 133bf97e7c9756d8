use serde::{Deserialize, Serialize};

use crate::{
    model::{Exercise, ExerciseDate, User},
    types::UserId,
};

/// Reply to a log exercise request: the owner plus the new entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseResponse {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub username: String,
    pub date: ExerciseDate,
    pub duration: u32,
    pub description: String,
}

impl ExerciseResponse {
    pub fn new(user: &User, exercise: &Exercise) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            date: exercise.date,
            duration: exercise.duration,
            description: exercise.description.clone(),
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::ExerciseResponse;
    use crate::{
        model::{Exercise, User},
        types::UserId,
    };

    #[test]
    fn test_exercise_response_json_shape() {
        let id = UserId::generate();
        let user = User::new(id, "fcc_test");
        let exercise = Exercise::new("test run", 30, "2023-01-15".parse().unwrap());

        assert_eq!(
            serde_json::to_value(ExerciseResponse::new(&user, &exercise)).unwrap(),
            json!({
                "_id": id.to_string(),
                "username": "fcc_test",
                "date": "Sun Jan 15 2023",
                "duration": 30,
                "description": "test run",
            })
        );
    }
}
