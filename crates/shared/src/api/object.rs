use const_format::concatcp;

use crate::api::API_BASE_PATH;

/// Placeholder used in the id paths. Kept as `_id` so the route parameter
/// matches the field name clients see in responses
pub const ID_PLACEHOLDER: &str = ":_id";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Object {
    Root,
    Users,
    UserExercises,
    UserLogs,
}

impl Object {
    pub const fn path(&self) -> &str {
        use Object::*;
        match self {
            Root => "/",
            Users => concatcp!(API_BASE_PATH, "users"),
            UserExercises => concatcp!(API_BASE_PATH, "users/", ID_PLACEHOLDER, "/exercises"),
            UserLogs => concatcp!(API_BASE_PATH, "users/", ID_PLACEHOLDER, "/logs"),
        }
    }

    /// Path with the id placeholder filled in
    pub fn path_for<T: ToString>(&self, id: T) -> String {
        self.path().replace(ID_PLACEHOLDER, &id.to_string())
    }
}
