pub const USERNAME_REQUIRED: &str = "username required";
pub const UNKNOWN_USER_ID: &str = "unknown userId";
pub const DESCRIPTION_AND_DURATION_REQUIRED: &str = "description and duration required";
pub const DURATION_NOT_A_NUMBER: &str = "duration must be a number";
pub const DURATION_NOT_POSITIVE: &str = "duration must be a positive number";
pub const INVALID_DATE: &str = "date must be a valid date";

/// Rendered form of every stored exercise date, e.g. `Sun Jan 15 2023`
pub const DATE_FORMAT: &str = "%a %b %d %Y";
