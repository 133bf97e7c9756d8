pub const GREETING: &str = "Exercise Tracker API";

pub async fn root() -> &'static str {
    GREETING
}
