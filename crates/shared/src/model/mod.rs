mod user;
pub use user::*;

mod exercise;
pub use exercise::*;

mod de;
pub use de::*;

pub mod constants;

use crate::api::error::ServerError;

/// Turns a raw request payload into the typed value the store accepts
pub trait ValidateModel {
    type Valid;

    fn validate(self) -> Result<Self::Valid, ServerError>;
}

/// Reads an integer from the start of `input`, ignoring anything after the
/// digits. `"30min"` gives 30, `"abc"` gives `None`
pub fn leading_integer(input: &str) -> Option<i64> {
    let input = input.trim_start();
    let (sign, digits) = match input.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, input.strip_prefix('+').unwrap_or(input)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Treats empty strings the same as a missing value
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
