use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
pub use uuid::Error as UserIdError;

/// Identifies a user in the `_id` field of every response and in the
/// `/api/users/:_id/...` routes. Rendered as a hyphenated v4 uuid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(uuid::Uuid);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for UserId {
    type Err = UserIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl UserId {
    /// A fresh id for a user being created
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Reads an id back from a route. Besides the hyphenated form the API
    /// hands out, any spelling `uuid` understands names the same user
    pub fn parse(value: &str) -> Result<Self, UserIdError> {
        uuid::Uuid::parse_str(value).map(Self)
    }
}

#[cfg(test)]
mod test {
    use super::UserId;

    const ID: &str = "67e55044-10b1-426f-9247-bb680e5fe0c8";

    #[test]
    fn test_serializes_as_hyphenated_string() {
        let id = UserId::parse(ID).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), format!("\"{ID}\""));
        assert_eq!(id.to_string(), ID);
        assert_eq!(serde_json::from_str::<UserId>(&format!("\"{ID}\"")).unwrap(), id);
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        assert_ne!(UserId::generate(), UserId::generate());
    }

    #[test]
    fn test_other_spellings_name_the_same_user() {
        let id = UserId::parse(ID).unwrap();
        assert_eq!(UserId::parse(&ID.replace('-', "")).unwrap(), id);
        assert_eq!(UserId::parse(&ID.to_uppercase()).unwrap(), id);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(UserId::parse("not-an-id").is_err());
        assert!("".parse::<UserId>().is_err());
        assert!(UserId::parse(&ID[..35]).is_err());
    }
}
