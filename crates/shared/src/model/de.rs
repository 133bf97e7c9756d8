use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Int(i64),
    Float(f64),
}

/// Form bodies carry every value as a string while JSON bodies may send
/// numbers. Both end up as `Some(String)`
pub fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use StringOrNumber::*;
    Ok(match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => None,
        Some(String(v)) => Some(v),
        Some(Int(v)) => Some(v.to_string()),
        Some(Float(v)) => Some(v.to_string()),
    })
}
