use std::{fmt, str::FromStr};

use chrono::{DateTime, Local, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::model::constants::DATE_FORMAT;

#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid date: {input:?}")]
pub struct DateParseError {
    pub input: String,
}

/// Calendar day an exercise was performed on. Always rendered in the
/// `DATE_FORMAT` form and parsed back from it when compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExerciseDate(NaiveDate);

impl ExerciseDate {
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for ExerciseDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl fmt::Display for ExerciseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// Accepts `2023-01-15`, RFC 3339 timestamps and the rendered form
/// `Sun Jan 15 2023`. Timestamps keep the calendar day of their own offset
impl FromStr for ExerciseDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .or_else(|_| DateTime::parse_from_rfc3339(input).map(|d| d.date_naive()))
            .or_else(|_| NaiveDate::parse_from_str(input, DATE_FORMAT))
            .map(Self)
            .map_err(|_| DateParseError {
                input: s.to_owned(),
            })
    }
}

impl Serialize for ExerciseDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ExerciseDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;

    use super::ExerciseDate;

    fn ymd(y: i32, m: u32, d: u32) -> ExerciseDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().into()
    }

    #[test]
    fn test_renders_day_of_week_form() {
        assert_eq!(ymd(2023, 1, 15).to_string(), "Sun Jan 15 2023");
        assert_eq!(ymd(2023, 1, 5).to_string(), "Thu Jan 05 2023");
    }

    #[test]
    fn test_parses_iso_date() {
        assert_eq!("2023-01-15".parse::<ExerciseDate>().unwrap(), ymd(2023, 1, 15));
        assert_eq!(" 2023-01-15 ".parse::<ExerciseDate>().unwrap(), ymd(2023, 1, 15));
    }

    #[test]
    fn test_parses_rfc3339() {
        assert_eq!(
            "2023-01-15T23:30:00-05:00".parse::<ExerciseDate>().unwrap(),
            ymd(2023, 1, 15)
        );
        assert_eq!(
            "2023-01-15T08:00:00Z".parse::<ExerciseDate>().unwrap(),
            ymd(2023, 1, 15)
        );
    }

    #[test]
    fn test_rendered_form_parses_back() {
        let date = ymd(2024, 2, 29);
        assert_eq!(date.to_string().parse::<ExerciseDate>().unwrap(), date);
    }

    #[test]
    fn test_rejects_invalid_dates() {
        assert!("".parse::<ExerciseDate>().is_err());
        assert!("yesterday".parse::<ExerciseDate>().is_err());
        assert!("2023-02-30".parse::<ExerciseDate>().is_err());
        assert!("2023-13-01".parse::<ExerciseDate>().is_err());
    }

    #[test]
    fn test_serde_uses_rendered_form() {
        let date = ymd(2023, 1, 15);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"Sun Jan 15 2023\"");
        assert_eq!(serde_json::from_str::<ExerciseDate>(&json).unwrap(), date);
    }

    #[test]
    fn test_orders_by_calendar_day() {
        assert!(ymd(2023, 1, 15) < ymd(2023, 1, 16));
        assert!(ymd(2022, 12, 31) < ymd(2023, 1, 1));
    }
}
