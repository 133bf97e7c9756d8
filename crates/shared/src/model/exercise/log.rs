use serde::{Deserialize, Serialize};

use crate::{
    api::error::ServerError,
    model::{leading_integer, non_empty, Exercise, ExerciseDate, ValidateModel},
};

/// Query string of a log request, as sent by the client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogQuery {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

/// One end of a log's date range
///
/// A bound that doesn't parse as a date is kept rather than rejected. It
/// never compares true, so a log with one comes back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    On(ExerciseDate),
    Unparseable,
}

impl DateBound {
    fn parse(value: &str) -> Self {
        value.parse().map_or(DateBound::Unparseable, DateBound::On)
    }

    fn admits(&self, keep: impl FnOnce(ExerciseDate) -> bool) -> bool {
        match *self {
            DateBound::On(date) => keep(date),
            DateBound::Unparseable => false,
        }
    }
}

/// Which of a user's exercises end up in their log
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogFilter {
    /// Inclusive lower bound
    pub from: Option<DateBound>,
    /// Inclusive upper bound
    pub to: Option<DateBound>,
    pub limit: Option<usize>,
}

impl ValidateModel for LogQuery {
    type Valid = LogFilter;

    fn validate(self) -> Result<LogFilter, ServerError> {
        let from = non_empty(self.from).map(|v| DateBound::parse(&v));
        let to = non_empty(self.to).map(|v| DateBound::parse(&v));

        // Limits that aren't a positive number are ignored rather than rejected
        let limit = non_empty(self.limit)
            .and_then(|v| leading_integer(&v))
            .filter(|n| *n > 0)
            .and_then(|n| usize::try_from(n).ok());

        Ok(LogFilter { from, to, limit })
    }
}

impl LogFilter {
    pub fn matches(&self, exercise: &Exercise) -> bool {
        self.from
            .map_or(true, |from| from.admits(|from| exercise.date >= from))
            && self.to.map_or(true, |to| to.admits(|to| exercise.date <= to))
    }

    /// Keeps insertion order. The limit applies after the date bounds
    pub fn apply<'a, I>(&self, exercises: I) -> Vec<Exercise>
    where
        I: IntoIterator<Item = &'a Exercise>,
    {
        let filtered = exercises
            .into_iter()
            .filter(|e| self.matches(e))
            .cloned();

        match self.limit {
            Some(limit) => filtered.take(limit).collect(),
            None => filtered.collect(),
        }
    }
}
