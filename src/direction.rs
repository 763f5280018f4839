use serde::{Deserialize, Serialize};
use std::fmt;

/// Target ordering for a single sort call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Normalize a user-supplied direction string.
    ///
    /// Anything other than `asc` / `desc` (case-insensitive, surrounding
    /// whitespace ignored) falls back to ascending.
    pub fn from_param(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" => SortDirection::Ascending,
            "desc" => SortDirection::Descending,
            other => {
                tracing::debug!(direction = other, "unrecognized direction, using asc");
                SortDirection::Ascending
            }
        }
    }

    /// Wire name of the direction
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    /// Strict ordering test: does `a` belong before `b` in the final array?
    ///
    /// Ascending is `a < b`, descending is `a > b`. Equal values never
    /// precede each other, which is what keeps tie handling identical in both
    /// directions.
    #[inline]
    pub fn precedes<T: Ord>(self, a: &T, b: &T) -> bool {
        match self {
            SortDirection::Ascending => a < b,
            SortDirection::Descending => a > b,
        }
    }

    /// True when `data` is non-decreasing (ascending) or non-increasing (descending)
    pub fn is_sorted<T: Ord>(self, data: &[T]) -> bool {
        data.windows(2).all(|w| !self.precedes(&w[1], &w[0]))
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
