use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use strum::{Display, EnumIter, EnumString};

use crate::domain::models::event::{City, Council, EventFormat, Specialty};

const ALL: &str = "All";

/// A single dropdown value: either no constraint, or exactly one option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }

    /// An absent value only passes when nothing specific was asked for.
    pub fn admits_opt(&self, value: Option<&T>) -> bool {
        match (self, value) {
            (Selection::All, _) => true,
            (Selection::Only(wanted), Some(v)) => wanted == v,
            (Selection::Only(_), None) => false,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(ALL),
            Selection::Only(v) => v.fmt(f),
        }
    }
}

impl<T> FromStr for Selection<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(ALL) {
            return Ok(Selection::All);
        }
        T::from_str(s)
            .map(Selection::Only)
            .map_err(|e| format!("unknown filter value '{s}': {e}"))
    }
}

impl<T: fmt::Display> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T> Deserialize<'de> for Selection<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Location dropdown option. `Online` is a sentinel that matches online
/// events rather than a city.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Place {
    City(City),
    Online,
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Place::City(city) => city.fmt(f),
            Place::Online => f.write_str("Online"),
        }
    }
}

impl FromStr for Place {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "Online" {
            return Ok(Place::Online);
        }
        City::from_str(s).map(Place::City)
    }
}

/// Present in the discovery UI but not wired into any predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum DateRange {
    #[default]
    #[strum(serialize = "All")]
    #[serde(rename = "All")]
    All,
    #[strum(serialize = "This week")]
    #[serde(rename = "This week")]
    ThisWeek,
    #[strum(serialize = "This month")]
    #[serde(rename = "This month")]
    ThisMonth,
    #[strum(serialize = "Custom")]
    #[serde(rename = "Custom")]
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum SortKey {
    #[default]
    #[strum(serialize = "date-asc")]
    #[serde(rename = "date-asc")]
    DateAsc,
    #[strum(serialize = "date-desc")]
    #[serde(rename = "date-desc")]
    DateDesc,
    #[strum(serialize = "title")]
    #[serde(rename = "title")]
    Title,
}

/// Everything a discovery view lets the user pick. Deserializes straight from
/// a query string; missing fields fall back to "no constraint".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub q: String,
    pub format: Selection<EventFormat>,
    pub council: Selection<Council>,
    pub specialty: Selection<Specialty>,
    pub location: Selection<Place>,
    pub date_range: DateRange,
    pub sort: SortKey,
}

impl FilterCriteria {
    /// The trimmed, lowercased search text, or `None` when it imposes nothing.
    pub fn normalized_query(&self) -> Option<String> {
        let q = self.q.trim();
        if q.is_empty() {
            None
        } else {
            Some(q.to_lowercase())
        }
    }
}
