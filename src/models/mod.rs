use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

pub mod movie;
pub mod user;

pub use movie::{Director, DirectorRecord, Genre, GenreRecord, Movie, MovieRecord};
pub use user::{LoginResponse, NewUser, User, UserRecord, UserUpdate};

/// Normalizes a server date field to zero-padded `YYYY-MM-DD` using UTC
/// calendar components, regardless of the input's timezone offset.
///
/// Accepts full RFC 3339 timestamps ("2010-07-16T00:00:00Z") as well as bare
/// calendar dates. Input that parses as neither is returned unchanged so
/// malformed server data degrades visibly instead of panicking.
pub fn normalize_date(raw: &str) -> String {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return timestamp
            .with_timezone(&Utc)
            .format("%Y-%m-%d")
            .to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

/// Endpoints that return either a single record or an array of records.
///
/// The detail endpoints for directors and genres do both depending on the
/// server version; extraction always takes the first element.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_first(self) -> Option<T> {
        match self {
            OneOrMany::One(value) => Some(value),
            OneOrMany::Many(values) => values.into_iter().next(),
        }
    }
}
