//! Publication statuses accepted by the listings search filter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a property listing.
///
/// Variant order is the serialization order used by
/// [`SearchOptions`](crate::query::SearchOptions), since status sets are `BTreeSet`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusOption {
    Published,
    NotPublished,
    Reserved,
    Sold,
    Rented,
    Suspended,
}

impl StatusOption {
    /// Returns the wire value for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusOption::Published => "published",
            StatusOption::NotPublished => "not_published",
            StatusOption::Reserved => "reserved",
            StatusOption::Sold => "sold",
            StatusOption::Rented => "rented",
            StatusOption::Suspended => "suspended",
        }
    }

    /// Returns all statuses.
    pub fn all() -> &'static [StatusOption] {
        &[
            StatusOption::Published,
            StatusOption::NotPublished,
            StatusOption::Reserved,
            StatusOption::Sold,
            StatusOption::Rented,
            StatusOption::Suspended,
        ]
    }
}

impl fmt::Display for StatusOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatusOption {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "published" => Ok(StatusOption::Published),
            "not_published" => Ok(StatusOption::NotPublished),
            "reserved" => Ok(StatusOption::Reserved),
            "sold" => Ok(StatusOption::Sold),
            "rented" => Ok(StatusOption::Rented),
            "suspended" => Ok(StatusOption::Suspended),
            _ => Err(StatusParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusParseError(String);

impl fmt::Display for StatusParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown status '{}'. Valid statuses: published, not_published, reserved, sold, rented, suspended",
            self.0
        )
    }
}

impl std::error::Error for StatusParseError {}
