//! Query serialization for listing search filters.
//!
//! Fragments are produced without a leading `?` or `&`; the caller owns separators.

pub mod status;

use crate::easybroker::StatusOption;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub use status::{serialize_statuses, STATUS_KEY};

/// Filters applied to a listings request.
///
/// Deserializing ignores keys this crate does not recognize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Restrict results to these publication statuses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BTreeSet<StatusOption>>,
}

impl SearchOptions {
    /// Creates options with no filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a status to the status filter.
    pub fn status(mut self, status: StatusOption) -> Self {
        self.status.get_or_insert_with(BTreeSet::new).insert(status);
        self
    }

    /// Adds several statuses to the status filter.
    pub fn statuses(mut self, statuses: impl IntoIterator<Item = StatusOption>) -> Self {
        self.status.get_or_insert_with(BTreeSet::new).extend(statuses);
        self
    }

    /// Returns the recognized filters that are present.
    pub fn filters(&self) -> Vec<SearchFilter> {
        let mut filters = Vec::new();

        if let Some(statuses) = &self.status {
            filters.push(SearchFilter::Status(statuses.clone()));
        }

        filters
    }

    /// Serializes all present filters into one query fragment.
    pub fn to_query(&self) -> String {
        self.filters()
            .iter()
            .map(SearchFilter::to_query)
            .filter(|fragment| !fragment.is_empty())
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Returns true if no filter would contribute to the query.
    pub fn is_empty(&self) -> bool {
        self.to_query().is_empty()
    }
}

/// A recognized search filter with its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFilter {
    Status(BTreeSet<StatusOption>),
}

impl SearchFilter {
    /// Key under which this filter appears in serialized `SearchOptions`.
    pub fn key(&self) -> &'static str {
        match self {
            SearchFilter::Status(_) => "status",
        }
    }

    /// Serializes this filter into a query fragment.
    pub fn to_query(&self) -> String {
        match self {
            SearchFilter::Status(statuses) => serialize_statuses(statuses),
        }
    }

    /// Human-readable summary.
    pub fn description(&self) -> String {
        match self {
            SearchFilter::Status(statuses) => format!(
                "Status: {}",
                statuses.iter().map(StatusOption::as_str).collect::<Vec<_>>().join(", ")
            ),
        }
    }
}
