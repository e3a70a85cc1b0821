//! Serializer for the `status` search filter.

use crate::easybroker::StatusOption;
use std::collections::BTreeSet;

/// Query key the listings endpoint reads statuses from. Repeated once per status.
pub const STATUS_KEY: &str = "search[statuses][]";

/// Serializes a status set as `search[statuses][]=<value>` pairs joined by `&`.
///
/// An empty set yields an empty string.
pub fn serialize_statuses(statuses: &BTreeSet<StatusOption>) -> String {
    statuses
        .iter()
        .map(|status| format!("{}={}", STATUS_KEY, urlencoding::encode(status.as_str())))
        .collect::<Vec<_>>()
        .join("&")
}
