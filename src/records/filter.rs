//! Pure view derivation: status filter and free-text search over a loaded
//! record collection. Order-preserving, never errors.

use super::{Record, Status};

/// Status side of the active filter: everything, or exactly one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(Status),
}

impl StatusFilter {
    fn admits(self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => status == wanted,
        }
    }
}

/// The user's current filter and search selection. Transient UI state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub status: StatusFilter,
    pub search: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            search: String::new(),
        }
    }
}

/// Derive the filtered view of `records` for `criteria`.
///
/// Both filters compose by AND; a whitespace-only search term is treated as
/// no search term. Fetch order is preserved.
pub fn view<'a>(records: &'a [Record], criteria: &FilterCriteria) -> Vec<&'a Record> {
    let needle = criteria.search.trim().to_lowercase();
    records
        .iter()
        .filter(|record| criteria.status.admits(record.status))
        .filter(|record| needle.is_empty() || matches_search(record, &needle))
        .collect()
}

/// Like [`view`], but returning positions into `records` for callers that
/// need to map filtered rows back to the owning collection.
pub fn view_indices(records: &[Record], criteria: &FilterCriteria) -> Vec<usize> {
    let needle = criteria.search.trim().to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| criteria.status.admits(record.status))
        .filter(|(_, record)| needle.is_empty() || matches_search(record, &needle))
        .map(|(index, _)| index)
        .collect()
}

/// True when any searched field contains `needle` case-insensitively.
///
/// `needle` must already be trimmed and lowercased. Absent fields never match.
fn matches_search(record: &Record, needle: &str) -> bool {
    let branch = record.branch_id.map(|id| id.to_string());
    field_contains(record.requisition_no.as_deref(), needle)
        || field_contains(record.vehicle_no.as_deref(), needle)
        || field_contains(record.customer_name.as_deref(), needle)
        || field_contains(record.customer_mobile.as_deref(), needle)
        || field_contains(branch.as_deref(), needle)
}

fn field_contains(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(needle))
}
