//! Requisition record model and the client-side view derivation engine.

use serde::{Deserialize, Serialize};

pub mod config;
pub mod fetch;
pub mod filter;
pub mod store;
pub mod summary;

pub use config::{ApiSettings, AppConfig, ConfigError};
pub use fetch::{DEFAULT_FETCH_LIMIT, FetchClient, FetchError};
pub use filter::{FilterCriteria, StatusFilter, view, view_indices};
pub use store::RecordStore;
pub use summary::{CountSummary, summarize};

/// Lifecycle status of a requisition.
///
/// Wire values outside the recognized set decode to [`Status::Unknown`] so a
/// misbehaving backend can never fail deserialization; unknowns are counted in
/// totals but never attributed to a named bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Accepted,
    Pending,
    Closed,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl Status {
    /// The closed set of recognized statuses, in display order.
    pub const KNOWN: [Status; 4] = [
        Status::Accepted,
        Status::Pending,
        Status::Closed,
        Status::Rejected,
    ];

    /// User-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Status::Accepted => "Accepted",
            Status::Pending => "Pending",
            Status::Closed => "Closed",
            Status::Rejected => "Rejected",
            Status::Unknown => "Unknown",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Unknown
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Urgency of a requisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Low,
    Normal,
    High,
    Urgent,
    #[serde(other)]
    Unknown,
}

impl Priority {
    /// User-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Normal => "Normal",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
            Priority::Unknown => "Unknown",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Normal
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One requisition ticket as served by the backend.
///
/// Immutable once fetched. Timestamps stay raw strings; parsing happens only
/// in [`crate::formatting`] so a malformed stamp can never fail decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: i64,
    #[serde(default)]
    pub requisition_no: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_mobile: Option<String>,
    #[serde(default)]
    pub vehicle_no: Option<String>,
    #[serde(default)]
    pub branch_id: Option<i64>,
    #[serde(default)]
    pub branch_name: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub requested_at: Option<String>,
    #[serde(default)]
    pub preferred_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub verified_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Record {
    /// An empty record with the given id; fields are filled in by callers
    /// (deserialization in production, fixtures in tests).
    pub fn new(id: i64) -> Self {
        Self {
            id,
            requisition_no: None,
            title: None,
            customer_name: None,
            customer_mobile: None,
            vehicle_no: None,
            branch_id: None,
            branch_name: None,
            assigned_to: None,
            created_by: None,
            cost: None,
            remarks: None,
            latitude: None,
            longitude: None,
            status: Status::Unknown,
            priority: Priority::Normal,
            requested_at: None,
            preferred_at: None,
            completed_at: None,
            verified_at: None,
            created_at: None,
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_status_decodes_to_unknown() {
        let status: Status = serde_json::from_str("\"Escalated\"").unwrap();
        assert_eq!(status, Status::Unknown);
        let priority: Priority = serde_json::from_str("\"SOMEDAY\"").unwrap();
        assert_eq!(priority, Priority::Unknown);
    }

    #[test]
    fn record_decodes_from_camel_case_payload() {
        let payload = r#"{
            "id": 201,
            "requisitionNo": "REQ-201",
            "customerName": "Pineapple Inc.",
            "customerMobile": "9876543210",
            "vehicleNo": "KA-01-2345",
            "branchId": 12,
            "cost": 90,
            "status": "Accepted",
            "priority": "HIGH",
            "requestedAt": "2024-03-15T00:00:00Z"
        }"#;
        let record: Record = serde_json::from_str(payload).unwrap();
        assert_eq!(record.id, 201);
        assert_eq!(record.requisition_no.as_deref(), Some("REQ-201"));
        assert_eq!(record.status, Status::Accepted);
        assert_eq!(record.priority, Priority::High);
        assert_eq!(record.branch_id, Some(12));
        assert!(record.remarks.is_none());
    }

    #[test]
    fn missing_status_defaults_to_unknown() {
        let record: Record = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(record.status, Status::Unknown);
        assert_eq!(record.priority, Priority::Normal);
    }
}
