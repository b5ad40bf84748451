//! Shared state types for the egui UI.
//!
//! Everything here is render-facing: plain strings and colors derived from
//! the record engine by the controller, consumed by the panels.

use crate::records::StatusFilter;
use egui::Color32;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    pub dashboard: DashboardState,
    /// Detail overlay content for the selected record, when one is open.
    pub detail: Option<RecordDetailView>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            dashboard: DashboardState::default(),
            detail: None,
        }
    }
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
}

impl StatusBarState {
    pub fn idle() -> Self {
        Self {
            text: "Ready".into(),
            badge_label: "Idle".into(),
            badge_color: Color32::from_rgb(42, 42, 42),
        }
    }
}

/// Dashboard page state: summary cards, filter row, and the record table.
#[derive(Clone, Debug)]
pub struct DashboardState {
    /// Visible rows after applying the active filter and search.
    pub rows: Vec<RecordRowView>,
    /// Summary cards computed over the unfiltered collection.
    pub cards: Vec<SummaryCardView>,
    pub filter: StatusFilter,
    pub search_query: String,
    pub search_focus_requested: bool,
    /// True while a fetch is in flight; the table shows skeleton rows.
    pub loading: bool,
    /// Banner message from the last failed fetch.
    pub error_banner: Option<String>,
    /// Highlighted table row (index into `rows`).
    pub selected_visible: Option<usize>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            cards: Vec::new(),
            filter: StatusFilter::All,
            search_query: String::new(),
            search_focus_requested: false,
            loading: false,
            error_banner: None,
            selected_visible: None,
        }
    }
}

/// One summary card (title, count, accent color).
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryCardView {
    pub title: String,
    pub value: usize,
    pub accent: Color32,
}

/// Color-coded label chip for a status or priority.
#[derive(Clone, Debug, PartialEq)]
pub struct PillView {
    pub label: String,
    pub fill: Color32,
    pub text: Color32,
}

/// Display data for one table row.
#[derive(Clone, Debug)]
pub struct RecordRowView {
    pub id: i64,
    pub requisition_no: String,
    pub customer: String,
    pub vehicle: String,
    pub branch: String,
    pub cost: String,
    pub requested: String,
    pub priority: PillView,
    pub status: PillView,
}

/// Fully formatted fields for the detail overlay. Absent data is already
/// substituted with the "N/A" placeholder.
#[derive(Clone, Debug)]
pub struct RecordDetailView {
    pub heading: String,
    pub title: String,
    pub status: PillView,
    pub priority: PillView,
    pub customer_name: String,
    pub customer_mobile: String,
    pub vehicle_no: String,
    pub branch: String,
    pub assigned_to: String,
    pub created_by: String,
    pub cost: String,
    pub location: String,
    pub remarks: String,
    pub requested_at: String,
    pub preferred_at: String,
    pub completed_at: String,
    pub verified_at: String,
    pub created_at: String,
    pub updated_at: String,
}
