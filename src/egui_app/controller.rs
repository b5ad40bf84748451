//! Maintains app state and bridges the record engine to the egui UI.

use std::sync::mpsc::{Receiver, Sender};

use egui::Color32;

use crate::egui_app::state::*;
use crate::egui_app::view_model;
use crate::records::{
    FetchClient, FetchError, FilterCriteria, Record, RecordStore, StatusFilter, filter, summarize,
};
use crate::records::config::AppConfig;

mod record_loader;

use record_loader::{FetchJob, FetchOutcome, spawn_record_loader};

/// Owns the record store and derives everything the renderer displays.
///
/// Fetches run on a background loader thread; the renderer calls
/// [`DashboardController::process_fetch_results`] once per frame to drain
/// completed outcomes.
pub struct DashboardController {
    pub ui: UiState,
    store: RecordStore,
    criteria: FilterCriteria,
    /// Positions into the store for the currently visible rows.
    visible: Vec<usize>,
    /// Position into the store for the record open in the detail overlay.
    selected: Option<usize>,
    fetch_limit: u32,
    jobs: Sender<FetchJob>,
    outcomes: Receiver<FetchOutcome>,
    /// Monotonically increasing id of the most recently dispatched fetch.
    /// Outcomes carrying an older id are stale and get discarded.
    latest_request: u64,
    in_flight: bool,
}

impl DashboardController {
    /// Build the controller and start the background loader.
    pub fn new(config: &AppConfig) -> Result<Self, FetchError> {
        let client = FetchClient::new(&config.api)?;
        let (jobs, outcomes) = spawn_record_loader(client);
        let mut controller = Self {
            ui: UiState::default(),
            store: RecordStore::new(),
            criteria: FilterCriteria::default(),
            visible: Vec::new(),
            selected: None,
            fetch_limit: config.api.fetch_limit,
            jobs,
            outcomes,
            latest_request: 0,
            in_flight: false,
        };
        controller.rebuild_views();
        Ok(controller)
    }

    /// Dispatch a fetch unless one is already in flight.
    pub fn request_refresh(&mut self) {
        if self.in_flight {
            return;
        }
        self.latest_request += 1;
        self.in_flight = true;
        self.ui.dashboard.loading = true;
        self.set_status("Loading requisitions", StatusTone::Busy);
        let job = FetchJob {
            request: self.latest_request,
            limit: self.fetch_limit,
        };
        if self.jobs.send(job).is_err() {
            self.in_flight = false;
            self.ui.dashboard.loading = false;
            self.set_status("Record loader is not running", StatusTone::Error);
        }
    }

    /// True while a fetch is in flight.
    pub fn loading(&self) -> bool {
        self.in_flight
    }

    /// Drain completed fetches from the loader thread.
    pub fn process_fetch_results(&mut self) {
        while let Ok(outcome) = self.outcomes.try_recv() {
            self.apply_fetch_outcome(outcome.request, outcome.result);
        }
    }

    /// Apply one completed fetch outcome.
    ///
    /// An outcome older than the latest dispatched request is discarded so a
    /// slow response can never overwrite a newer one.
    pub fn apply_fetch_outcome(
        &mut self,
        request: u64,
        result: Result<Vec<Record>, FetchError>,
    ) {
        if request < self.latest_request {
            tracing::debug!(request, latest = self.latest_request, "Discarding stale fetch outcome");
            return;
        }
        self.in_flight = false;
        self.ui.dashboard.loading = false;
        match &result {
            Ok(records) => tracing::info!(count = records.len(), "Records fetched"),
            Err(error) => tracing::warn!(%error, "Records fetch failed"),
        }
        self.store.apply(result);
        self.selected = None;
        self.ui.detail = None;
        self.rebuild_views();
        match self.store.error().map(str::to_string) {
            Some(message) => self.set_status(message, StatusTone::Error),
            None => self.set_status(
                format!("{} requisitions loaded", self.store.len()),
                StatusTone::Info,
            ),
        }
    }

    /// Change the status side of the filter.
    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        if self.criteria.status == filter {
            return;
        }
        self.criteria.status = filter;
        self.rebuild_views();
    }

    /// Change the search term.
    pub fn set_search(&mut self, query: String) {
        if self.criteria.search == query {
            return;
        }
        self.criteria.search = query;
        self.rebuild_views();
    }

    /// Reset status filter and search to their defaults.
    pub fn clear_filters(&mut self) {
        if self.criteria == FilterCriteria::default() {
            return;
        }
        self.criteria = FilterCriteria::default();
        self.rebuild_views();
    }

    /// Open the detail overlay for a visible row.
    pub fn select_visible_row(&mut self, row: usize) {
        let Some(&index) = self.visible.get(row) else {
            return;
        };
        self.selected = Some(index);
        self.ui.detail = self
            .store
            .records()
            .get(index)
            .map(view_model::detail_view);
        self.ui.dashboard.selected_visible = Some(row);
    }

    /// Close the detail overlay.
    pub fn close_detail(&mut self) {
        self.selected = None;
        self.ui.detail = None;
        self.ui.dashboard.selected_visible = None;
    }

    /// Number of rows in the current filtered view.
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Total number of records in the unfiltered collection.
    pub fn record_count(&self) -> usize {
        self.store.len()
    }

    /// The record behind a visible row, for tests and tooltips.
    pub fn visible_record(&self, row: usize) -> Option<&Record> {
        self.visible
            .get(row)
            .and_then(|&index| self.store.records().get(index))
    }

    /// Recompute the filtered rows and summary cards from the store.
    ///
    /// Cards always reflect the unfiltered collection.
    fn rebuild_views(&mut self) {
        let records = self.store.records();
        self.visible = filter::view_indices(records, &self.criteria);
        self.ui.dashboard.rows = self
            .visible
            .iter()
            .filter_map(|&index| records.get(index))
            .map(view_model::record_row)
            .collect();
        self.ui.dashboard.cards = view_model::summary_cards(&summarize(records));
        self.ui.dashboard.filter = self.criteria.status;
        self.ui.dashboard.search_query = self.criteria.search.clone();
        self.ui.dashboard.error_banner = self.store.error().map(str::to_string);
        self.ui.dashboard.selected_visible = self
            .selected
            .and_then(|index| self.visible.iter().position(|&v| v == index));
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        let (label, color) = status_badge(tone);
        self.ui.status.text = text.into();
        self.ui.status.badge_label = label;
        self.ui.status.badge_color = color;
    }
}

/// Tone of the footer status badge.
#[derive(Clone, Copy, Debug)]
pub enum StatusTone {
    Idle,
    Busy,
    Info,
    Error,
}

fn status_badge(tone: StatusTone) -> (String, Color32) {
    match tone {
        StatusTone::Idle => ("Idle".into(), Color32::from_rgb(42, 42, 42)),
        StatusTone::Busy => ("Loading".into(), Color32::from_rgb(31, 139, 255)),
        StatusTone::Info => ("Info".into(), Color32::from_rgb(64, 140, 112)),
        StatusTone::Error => ("Error".into(), Color32::from_rgb(192, 57, 43)),
    }
}
