mod support;

use support::fixtures::{record, sample_records};

use reqdash::egui_app::controller::DashboardController;
use reqdash::records::{
    ApiSettings, AppConfig, FetchError, Status, StatusFilter,
};

/// A controller wired to an unroutable backend; outcomes are injected
/// directly so tests stay deterministic and offline.
fn test_controller() -> DashboardController {
    let config = AppConfig {
        api: ApiSettings {
            base_url: "http://127.0.0.1:9/api".into(),
            fetch_limit: 5,
        },
    };
    DashboardController::new(&config).expect("controller")
}

fn card_values(controller: &DashboardController) -> Vec<usize> {
    controller
        .ui
        .dashboard
        .cards
        .iter()
        .map(|card| card.value)
        .collect()
}

#[test]
fn successful_fetch_populates_rows_and_cards() {
    let mut controller = test_controller();
    controller.apply_fetch_outcome(0, Ok(sample_records()));

    assert_eq!(controller.visible_len(), 5);
    assert_eq!(controller.ui.dashboard.rows.len(), 5);
    assert_eq!(card_values(&controller), vec![5, 2, 1, 1, 1]);
    assert!(controller.ui.dashboard.error_banner.is_none());
    assert_eq!(controller.ui.status.badge_label, "Info");
    assert_eq!(controller.ui.status.text, "5 requisitions loaded");
}

#[test]
fn status_filter_narrows_rows_but_not_cards() {
    let mut controller = test_controller();
    controller.apply_fetch_outcome(0, Ok(sample_records()));

    controller.set_status_filter(StatusFilter::Only(Status::Accepted));

    assert_eq!(controller.visible_len(), 2);
    let ids: Vec<i64> = (0..controller.visible_len())
        .map(|row| controller.visible_record(row).unwrap().id)
        .collect();
    assert_eq!(ids, vec![201, 205]);
    assert!(controller
        .ui
        .dashboard
        .rows
        .iter()
        .all(|row| row.status.label == "Accepted"));
    // Cards keep reflecting the unfiltered collection.
    assert_eq!(card_values(&controller), vec![5, 2, 1, 1, 1]);
}

#[test]
fn search_filters_rows_and_whitespace_is_ignored() {
    let mut controller = test_controller();
    controller.apply_fetch_outcome(0, Ok(sample_records()));

    controller.set_search("pineapple".into());
    assert_eq!(controller.visible_len(), 1);
    assert_eq!(controller.visible_record(0).unwrap().id, 201);

    controller.set_search("   ".into());
    assert_eq!(controller.visible_len(), 5);

    controller.set_search("KA-02".into());
    assert_eq!(controller.visible_len(), 1);
    assert_eq!(controller.visible_record(0).unwrap().id, 202);
}

#[test]
fn clear_filters_restores_the_full_view() {
    let mut controller = test_controller();
    controller.apply_fetch_outcome(0, Ok(sample_records()));

    controller.set_status_filter(StatusFilter::Only(Status::Pending));
    controller.set_search("inc".into());
    assert!(controller.visible_len() < 5);

    controller.clear_filters();
    assert_eq!(controller.visible_len(), 5);
    assert_eq!(controller.ui.dashboard.filter, StatusFilter::All);
    assert!(controller.ui.dashboard.search_query.is_empty());
}

#[test]
fn failed_fetch_clears_collection_and_shows_banner() {
    let mut controller = test_controller();
    controller.apply_fetch_outcome(0, Ok(sample_records()));
    assert_eq!(controller.visible_len(), 5);

    controller.apply_fetch_outcome(0, Err(FetchError::Service("network error".into())));

    assert_eq!(controller.visible_len(), 0);
    assert_eq!(controller.record_count(), 0);
    assert_eq!(card_values(&controller), vec![0, 0, 0, 0, 0]);
    assert_eq!(
        controller.ui.dashboard.error_banner.as_deref(),
        Some("network error")
    );
    assert_eq!(controller.ui.status.badge_label, "Error");
}

#[test]
fn stale_outcome_is_discarded() {
    let mut controller = test_controller();
    controller.request_refresh();
    assert!(controller.loading());

    // An outcome from before the current dispatch must not land.
    controller.apply_fetch_outcome(0, Ok(sample_records()));
    assert_eq!(controller.record_count(), 0);
    assert!(controller.loading());

    // The outcome for the live request applies normally.
    controller.apply_fetch_outcome(1, Ok(sample_records()));
    assert_eq!(controller.record_count(), 5);
    assert!(!controller.loading());
}

#[test]
fn refresh_is_ignored_while_a_fetch_is_in_flight() {
    let mut controller = test_controller();
    controller.request_refresh();
    controller.request_refresh();

    // Only the first dispatch counts; its outcome is still the live one.
    controller.apply_fetch_outcome(1, Ok(sample_records()));
    assert_eq!(controller.record_count(), 5);
}

#[test]
fn selecting_a_row_opens_its_detail_and_escape_paths_close_it() {
    let mut controller = test_controller();
    controller.apply_fetch_outcome(0, Ok(sample_records()));

    controller.select_visible_row(1);
    let detail = controller.ui.detail.as_ref().expect("detail open");
    assert_eq!(detail.heading, "REQ-202");
    assert_eq!(detail.customer_name, "ME Inc.");
    assert_eq!(controller.ui.dashboard.selected_visible, Some(1));

    controller.close_detail();
    assert!(controller.ui.detail.is_none());
    assert!(controller.ui.dashboard.selected_visible.is_none());
}

#[test]
fn detail_fields_fall_back_to_placeholders() {
    let mut controller = test_controller();
    controller.apply_fetch_outcome(0, Ok(vec![record(9, Status::Pending)]));

    controller.select_visible_row(0);
    let detail = controller.ui.detail.as_ref().expect("detail open");
    assert_eq!(detail.heading, "Requisition #9");
    assert_eq!(detail.customer_name, "N/A");
    assert_eq!(detail.requested_at, "N/A");
    assert_eq!(detail.location, "N/A");
}

#[test]
fn selection_highlight_tracks_the_filtered_view() {
    let mut controller = test_controller();
    controller.apply_fetch_outcome(0, Ok(sample_records()));

    controller.select_visible_row(4); // id 205, Accepted
    controller.set_status_filter(StatusFilter::Only(Status::Accepted));
    // 205 is now the second visible row.
    assert_eq!(controller.ui.dashboard.selected_visible, Some(1));

    controller.set_status_filter(StatusFilter::Only(Status::Closed));
    // Selected record filtered out: no highlighted row, detail stays open.
    assert!(controller.ui.dashboard.selected_visible.is_none());
    assert!(controller.ui.detail.is_some());
}

#[test]
fn new_fetch_outcome_resets_selection_and_detail() {
    let mut controller = test_controller();
    controller.apply_fetch_outcome(0, Ok(sample_records()));
    controller.select_visible_row(0);
    assert!(controller.ui.detail.is_some());

    controller.apply_fetch_outcome(0, Ok(vec![record(1, Status::Closed)]));
    assert!(controller.ui.detail.is_none());
    assert!(controller.ui.dashboard.selected_visible.is_none());
    assert_eq!(controller.visible_len(), 1);
}
