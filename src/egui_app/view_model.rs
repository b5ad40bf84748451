//! Helpers to convert domain data into egui-facing view structs.
//!
//! Pure conversions: all placeholder substitution and color lookup happens
//! here so the panels only ever deal with ready-to-paint strings.

use crate::egui_app::state::{PillView, RecordDetailView, RecordRowView, SummaryCardView};
use crate::egui_app::ui::style;
use crate::formatting;
use crate::records::{CountSummary, Priority, Record, Status};

/// Convert a record into a table row.
pub fn record_row(record: &Record) -> RecordRowView {
    RecordRowView {
        id: record.id,
        requisition_no: formatting::text_or_na(record.requisition_no.as_deref()),
        customer: formatting::text_or_na(record.customer_name.as_deref()),
        vehicle: formatting::text_or_na(record.vehicle_no.as_deref()),
        branch: branch_label(record),
        cost: formatting::amount_or_na(record.cost),
        requested: formatting::format_date(record.requested_at.as_deref()),
        priority: priority_pill(record.priority),
        status: status_pill(record.status),
    }
}

/// Convert a record into the fully formatted detail overlay content.
pub fn detail_view(record: &Record) -> RecordDetailView {
    RecordDetailView {
        heading: record
            .requisition_no
            .clone()
            .unwrap_or_else(|| format!("Requisition #{}", record.id)),
        title: formatting::text_or_na(record.title.as_deref()),
        status: status_pill(record.status),
        priority: priority_pill(record.priority),
        customer_name: formatting::text_or_na(record.customer_name.as_deref()),
        customer_mobile: formatting::text_or_na(record.customer_mobile.as_deref()),
        vehicle_no: formatting::text_or_na(record.vehicle_no.as_deref()),
        branch: branch_label(record),
        assigned_to: formatting::text_or_na(record.assigned_to.as_deref()),
        created_by: formatting::text_or_na(record.created_by.as_deref()),
        cost: formatting::amount_or_na(record.cost),
        location: location_label(record),
        remarks: formatting::text_or_na(record.remarks.as_deref()),
        requested_at: formatting::format_date_time(record.requested_at.as_deref()),
        preferred_at: formatting::format_date_time(record.preferred_at.as_deref()),
        completed_at: formatting::format_date_time(record.completed_at.as_deref()),
        verified_at: formatting::format_date_time(record.verified_at.as_deref()),
        created_at: formatting::format_date_time(record.created_at.as_deref()),
        updated_at: formatting::format_date_time(record.updated_at.as_deref()),
    }
}

/// Build the summary card strip from the unfiltered tallies.
pub fn summary_cards(summary: &CountSummary) -> Vec<SummaryCardView> {
    let mut cards = vec![SummaryCardView {
        title: "Total".into(),
        value: summary.total,
        accent: style::total_accent(),
    }];
    cards.extend(Status::KNOWN.iter().map(|&status| SummaryCardView {
        title: status.label().into(),
        value: summary.of(status),
        accent: style::status_accent(status),
    }));
    cards
}

/// Color-coded chip for a status value.
pub fn status_pill(status: Status) -> PillView {
    let (fill, text) = style::status_colors(status);
    PillView {
        label: status.label().into(),
        fill,
        text,
    }
}

/// Color-coded chip for a priority value.
pub fn priority_pill(priority: Priority) -> PillView {
    let (fill, text) = style::priority_colors(priority);
    PillView {
        label: priority.label().into(),
        fill,
        text,
    }
}

fn branch_label(record: &Record) -> String {
    match (record.branch_name.as_deref(), record.branch_id) {
        (Some(name), Some(id)) => format!("{name} (#{id})"),
        (Some(name), None) => name.to_string(),
        (None, Some(id)) => format!("#{id}"),
        (None, None) => formatting::PLACEHOLDER.to_string(),
    }
}

fn location_label(record: &Record) -> String {
    match (record.latitude, record.longitude) {
        (Some(lat), Some(lng)) => format!("{lat:.5}, {lng:.5}"),
        _ => formatting::PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::PLACEHOLDER;
    use crate::records::summarize;

    #[test]
    fn empty_record_rows_fall_back_to_placeholders() {
        let row = record_row(&Record::new(7));
        assert_eq!(row.requisition_no, PLACEHOLDER);
        assert_eq!(row.customer, PLACEHOLDER);
        assert_eq!(row.branch, PLACEHOLDER);
        assert_eq!(row.cost, PLACEHOLDER);
        assert_eq!(row.requested, PLACEHOLDER);
        assert_eq!(row.status.label, "Unknown");
    }

    #[test]
    fn branch_label_combines_name_and_id() {
        let mut record = Record::new(1);
        record.branch_name = Some("North".into());
        record.branch_id = Some(12);
        assert_eq!(record_row(&record).branch, "North (#12)");
        record.branch_name = None;
        assert_eq!(record_row(&record).branch, "#12");
    }

    #[test]
    fn detail_heading_prefers_requisition_number() {
        let mut record = Record::new(42);
        assert_eq!(detail_view(&record).heading, "Requisition #42");
        record.requisition_no = Some("REQ-42".into());
        assert_eq!(detail_view(&record).heading, "REQ-42");
    }

    #[test]
    fn summary_cards_cover_total_and_every_known_status() {
        let records = vec![
            Record {
                status: Status::Accepted,
                ..Record::new(1)
            },
            Record {
                status: Status::Accepted,
                ..Record::new(2)
            },
            Record {
                status: Status::Pending,
                ..Record::new(3)
            },
        ];
        let cards = summary_cards(&summarize(&records));
        let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Total", "Accepted", "Pending", "Closed", "Rejected"]
        );
        let values: Vec<usize> = cards.iter().map(|c| c.value).collect();
        assert_eq!(values, vec![3, 2, 1, 0, 0]);
    }
}
