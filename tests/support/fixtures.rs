//! Explicitly constructed record fixtures; no global demo data.

use reqdash::records::{Priority, Record, Status};

pub fn record(id: i64, status: Status) -> Record {
    Record {
        status,
        ..Record::new(id)
    }
}

/// Five requisitions mirroring the classic dashboard scenario: statuses
/// [Accepted, Pending, Closed, Rejected, Accepted] with searchable fields.
pub fn sample_records() -> Vec<Record> {
    vec![
        Record {
            requisition_no: Some("REQ-201".into()),
            title: Some("Login issue".into()),
            customer_name: Some("Pineapple Inc.".into()),
            customer_mobile: Some("9876543210".into()),
            vehicle_no: Some("KA-01-2345".into()),
            branch_id: Some(12),
            branch_name: Some("North".into()),
            assigned_to: Some("Support A".into()),
            cost: Some(90.0),
            priority: Priority::High,
            requested_at: Some("2024-03-15T09:30:00Z".into()),
            ..record(201, Status::Accepted)
        },
        Record {
            requisition_no: Some("REQ-202".into()),
            title: Some("Payment failure".into()),
            customer_name: Some("ME Inc.".into()),
            customer_mobile: Some("9876500000".into()),
            vehicle_no: Some("KA-02-9999".into()),
            branch_id: Some(7),
            assigned_to: Some("Support B".into()),
            cost: Some(120.0),
            priority: Priority::Urgent,
            ..record(202, Status::Pending)
        },
        Record {
            requisition_no: Some("REQ-203".into()),
            title: Some("UI bug".into()),
            customer_name: Some("Redq Inc.".into()),
            assigned_to: Some("Support C".into()),
            cost: Some(70.0),
            priority: Priority::Low,
            ..record(203, Status::Closed)
        },
        Record {
            requisition_no: Some("REQ-204".into()),
            title: Some("API timeout".into()),
            customer_name: Some("Acme Corp.".into()),
            assigned_to: Some("Support A".into()),
            cost: Some(150.0),
            ..record(204, Status::Rejected)
        },
        Record {
            requisition_no: Some("REQ-205".into()),
            title: Some("Report issue".into()),
            customer_name: Some("Globex".into()),
            assigned_to: Some("Support B".into()),
            cost: Some(60.0),
            ..record(205, Status::Accepted)
        },
    ]
}
