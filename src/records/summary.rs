//! Per-status tallies over the full (unfiltered) record collection.

use super::{Record, Status};

/// Counts per status plus the collection total.
///
/// Always computed over the unfiltered collection; the active filter never
/// changes these numbers. Unrecognized statuses land in `other` so they are
/// visible in `total` without inflating a named bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountSummary {
    pub total: usize,
    pub accepted: usize,
    pub pending: usize,
    pub closed: usize,
    pub rejected: usize,
    pub other: usize,
}

impl CountSummary {
    /// Count for one status bucket.
    pub fn of(&self, status: Status) -> usize {
        match status {
            Status::Accepted => self.accepted,
            Status::Pending => self.pending,
            Status::Closed => self.closed,
            Status::Rejected => self.rejected,
            Status::Unknown => self.other,
        }
    }
}

/// Tally the collection in a single pass.
pub fn summarize(records: &[Record]) -> CountSummary {
    let mut summary = CountSummary {
        total: records.len(),
        ..CountSummary::default()
    };
    for record in records {
        match record.status {
            Status::Accepted => summary.accepted += 1,
            Status::Pending => summary.pending += 1,
            Status::Closed => summary.closed += 1,
            Status::Rejected => summary.rejected += 1,
            Status::Unknown => summary.other += 1,
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, status: Status) -> Record {
        Record {
            status,
            ..Record::new(id)
        }
    }

    #[test]
    fn tallies_match_the_source_scenario() {
        let records = vec![
            record(201, Status::Accepted),
            record(202, Status::Pending),
            record(203, Status::Closed),
            record(204, Status::Rejected),
            record(205, Status::Accepted),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.accepted, 2);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.closed, 1);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.other, 0);
    }

    #[test]
    fn unknown_statuses_count_in_total_but_no_named_bucket() {
        let records = vec![
            record(1, Status::Accepted),
            record(2, Status::Unknown),
            record(3, Status::Unknown),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.accepted, 1);
        let named_sum = Status::KNOWN.iter().map(|s| summary.of(*s)).sum::<usize>();
        assert!(named_sum <= summary.total);
        assert_eq!(named_sum, 1);
        assert_eq!(summary.other, 2);
    }

    #[test]
    fn empty_collection_is_all_zeros() {
        assert_eq!(summarize(&[]), CountSummary::default());
    }
}
