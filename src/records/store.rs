//! Owner of the in-memory record collection.

use super::{FetchError, Record};

/// Holds the records from the most recent fetch, or the error it produced.
///
/// Fetch outcomes are applied all-or-nothing: success replaces the collection
/// wholesale and clears any stored error; failure empties the collection and
/// keeps the message for display. There is no partial-success state.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    error: Option<String>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a completed fetch outcome.
    pub fn apply(&mut self, outcome: Result<Vec<Record>, FetchError>) {
        match outcome {
            Ok(records) => {
                self.records = records;
                self.error = None;
            }
            Err(error) => {
                self.records.clear();
                self.error = Some(error.to_string());
            }
        }
    }

    /// The held collection in fetch order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The message from the last failed fetch, if the last fetch failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Status, summarize};

    fn record(id: i64, status: Status) -> Record {
        Record {
            status,
            ..Record::new(id)
        }
    }

    #[test]
    fn success_replaces_collection_and_clears_error() {
        let mut store = RecordStore::new();
        store.apply(Err(FetchError::Service("boom".into())));
        assert!(store.error().is_some());

        store.apply(Ok(vec![record(1, Status::Accepted), record(2, Status::Pending)]));
        assert_eq!(store.len(), 2);
        assert!(store.error().is_none());

        store.apply(Ok(vec![record(3, Status::Closed)]));
        let ids: Vec<i64> = store.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn failure_clears_collection_and_stores_message() {
        let mut store = RecordStore::new();
        store.apply(Ok(vec![record(1, Status::Accepted)]));
        assert_eq!(store.len(), 1);

        store.apply(Err(FetchError::Service("network error".into())));
        assert!(store.is_empty());
        assert_eq!(store.error(), Some("network error"));
        assert_eq!(summarize(store.records()).total, 0);
    }
}
