use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
    time::Instant,
};

use crate::records::{FetchClient, FetchError, Record};

/// One fetch dispatched to the loader thread.
pub(super) struct FetchJob {
    pub request: u64,
    pub limit: u32,
}

/// The completed fetch, tagged with the request id that produced it.
pub(super) struct FetchOutcome {
    pub request: u64,
    pub result: Result<Vec<Record>, FetchError>,
}

/// Spawn the single background thread that serializes record fetches.
///
/// The thread exits when the job sender is dropped.
pub(super) fn spawn_record_loader(
    client: FetchClient,
) -> (Sender<FetchJob>, Receiver<FetchOutcome>) {
    let (tx, rx) = std::sync::mpsc::channel::<FetchJob>();
    let (result_tx, result_rx) = std::sync::mpsc::channel::<FetchOutcome>();
    thread::spawn(move || {
        while let Ok(job) = rx.recv() {
            let start = Instant::now();
            let result = client.get_records(job.limit);
            tracing::debug!(
                request = job.request,
                elapsed = ?start.elapsed(),
                ok = result.is_ok(),
                "Record fetch finished"
            );
            let _ = result_tx.send(FetchOutcome {
                request: job.request,
                result,
            });
        }
    });
    (tx, result_rx)
}
