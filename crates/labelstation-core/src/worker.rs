//! Channel-fed print worker.
//!
//! Intake code (an HTTP handler, a queue consumer, the CLI's `serve`
//! command) sends [`LabelRecord`]s into a channel; the [`PrintWorker`]
//! prints them one at a time with the copy count from
//! [`copies_for`](crate::policy::copies_for). Printing blocks on file I/O
//! and the spooler, so each job runs on tokio's blocking pool.

use std::sync::Arc;

use log::{debug, error, info};
use tokio::{sync::mpsc, task};

use crate::{dispatcher::Dispatcher, models::LabelRecord, policy::copies_for};

/// Totals reported when a worker's channel closes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerSummary {
    /// Jobs printed without error
    pub printed: usize,
    /// Jobs that failed
    pub failed: usize,
    /// Label files rendered across all successful jobs
    pub files: usize,
}

/// Prints label jobs received over a channel.
pub struct PrintWorker {
    dispatcher: Arc<Dispatcher>,
}

impl PrintWorker {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Creates a bounded job channel of the given capacity.
    pub fn channel(capacity: usize) -> (mpsc::Sender<LabelRecord>, mpsc::Receiver<LabelRecord>) {
        mpsc::channel(capacity)
    }

    /// Prints jobs until every sender has been dropped.
    ///
    /// A failed job is logged and counted; the worker carries on with the
    /// next one.
    pub async fn run(self, mut jobs: mpsc::Receiver<LabelRecord>) -> WorkerSummary {
        let mut summary = WorkerSummary::default();

        while let Some(record) = jobs.recv().await {
            let copies = copies_for(&record.label_type);
            let id = record.id.clone();
            let dispatcher = Arc::clone(&self.dispatcher);

            match task::spawn_blocking(move || dispatcher.print(&record, copies)).await {
                Ok(Ok(report)) => {
                    summary.printed += 1;
                    summary.files += report.rendered.len();
                }
                Ok(Err(e)) => {
                    debug!("Label job {id} failed: {e}");
                    summary.failed += 1;
                }
                Err(e) => {
                    error!("Label job {id} panicked: {e}");
                    summary.failed += 1;
                }
            }
        }

        info!(
            "Print worker finished: {} printed, {} failed",
            summary.printed, summary.failed
        );
        summary
    }
}
