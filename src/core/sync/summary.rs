//! Run summary

use std::path::PathBuf;
use std::time::Duration;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// No orders newer than the cursor; nothing written, cursor unchanged
    NoNewOrders,
    /// Batch processed, files written, cursor advanced
    Completed,
    /// Batch processed but nothing written or persisted
    DryRun,
}

/// What one run did
#[derive(Debug)]
pub struct SyncSummary {
    pub outcome: SyncOutcome,
    pub orders_fetched: usize,
    pub records_written: usize,
    pub document_no: Option<u64>,
    pub archive_file: Option<PathBuf>,
    pub import_file: Option<PathBuf>,
    pub duration: Duration,
}

impl SyncSummary {
    /// Emit the run summary to the log
    pub fn log(&self) {
        match self.outcome {
            SyncOutcome::NoNewOrders => {
                tracing::info!(
                    duration_ms = self.duration.as_millis() as u64,
                    "Sync complete: no new orders"
                );
            }
            SyncOutcome::Completed => {
                let archive_file = self.archive_file.as_ref().map(|p| p.display().to_string());
                let import_file = self.import_file.as_ref().map(|p| p.display().to_string());
                tracing::info!(
                    orders = self.orders_fetched,
                    records = self.records_written,
                    document_no = self.document_no,
                    archive_file = archive_file.as_deref(),
                    import_file = import_file.as_deref(),
                    duration_ms = self.duration.as_millis() as u64,
                    "Sync complete"
                );
            }
            SyncOutcome::DryRun => {
                tracing::info!(
                    orders = self.orders_fetched,
                    records = self.records_written,
                    document_no = self.document_no,
                    duration_ms = self.duration.as_millis() as u64,
                    "Dry run complete: no files written, cursor unchanged"
                );
            }
        }
    }
}
