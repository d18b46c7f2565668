//! Sync run coordination
//!
//! One run is one fetch-transform-write cycle: load the cursor, fetch the
//! next page of paid orders, flatten and price them, write the archive
//! and import files, then advance the cursor. The cursor save is the last
//! action; any failure before it leaves the persisted state untouched so
//! the next run retries the same page.

use crate::adapters::shopify::OrderFetcher;
use crate::config::SyncConfig;
use crate::core::output::OutputWriter;
use crate::core::pricing::PricingEngine;
use crate::core::project::RecordProjector;
use crate::core::state::CursorStore;
use crate::core::sync::summary::{SyncOutcome, SyncSummary};
use crate::core::transform::OrderNormalizer;
use crate::domain::result::Result;
use chrono::Utc;
use std::time::Instant;

/// Drives one incremental sync run end to end
pub struct SyncCoordinator {
    fetcher: OrderFetcher,
    normalizer: OrderNormalizer,
    engine: PricingEngine,
    projector: RecordProjector,
    writer: OutputWriter,
    store: CursorStore,
    dry_run: bool,
}

impl SyncCoordinator {
    /// Assemble the pipeline from configuration
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Configuration` if the HTTP client cannot be
    /// built.
    pub fn from_config(config: &SyncConfig) -> Result<Self> {
        Ok(Self {
            fetcher: OrderFetcher::new(&config.shopify)?,
            normalizer: OrderNormalizer::new(),
            engine: PricingEngine::new(),
            projector: RecordProjector::new(config.import.clone()),
            writer: OutputWriter::new(config.output.clone()),
            store: CursorStore::new(&config.state.cursor_path),
            dry_run: config.application.dry_run,
        })
    }

    /// Execute one sync run
    ///
    /// An empty page is a clean no-op: no files are written and the
    /// cursor is not advanced. In dry-run mode the batch is fully
    /// processed but nothing is written or persisted.
    ///
    /// # Errors
    ///
    /// Propagates any stage failure; the cursor is only saved after both
    /// output files are on disk.
    pub async fn run(&self) -> Result<SyncSummary> {
        let started = Instant::now();
        let cursor = self.store.load()?;

        tracing::info!(
            since_order_id = cursor.last_order_id,
            dry_run = self.dry_run,
            "Starting sync run"
        );

        let orders = self.fetcher.fetch(cursor.last_order_id).await?;
        if orders.is_empty() {
            return Ok(SyncSummary {
                outcome: SyncOutcome::NoNewOrders,
                orders_fetched: 0,
                records_written: 0,
                document_no: None,
                archive_file: None,
                import_file: None,
                duration: started.elapsed(),
            });
        }

        let records = self.normalizer.normalize(&orders);
        let priced = self.engine.price(records)?;

        let document_no = cursor.next_document_no();
        let archive_rows = self.projector.to_archive(&priced);
        let import_rows = self.projector.to_import(&priced, document_no);

        if self.dry_run {
            return Ok(SyncSummary {
                outcome: SyncOutcome::DryRun,
                orders_fetched: orders.len(),
                records_written: priced.len(),
                document_no: Some(document_no),
                archive_file: None,
                import_file: None,
                duration: started.elapsed(),
            });
        }

        let stamp = OutputWriter::file_stamp(Utc::now());
        let archive_file = self.writer.write_archive(&archive_rows, &stamp)?;
        let import_file = self.writer.write_import(&import_rows, &stamp)?;

        // Ids arrive ascending, but take the max rather than trust ordering
        let last_order_id = orders.iter().map(|o| o.id).max().unwrap_or(0);
        self.store.save(&cursor.advanced(last_order_id))?;

        Ok(SyncSummary {
            outcome: SyncOutcome::Completed,
            orders_fetched: orders.len(),
            records_written: priced.len(),
            document_no: Some(document_no),
            archive_file: Some(archive_file),
            import_file: Some(import_file),
            duration: started.elapsed(),
        })
    }
}
