//! Output projection stage
//!
//! Maps priced records onto the two output shapes: the full-fidelity
//! archive row and the fixed-column OMS import row.

pub mod archive;
pub mod import;

use crate::config::ImportConfig;
use crate::domain::record::PricedRecord;

pub use archive::ArchiveRow;
pub use import::ImportRow;

/// Projects priced records into output rows
pub struct RecordProjector {
    import_config: ImportConfig,
}

impl RecordProjector {
    pub fn new(import_config: ImportConfig) -> Self {
        Self { import_config }
    }

    /// Archive rows for a batch, one per record, in batch order
    pub fn to_archive(&self, records: &[PricedRecord]) -> Vec<ArchiveRow> {
        records.iter().map(ArchiveRow::from_priced).collect()
    }

    /// Import rows for a batch, all stamped with the same document number
    pub fn to_import(&self, records: &[PricedRecord], document_no: u64) -> Vec<ImportRow> {
        records
            .iter()
            .map(|priced| ImportRow::from_priced(priced, document_no, &self.import_config))
            .collect()
    }
}
