//! Cursor model for tracking sync state
//!
//! The cursor marks the resume point for the next run: the id of the last
//! synchronized order and the document sequence number stamped on the last
//! OMS import file.

use crate::domain::errors::SyncError;
use crate::domain::result::Result;
use std::fmt;
use std::str::FromStr;

/// Persisted sync cursor
///
/// Serialized as a single delimited text record `last_order_id,last_document_seq`.
/// A fresh store starts at `(0, 0)`. The cursor is mutated once per run,
/// after a non-empty batch has been fully written; never partially updated.
///
/// # Examples
///
/// ```
/// use shopsync::core::state::Cursor;
///
/// let cursor = Cursor::initial();
/// assert_eq!(cursor.last_order_id, 0);
///
/// let next = cursor.advanced(91234);
/// assert_eq!(next.last_order_id, 91234);
/// assert_eq!(next.last_document_seq, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Id of the last order included in a completed run
    pub last_order_id: u64,

    /// Sequence number of the last import document written
    pub last_document_seq: u64,
}

impl Cursor {
    /// The cursor of a store that has never completed a run
    pub fn initial() -> Self {
        Self {
            last_order_id: 0,
            last_document_seq: 0,
        }
    }

    /// Create a cursor from explicit components
    pub fn new(last_order_id: u64, last_document_seq: u64) -> Self {
        Self {
            last_order_id,
            last_document_seq,
        }
    }

    /// The document number the next import file will carry
    pub fn next_document_no(&self) -> u64 {
        self.last_document_seq + 1
    }

    /// Derive the cursor to persist after a successful non-empty run
    ///
    /// `last_order_id` becomes the id of the batch's final order; the
    /// document sequence increments by exactly one per run, not per order
    /// or per line.
    pub fn advanced(&self, last_order_id: u64) -> Self {
        Self {
            last_order_id,
            last_document_seq: self.last_document_seq + 1,
        }
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.last_order_id, self.last_document_seq)
    }
}

impl FromStr for Cursor {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();

        // A freshly created, still-empty file counts as the initial cursor
        if trimmed.is_empty() {
            return Ok(Cursor::initial());
        }

        let mut parts = trimmed.split(',');
        let last_order_id = parts
            .next()
            .ok_or_else(|| SyncError::State(format!("Malformed cursor record: '{trimmed}'")))?
            .trim()
            .parse::<u64>()
            .map_err(|e| SyncError::State(format!("Invalid last_order_id in cursor: {e}")))?;

        // Older single-field cursor files carry only the order id
        let last_document_seq = match parts.next() {
            Some(field) => field
                .trim()
                .parse::<u64>()
                .map_err(|e| SyncError::State(format!("Invalid last_document_seq in cursor: {e}")))?,
            None => 0,
        };

        if parts.next().is_some() {
            return Err(SyncError::State(format!(
                "Malformed cursor record: '{trimmed}'"
            )));
        }

        Ok(Cursor::new(last_order_id, last_document_seq))
    }
}
