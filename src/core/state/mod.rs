//! Sync cursor state management
//!
//! The cursor `(last_order_id, last_document_seq)` is the only state that
//! survives between runs. [`CursorStore`] owns its persistence; the value
//! itself is threaded through the pipeline explicitly, never held as
//! ambient mutable state.

pub mod cursor;
pub mod store;

pub use cursor::Cursor;
pub use store::CursorStore;
