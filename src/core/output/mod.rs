//! Output file writing stage

pub mod writer;

pub use writer::OutputWriter;
