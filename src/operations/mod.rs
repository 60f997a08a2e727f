//! Pure substring-search primitives
//!
//! These are the scan kernels behind [`SequenceStore`](crate::SequenceStore):
//! free functions over sequence text with no store or I/O involvement,
//! so they can be tested and benchmarked in isolation.

pub mod search;

pub use search::{has_occurrence, occurrence_ranges};
