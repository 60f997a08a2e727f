//! seqfind: FASTA sequence store with exact substring search
//!
//! # Overview
//!
//! seqfind loads FASTA-format sequence files into an in-memory store and
//! answers exact substring queries over them: which records contain the
//! query, and at which offsets. It is the engine behind a DNA search
//! front end; the front end itself (window, buttons, text display) lives
//! elsewhere and only calls the operations exposed here.
//!
//! ## Quick Start
//!
//! ```
//! use seqfind::SequenceStore;
//! use std::io::Cursor;
//!
//! # fn main() -> seqfind::Result<()> {
//! let fasta = b">a plasmid fragment\nACGTACGT\n>b\nTTTT\n";
//! let store = SequenceStore::from_reader(Cursor::new(fasta))?;
//!
//! let ids = store.search("ACGT")?;
//! assert_eq!(ids, vec!["a".to_string()]);
//!
//! let report = store.find_occurrences(&ids, "ACGT")?;
//! assert_eq!(report.get("a").unwrap().count, 2);
//! # Ok(())
//! # }
//! ```
//!
//! Loading from disk goes through [`SequenceStore::load`], which reads
//! plain or gzip-compressed FASTA transparently and replaces the store
//! contents atomically: a failed load leaves the previous contents intact.
//!
//! ## Module Organization
//!
//! - [`io`]: compressed input and the streaming FASTA parser
//! - [`store`]: the identifier → sequence store and its query operations
//! - [`operations`]: pure substring-search primitives
//! - [`render`]: deterministic text rendering of search results
//! - [`diagnostics`]: injected parse-event observer (no global debug flags)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostics;
pub mod error;
pub mod io;
pub mod operations;
pub mod render;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use diagnostics::{EventLog, ParseEvent, ParseObserver};
pub use error::{Result, SeqfindError};
pub use io::FastaStream;
pub use store::SequenceStore;
pub use types::{FastaRecord, MatchReport, Occurrences};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
