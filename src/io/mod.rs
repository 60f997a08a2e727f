//! I/O module: compressed input and the streaming FASTA parser

pub mod compression;
pub mod fasta;

pub use compression::{CompressedReader, DataSource};
pub use fasta::FastaStream;
