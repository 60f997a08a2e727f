//! Streaming FASTA parser
//!
//! # Format
//!
//! FASTA input is a sequence of records. Each record begins with a header
//! line whose first character is `>`, followed by zero or more sequence
//! lines (which may be wrapped at any width):
//!
//! ```text
//! >plasmid_a description text
//! GATTACAGATTACA
//! TGCATGCA
//! >plasmid_b
//! ACGTACGT
//! ```
//!
//! # Semantics
//!
//! - Every line is trimmed of leading/trailing whitespace before
//!   classification.
//! - The identifier is the header text after `>` up to the first space
//!   character; the rest of the header (the free-text description) is
//!   discarded and retained nowhere. A tab is not a delimiter.
//! - Data lines before the first header have no record to attach to and
//!   are dropped. This is defined input, not an error; an
//!   [`OrphanLine`](crate::ParseEvent::OrphanLine) event reports each one.
//! - A header followed immediately by another header (or end of file)
//!   yields a record with an empty sequence.
//! - Sequence content is never validated; characters are stored verbatim.
//!   The byte stream itself must be valid UTF-8.
//! - Duplicate identifiers are yielded as separate records in input order;
//!   resolution (last wins) is the store's concern.
//!
//! The scan is a two-state loop: either no record is open, or one record
//! is open with an identifier and a sequence accumulator. A header line
//! finalizes the open record and opens the next.

use crate::diagnostics::{ParseEvent, ParseObserver};
use crate::error::Result;
use crate::io::compression::{CompressedReader, DataSource};
use crate::types::FastaRecord;
use std::io::BufRead;
use std::path::Path;

/// Streaming FASTA parser
///
/// An iterator of [`FastaRecord`]s over any buffered reader. Errors are
/// I/O only (unopenable source, read failure, invalid UTF-8); no record
/// shape is rejected.
///
/// # Example
///
/// ```no_run
/// use seqfind::FastaStream;
///
/// # fn main() -> seqfind::Result<()> {
/// let stream = FastaStream::from_path("plasmids.fa.gz")?;
/// for record in stream {
///     let record = record?;
///     println!("{}: {} bp", record.id, record.sequence.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct FastaStream<'obs, R: BufRead> {
    reader: R,
    line_buffer: String,
    line_number: usize,
    finished: bool,
    /// Peek buffer holding the header that terminated the previous record
    next_header: Option<String>,
    observer: Option<&'obs mut dyn ParseObserver>,
}

impl FastaStream<'static, CompressedReader> {
    /// Create a FASTA stream from a data source
    ///
    /// Plain and gzip-compressed input both work; see
    /// [`CompressedReader`].
    pub fn new(source: DataSource) -> Result<Self> {
        let reader = CompressedReader::new(source)?;
        Ok(Self::from_reader(reader))
    }

    /// Create a FASTA stream from a local file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(DataSource::from_path(path))
    }
}

impl<R: BufRead> FastaStream<'static, R> {
    /// Create a FASTA stream from any buffered reader
    ///
    /// This is useful for testing or reading from in-memory sources.
    pub fn from_reader(reader: R) -> Self {
        FastaStream {
            reader,
            line_buffer: String::with_capacity(256),
            line_number: 0,
            finished: false,
            next_header: None,
            observer: None,
        }
    }
}

impl<'obs, R: BufRead> FastaStream<'obs, R> {
    /// Attach a [`ParseObserver`] that receives diagnostic events
    ///
    /// ```
    /// use seqfind::{EventLog, FastaStream};
    /// use std::io::Cursor;
    ///
    /// let mut log = EventLog::new();
    /// let stream = FastaStream::from_reader(Cursor::new(b">x\nAC\n"))
    ///     .with_observer(&mut log);
    /// let records: Vec<_> = stream.collect();
    /// assert_eq!(records.len(), 1);
    /// assert_eq!(log.events().len(), 3);
    /// ```
    pub fn with_observer<'b>(
        self,
        observer: &'b mut dyn ParseObserver,
    ) -> FastaStream<'b, R> {
        FastaStream {
            reader: self.reader,
            line_buffer: self.line_buffer,
            line_number: self.line_number,
            finished: self.finished,
            next_header: self.next_header,
            observer: Some(observer),
        }
    }

    fn emit(&mut self, make: impl FnOnce() -> ParseEvent) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_event(make());
        }
    }

    /// Read a single FASTA record
    fn read_record(&mut self) -> Result<Option<FastaRecord>> {
        if self.finished {
            return Ok(None);
        }

        // Find the next header: either the one peeked while scanning the
        // previous record, or the next header line in the input. Blank
        // lines and pre-header data lines are skipped on the way.
        let header = loop {
            if let Some(peeked) = self.next_header.take() {
                break peeked;
            }
            self.line_buffer.clear();
            match self.reader.read_line(&mut self.line_buffer)? {
                0 => {
                    self.finished = true;
                    return Ok(None);
                }
                _ => {
                    self.line_number += 1;
                    let line = self.line_buffer.trim();
                    if line.is_empty() {
                        continue;
                    }
                    if line.starts_with('>') {
                        break line.to_string();
                    }
                    // No open record yet, so this line has no target.
                    let line_number = self.line_number;
                    self.emit(move || ParseEvent::OrphanLine { line: line_number });
                }
            }
        };

        let id = header_id(&header).to_string();
        self.emit(|| ParseEvent::RecordStarted { id: id.clone() });

        // Accumulate data lines until the next header or EOF.
        let mut sequence = String::new();
        loop {
            self.line_buffer.clear();
            match self.reader.read_line(&mut self.line_buffer)? {
                0 => {
                    self.finished = true;
                    break;
                }
                _ => {
                    self.line_number += 1;
                    let line = self.line_buffer.trim();
                    if line.is_empty() {
                        continue;
                    }
                    if line.starts_with('>') {
                        // Start of the next record, save for the next call.
                        self.next_header = Some(line.to_string());
                        break;
                    }
                    let bytes = line.len();
                    sequence.push_str(line);
                    self.emit(move || ParseEvent::DataLine { bytes });
                }
            }
        }

        let length = sequence.len();
        self.emit(|| ParseEvent::RecordFinalized {
            id: id.clone(),
            length,
        });

        Ok(Some(FastaRecord::new(id, sequence)))
    }
}

impl<'obs, R: BufRead> Iterator for FastaStream<'obs, R> {
    type Item = Result<FastaRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Identifier portion of a trimmed header line: after `>`, up to but not
/// including the first space. No space means the whole remainder.
fn header_id(header: &str) -> &str {
    let rest = &header[1..];
    match rest.find(' ') {
        Some(pos) => &rest[..pos],
        None => rest,
    }
}
