//! In-memory sequence store with substring search
//!
//! [`SequenceStore`] owns the identifier → sequence mapping produced by a
//! load and answers the two queries the application needs: which records
//! contain a query substring ([`search`](SequenceStore::search)), and at
//! which offsets ([`find_occurrences`](SequenceStore::find_occurrences)).
//!
//! Records keep the order they first appeared in the file, so search
//! results are reproducible across runs. A reload replaces the contents
//! wholesale; a failed reload leaves the previous contents untouched.

use crate::diagnostics::ParseObserver;
use crate::error::{Result, SeqfindError};
use crate::io::fasta::FastaStream;
use crate::operations::{has_occurrence, occurrence_ranges};
use crate::types::{FastaRecord, MatchReport, Occurrences};
use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

/// Identifier → sequence store over one loaded FASTA file
///
/// # Example
///
/// ```no_run
/// use seqfind::SequenceStore;
///
/// # fn main() -> seqfind::Result<()> {
/// let mut store = SequenceStore::new();
/// store.load("plasmids.fa")?;
///
/// let ids = store.search("GATTACA")?;
/// let report = store.find_occurrences(&ids, "GATTACA")?;
/// for (id, occurrences) in report.iter() {
///     println!("{}: {} hit(s)", id, occurrences.count);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct SequenceStore {
    /// Records in first-seen file order
    records: Vec<FastaRecord>,
    /// Identifier → position in `records`
    index: HashMap<String, usize>,
    /// Whether any load has ever succeeded
    loaded: bool,
}

impl SequenceStore {
    /// Create an empty store in the never-loaded state
    ///
    /// Searching before the first successful load fails with
    /// [`SeqfindError::NoRecordsLoaded`]. A successful load of a file with
    /// zero records is still a load: searches then return empty results.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a FASTA file, replacing the store contents
    ///
    /// Plain and gzip-compressed files both work. The file is parsed
    /// completely before anything is replaced: on any error the previous
    /// contents remain valid and unmodified. Returns the number of
    /// records stored (after duplicate resolution).
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let stream = FastaStream::from_path(path)?;
        let (records, index) = collect(stream)?;
        self.records = records;
        self.index = index;
        self.loaded = true;
        Ok(self.records.len())
    }

    /// Load a FASTA file, reporting parse diagnostics to `observer`
    ///
    /// Same contract as [`load`](SequenceStore::load).
    pub fn load_with_observer<P: AsRef<Path>>(
        &mut self,
        path: P,
        observer: &mut dyn ParseObserver,
    ) -> Result<usize> {
        let stream = FastaStream::from_path(path)?.with_observer(observer);
        let (records, index) = collect(stream)?;
        self.records = records;
        self.index = index;
        self.loaded = true;
        Ok(self.records.len())
    }

    /// Create a store directly from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut store = Self::new();
        store.load(path)?;
        Ok(store)
    }

    /// Create a store from any buffered reader
    ///
    /// This is useful for testing or loading from in-memory sources.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let (records, index) = collect(FastaStream::from_reader(reader))?;
        Ok(Self {
            records,
            index,
            loaded: true,
        })
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sequence for one identifier
    pub fn get(&self, id: &str) -> Option<&str> {
        self.index
            .get(id)
            .map(|&slot| self.records[slot].sequence.as_str())
    }

    /// Identifiers in store (file) order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.id.as_str())
    }

    /// Records in store (file) order
    pub fn records(&self) -> &[FastaRecord] {
        &self.records
    }

    /// Identifiers of records whose sequence contains `query`
    ///
    /// Matching is exact and case-sensitive; results come back in store
    /// order. No matches is a normal empty result. An empty query is
    /// rejected with [`SeqfindError::EmptyQuery`] rather than matching
    /// everything, and searching before any successful load is rejected
    /// with [`SeqfindError::NoRecordsLoaded`].
    pub fn search(&self, query: &str) -> Result<Vec<String>> {
        if query.is_empty() {
            return Err(SeqfindError::EmptyQuery);
        }
        if !self.loaded {
            return Err(SeqfindError::NoRecordsLoaded);
        }
        Ok(self
            .records
            .iter()
            .filter(|record| has_occurrence(&record.sequence, query))
            .map(|record| record.id.clone())
            .collect())
    }

    /// Offset ranges of `query` within the sequences named by `ids`
    ///
    /// For each identifier, every occurrence start is collected by a
    /// left-to-right scan that includes overlapping occurrences, as
    /// half-open `(start, end)` ranges with `end - start == query.len()`.
    /// Identifiers unknown to the store, or yielding zero occurrences,
    /// are omitted from the report rather than inserted empty. The `ids`
    /// are expected to come from [`search`](SequenceStore::search), where
    /// neither case arises.
    pub fn find_occurrences<S: AsRef<str>>(
        &self,
        ids: &[S],
        query: &str,
    ) -> Result<MatchReport> {
        if query.is_empty() {
            return Err(SeqfindError::EmptyQuery);
        }
        let mut report = MatchReport::new();
        for id in ids {
            let id = id.as_ref();
            let sequence = match self.get(id) {
                Some(sequence) => sequence,
                None => continue,
            };
            let ranges = occurrence_ranges(sequence, query);
            if ranges.is_empty() {
                continue;
            }
            report.push(id.to_string(), Occurrences::from_ranges(ranges));
        }
        Ok(report)
    }
}

/// Drain a record stream into (ordered records, id index)
///
/// A duplicate identifier overwrites the earlier record's sequence but
/// keeps its first-seen position, so iteration order stays the file's
/// first-seen order.
fn collect<R: BufRead>(
    stream: FastaStream<'_, R>,
) -> Result<(Vec<FastaRecord>, HashMap<String, usize>)> {
    let mut records: Vec<FastaRecord> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for record in stream {
        let record = record?;
        match index.get(&record.id) {
            Some(&slot) => records[slot].sequence = record.sequence,
            None => {
                index.insert(record.id.clone(), records.len());
                records.push(record);
            }
        }
    }
    Ok((records, index))
}
