//! Compressed input support
//!
//! Sequence files routinely ship gzip-compressed (`.fa.gz`), so the store
//! accepts both. [`CompressedReader`] sniffs the gzip magic bytes on the
//! opened stream and decompresses transparently; everything upstream reads
//! plain text and never learns how the bytes were stored on disk.

use crate::error::Result;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// Data source abstraction for sequence input
///
/// Local files are the only variant today; the store and parser are written
/// against this enum so further sources slot in without touching them.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// Local file path
    Local(PathBuf),
}

impl DataSource {
    /// Create a local file data source
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        DataSource::Local(path.as_ref().to_path_buf())
    }

    /// Open the data source and return a buffered reader
    pub fn open(&self) -> Result<Box<dyn BufRead + Send>> {
        match self {
            DataSource::Local(path) => {
                let file = File::open(path)?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

/// Reader that transparently decompresses gzip input
///
/// Detection is by content (gzip magic bytes `[31, 139]`), not by file
/// extension, so a misnamed `.fa` that is really gzip still parses.
/// Multi-member gzip streams (including bgzip output) decompress as one
/// concatenated stream.
pub struct CompressedReader {
    inner: Box<dyn BufRead + Send>,
}

impl CompressedReader {
    /// Create a new compressed reader from a data source
    pub fn new(source: DataSource) -> Result<Self> {
        let mut reader = source.open()?;

        // Peek at the first two bytes to detect compression
        let first_bytes = {
            let peeked = reader.fill_buf()?;
            if peeked.len() >= 2 {
                [peeked[0], peeked[1]]
            } else if peeked.len() == 1 {
                [peeked[0], 0]
            } else {
                [0, 0]
            }
        };

        // Gzip magic bytes (ID1=31, ID2=139)
        let is_gzipped = first_bytes[0] == 31 && first_bytes[1] == 139;

        if is_gzipped {
            let decoder = MultiGzDecoder::new(reader);
            Ok(Self {
                inner: Box::new(BufReader::new(decoder)),
            })
        } else {
            Ok(Self { inner: reader })
        }
    }

    /// Get the inner buffered reader
    pub fn into_inner(self) -> Box<dyn BufRead + Send> {
        self.inner
    }
}

impl Read for CompressedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl BufRead for CompressedReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn write_temp(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_plain_text_passes_through() {
        let file = write_temp(b">seq1\nACGT\n");

        let mut reader = CompressedReader::new(DataSource::from_path(file.path())).unwrap();
        let mut contents = String::new();
        reader.read_to_string(&mut contents).unwrap();

        assert_eq!(contents, ">seq1\nACGT\n");
    }

    #[test]
    fn test_gzip_decompresses() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b">seq1\nACGT\n").unwrap();
        let compressed = encoder.finish().unwrap();
        let file = write_temp(&compressed);

        let mut reader = CompressedReader::new(DataSource::from_path(file.path())).unwrap();
        let mut contents = String::new();
        reader.read_to_string(&mut contents).unwrap();

        assert_eq!(contents, ">seq1\nACGT\n");
    }

    #[test]
    fn test_empty_file() {
        let file = write_temp(b"");

        let mut reader = CompressedReader::new(DataSource::from_path(file.path())).unwrap();
        let mut contents = String::new();
        reader.read_to_string(&mut contents).unwrap();

        assert!(contents.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = DataSource::from_path("does/not/exist.fa");
        assert!(CompressedReader::new(source).is_err());
    }
}
