// libcantonese/core/src/sorted_file.rs
//
// Binary search over a sorted, delimited text file without loading it.
//
// Records are separated by `record_delim` (newline by default) and a
// record's key is everything before its first `field_delim` (comma by
// default). The file must be sorted by key under the chosen `KeyOrder`.
//
// The search works on byte offsets: looking at offset `p` reads the first
// record that starts at or after `p`, so each step costs one record read.

use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;
use tracing::trace;

/// How keys in the file are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyOrder {
    /// Plain byte order.
    #[default]
    Lexicographic,
    /// Shorter keys first, byte order among keys of equal length.
    LengthFirst,
}

impl KeyOrder {
    pub fn compare(self, a: &[u8], b: &[u8]) -> Ordering {
        match self {
            KeyOrder::Lexicographic => a.cmp(b),
            KeyOrder::LengthFirst => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
        }
    }
}

/// A sorted record file opened for lookups.
#[derive(Debug)]
pub struct SortedFile<R> {
    inner: R,
    len: u64,
    record_delim: u8,
    field_delim: u8,
    order: KeyOrder,
}

impl SortedFile<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::io("opening sorted file", e))?;
        Self::new(BufReader::new(file))
    }
}

impl<R: BufRead + Seek> SortedFile<R> {
    pub fn new(mut inner: R) -> Result<Self> {
        let len = inner
            .seek(SeekFrom::End(0))
            .map_err(|e| Error::io("measuring sorted file", e))?;
        Ok(Self {
            inner,
            len,
            record_delim: b'\n',
            field_delim: b',',
            order: KeyOrder::default(),
        })
    }

    pub fn with_delimiters(mut self, record_delim: u8, field_delim: u8) -> Self {
        self.record_delim = record_delim;
        self.field_delim = field_delim;
        self
    }

    pub fn with_order(mut self, order: KeyOrder) -> Self {
        self.order = order;
        self
    }

    fn key<'a>(&self, record: &'a [u8]) -> &'a [u8] {
        let end = record
            .iter()
            .position(|&b| b == self.field_delim)
            .unwrap_or(record.len());
        &record[..end]
    }

    /// Read the record at the current position, without its delimiter.
    fn read_record(&mut self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.inner
            .read_until(self.record_delim, &mut buf)
            .map_err(|e| Error::io("reading sorted file", e))?;
        if buf.last() == Some(&self.record_delim) {
            buf.pop();
        }
        Ok(buf)
    }

    /// The first record starting at or after `pos`, with its offset.
    fn record_from(&mut self, pos: u64) -> Result<Option<(u64, Vec<u8>)>> {
        let io = |e| Error::io("seeking in sorted file", e);
        let start = if pos == 0 {
            self.inner.seek(SeekFrom::Start(0)).map_err(io)?;
            0
        } else {
            // A record starts at `pos` only if the byte before it ends one.
            self.inner.seek(SeekFrom::Start(pos - 1)).map_err(io)?;
            let mut skipped = Vec::new();
            let n = self
                .inner
                .read_until(self.record_delim, &mut skipped)
                .map_err(|e| Error::io("reading sorted file", e))?;
            pos - 1 + n as u64
        };
        if start >= self.len {
            return Ok(None);
        }
        let record = self.read_record()?;
        Ok(Some((start, record)))
    }

    /// Byte offset of the first record whose key equals `key`.
    pub fn find(&mut self, key: &[u8]) -> Result<Option<u64>> {
        let (mut lo, mut hi) = (0u64, self.len);
        let mut candidate: Option<(u64, Vec<u8>)> = None;
        let mut steps = 0usize;

        while lo < hi {
            steps += 1;
            let mid = lo + (hi - lo) / 2;
            match self.record_from(mid)? {
                Some((start, record)) if start < hi => {
                    if self.order.compare(self.key(&record), key) == Ordering::Less {
                        lo = start + 1;
                    } else {
                        candidate = Some((start, record));
                        hi = mid;
                    }
                }
                _ => hi = mid,
            }
        }

        trace!(steps, found = candidate.is_some(), "searched sorted file");
        Ok(candidate.and_then(|(start, record)| (self.key(&record) == key).then_some(start)))
    }

    /// Every record whose key equals `key`, in file order.
    pub fn records(&mut self, key: &[u8]) -> Result<Vec<Vec<u8>>> {
        let Some(start) = self.find(key)? else {
            return Ok(Vec::new());
        };
        self.inner
            .seek(SeekFrom::Start(start))
            .map_err(|e| Error::io("seeking in sorted file", e))?;

        let mut out = Vec::new();
        let mut pos = start;
        while pos < self.len {
            let record = self.read_record()?;
            pos += record.len() as u64 + 1;
            if self.key(&record) != key {
                break;
            }
            out.push(record);
        }
        Ok(out)
    }
}
