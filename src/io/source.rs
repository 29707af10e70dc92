use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};

use super::lines::SequenceLineReader;

/// An input that can be read from the start any number of times.
///
/// The search re-reads its input once per candidate `k`, so every call to
/// [`open`](SequenceSource::open) must start an independent pass.
pub trait SequenceSource {
    type Reader: BufRead;

    fn open(&self) -> Result<SequenceLineReader<Self::Reader>>;

    /// Human-readable name used in error context and logs.
    fn describe(&self) -> String;
}

/// Sequences read from a file on disk. Re-opened on every pass.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

impl SequenceSource for FileSource {
    type Reader = BufReader<File>;

    fn open(&self) -> Result<SequenceLineReader<Self::Reader>> {
        let fh = File::open(&self.path)
            .with_context(|| format!("cannot open sequence file '{}'", self.path.display()))?;
        Ok(SequenceLineReader::new(BufReader::new(fh)))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Sequences held in memory, in the same line format as a file.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    text: Vec<u8>,
}

impl MemorySource {
    pub fn new(text: impl Into<Vec<u8>>) -> Self {
        Self { text: text.into() }
    }

    /// Builds a source with one sequence per line and no headers.
    pub fn from_sequences<I, S>(seqs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut text = Vec::new();
        for s in seqs {
            text.extend_from_slice(s.as_ref());
            text.push(b'\n');
        }
        Self { text }
    }
}

impl SequenceSource for MemorySource {
    type Reader = Cursor<Vec<u8>>;

    fn open(&self) -> Result<SequenceLineReader<Self::Reader>> {
        Ok(SequenceLineReader::new(Cursor::new(self.text.clone())))
    }

    fn describe(&self) -> String {
        format!("<memory: {} bytes>", self.text.len())
    }
}
