//! Tagged file sink: plain or gzip-compressed output.
//!
//! The encoding is a constructor-time choice; both variants share the same
//! write/finish contract, so the writer and the rewrite passes never branch
//! on it beyond construction.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::{NoteError, Result};

/// Output encoding selected when a writer is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkMode {
    /// Bytes are written to the file as-is.
    Plain,
    /// Bytes are gzip-compressed on the way to the file.
    Gzip,
}

/// A file handle opened in truncate mode, wrapped in the encoder the mode
/// calls for.
pub(crate) enum FileSink {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl FileSink {
    /// Open `path` for writing, truncating any existing content.
    pub(crate) fn create(path: &Path, mode: SinkMode) -> Result<Self> {
        let file = File::create(path).map_err(|source| NoteError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let buf = BufWriter::new(file);
        Ok(match mode {
            SinkMode::Plain => FileSink::Plain(buf),
            SinkMode::Gzip => FileSink::Gzip(GzEncoder::new(buf, Compression::default())),
        })
    }

    /// Flush buffers and write the stream trailer, releasing the handle.
    pub(crate) fn finish(self) -> io::Result<()> {
        match self {
            FileSink::Plain(mut w) => w.flush(),
            FileSink::Gzip(w) => w.finish().and_then(|mut inner| inner.flush()),
        }
    }
}

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileSink::Plain(w) => w.write(buf),
            FileSink::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileSink::Plain(w) => w.flush(),
            FileSink::Gzip(w) => w.flush(),
        }
    }
}
