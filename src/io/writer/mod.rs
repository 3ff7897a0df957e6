//! Note document file writer module

mod rewrite;
mod sink;
mod stream;

pub use sink::SinkMode;
pub use stream::{NoteStreamWriter, NoteStreamWriterExt};

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{NoteError, Result};
use crate::notification::{NotificationCollection, NotificationType};
use sink::FileSink;

/// First line emitted into every fresh file, reserved so the enclosing
/// serializer can patch it after the fact. Stripped again by
/// [`NoteFileWriter::close`].
pub const PLACEHOLDER_LINE: &str = "                       \n";

/// Write-only file writer that cleans up its output when closed.
///
/// Opens the destination in truncate mode, immediately emits one whitespace
/// placeholder line, and appends everything written through
/// [`NoteStreamWriter`]. Closing finalizes the sink and rewrites the
/// finished file twice: once to drop the placeholder line, once to drop an
/// embedded preview line if one exists.
pub struct NoteFileWriter {
    path: PathBuf,
    mode: SinkMode,
    sink: Option<FileSink>,
    notifications: NotificationCollection,
}

impl NoteFileWriter {
    /// Create a writer over `path` with the given sink mode.
    ///
    /// The destination is truncated and the placeholder line is written
    /// immediately, so the file is non-empty even before the first
    /// [`write_bytes`](NoteStreamWriter::write_bytes) call.
    pub fn create<P: AsRef<Path>>(path: P, mode: SinkMode) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut sink = FileSink::create(&path, mode)?;
        sink.write_all(PLACEHOLDER_LINE.as_bytes())?;
        Ok(Self {
            path,
            mode,
            sink: Some(sink),
            notifications: NotificationCollection::new(),
        })
    }

    /// Create a plain (uncompressed) writer over `path`.
    pub fn create_plain<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::create(path, SinkMode::Plain)
    }

    /// Create a gzip-compressed writer over `path`.
    pub fn create_gzip<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::create(path, SinkMode::Gzip)
    }

    /// Destination path this writer was created over.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sink mode this writer was created with.
    pub fn mode(&self) -> SinkMode {
        self.mode
    }

    /// Whether [`close`](Self::close) has already run.
    pub fn is_closed(&self) -> bool {
        self.sink.is_none()
    }

    /// Diagnostics recorded by the cleanup passes.
    ///
    /// A cleanup pass that cannot run leaves the file as the previous step
    /// left it; that degradation is deliberately not part of `close()`'s
    /// result. Inspect this after closing to detect it.
    pub fn notifications(&self) -> &NotificationCollection {
        &self.notifications
    }

    /// Finalize the file.
    ///
    /// Flushes and releases the sink, then strips the placeholder line and
    /// any embedded preview line from the finished file. Idempotent: a
    /// second call is a no-op. Returns `Err` only when the sink itself
    /// cannot be finalized; both cleanup passes are attempted regardless,
    /// and their failures are recorded as
    /// [`notifications`](Self::notifications).
    pub fn close(&mut self) -> Result<()> {
        let Some(sink) = self.sink.take() else {
            return Ok(());
        };

        let finished = sink.finish();

        if let Err(e) = rewrite::strip_leading_line(&self.path, self.mode) {
            self.notifications.notify(
                NotificationType::Warning,
                format!(
                    "placeholder line not removed from \"{}\": {e}",
                    self.path.display()
                ),
            );
        }
        if let Err(e) = rewrite::strip_preview_line(&self.path, self.mode) {
            self.notifications.notify(
                NotificationType::Warning,
                format!(
                    "preview line not removed from \"{}\": {e}",
                    self.path.display()
                ),
            );
        }

        finished.map_err(|source| NoteError::Close {
            path: self.path.clone(),
            source,
        })
    }
}

impl NoteStreamWriter for NoteFileWriter {
    /// Append bytes through the sink.
    ///
    /// Precondition: `data` is nonempty and the writer is not closed.
    /// Violations are programming errors, fatal in debug builds; release
    /// builds degrade to a no-op / [`NoteError::StreamClosed`].
    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        debug_assert!(!data.is_empty(), "write_bytes called with an empty buffer");
        debug_assert!(self.sink.is_some(), "write_bytes called on a closed writer");
        match self.sink.as_mut() {
            Some(sink) => {
                sink.write_all(data)?;
                Ok(())
            }
            None => Err(NoteError::StreamClosed),
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self.sink.as_mut() {
            Some(sink) => {
                sink.flush()?;
                Ok(())
            }
            None => Err(NoteError::StreamClosed),
        }
    }
}

impl Drop for NoteFileWriter {
    fn drop(&mut self) {
        if self.sink.is_some() {
            let _ = self.close();
        }
    }
}
