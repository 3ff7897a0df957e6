//! Finalize-time rewrite passes.
//!
//! A finished file still carries the placeholder line emitted at open time
//! and possibly one embedded preview line. Deleting a line from a byte
//! stream requires a full rewrite: each pass reads the original, writes the
//! surviving content to a `.tmp` sibling, and swaps the copy over the
//! original. The passes run sequentially inside `close()`, so the shared
//! temp suffix cannot collide.
//!
//! Failure policy: a pass that cannot run returns `Err`, leaves the original
//! file as the previous step left it, and never leaves the temp file behind.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use crate::error::{NoteError, Result};
use crate::preview::is_preview_line;

use super::sink::{FileSink, SinkMode};

/// Suffix appended to the destination path for a pass's scratch copy.
const TEMP_SUFFIX: &str = ".tmp";

/// The `.tmp` sibling of `path`.
fn temp_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(TEMP_SUFFIX);
    PathBuf::from(os)
}

/// Open the finished file for reading, decoding if the sink compressed it.
///
/// Both passes operate on the logical document lines, so a gzip-written file
/// is read through a decoder and its filtered copy is re-encoded.
fn open_source(path: &Path, mode: SinkMode) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|source| NoteError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(match mode {
        SinkMode::Plain => Box::new(BufReader::new(file)),
        SinkMode::Gzip => Box::new(BufReader::new(GzDecoder::new(file))),
    })
}

/// Swap the filtered copy over the original.
///
/// A plain rename replaces atomically where the platform allows it; the
/// remove-then-rename fallback covers platforms where renaming onto an
/// existing file fails.
fn replace_original(path: &Path, tmp: &Path) -> io::Result<()> {
    match fs::rename(tmp, path) {
        Ok(()) => Ok(()),
        Err(_) => {
            fs::remove_file(path)?;
            fs::rename(tmp, path)
        }
    }
}

/// Remove exactly the first line of the file at `path`.
///
/// Discards everything up to and including the first `\n` (the whole content
/// if there is none) and copies the remainder byte-for-byte. An empty file
/// stays empty.
pub(crate) fn strip_leading_line(path: &Path, mode: SinkMode) -> Result<()> {
    let tmp = temp_path(path);
    let mut source = open_source(path, mode)?;
    let out = FileSink::create(&tmp, mode)?;

    if let Err(e) = copy_tail(source.as_mut(), out) {
        let _ = fs::remove_file(&tmp);
        return Err(NoteError::Io(e));
    }
    drop(source);
    if let Err(e) = replace_original(path, &tmp) {
        let _ = fs::remove_file(&tmp);
        return Err(NoteError::Io(e));
    }
    Ok(())
}

/// Discard the first line of `source`, then copy the rest into `out`.
fn copy_tail(source: &mut dyn BufRead, mut out: FileSink) -> io::Result<()> {
    let mut first = Vec::new();
    source.read_until(b'\n', &mut first)?;
    io::copy(source, &mut out)?;
    out.finish()
}

/// Remove the embedded preview line from the file at `path`, if present.
///
/// Returns whether a preview line was found. When none is, the original file
/// is left byte-identical and the scratch copy is discarded, skipping the
/// pointless replacement.
pub(crate) fn strip_preview_line(path: &Path, mode: SinkMode) -> Result<bool> {
    let tmp = temp_path(path);
    let mut source = open_source(path, mode)?;
    let out = FileSink::create(&tmp, mode)?;

    match filter_preview(source.as_mut(), out) {
        Ok(false) => {
            let _ = fs::remove_file(&tmp);
            Ok(false)
        }
        Ok(true) => {
            drop(source);
            if let Err(e) = replace_original(path, &tmp) {
                let _ = fs::remove_file(&tmp);
                return Err(NoteError::Io(e));
            }
            Ok(true)
        }
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            Err(NoteError::Io(e))
        }
    }
}

/// Copy every line of `source` into `out`, skipping preview lines.
///
/// Lines are compared without their `\n` terminator (`\r` is part of the
/// line) and written back with exactly one `\n`, so an unterminated final
/// line gains a terminator, but only when a replacement happens at all.
fn filter_preview(source: &mut dyn BufRead, mut out: FileSink) -> io::Result<bool> {
    let mut found = false;
    let mut line = Vec::new();
    loop {
        line.clear();
        if source.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        let content = line.strip_suffix(b"\n").unwrap_or(&line);
        if is_preview_line(content) {
            found = true;
            continue;
        }
        out.write_all(content)?;
        out.write_all(b"\n")?;
    }
    out.finish()?;
    Ok(found)
}
