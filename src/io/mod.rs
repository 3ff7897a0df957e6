//! I/O module for writing note document files

pub mod writer;

pub use writer::{NoteFileWriter, NoteStreamWriter, NoteStreamWriterExt, SinkMode};
