//! # notestream
//!
//! A pure Rust library for writing note document files, plain or
//! gzip-compressed, with finalize-time line cleanup.
//!
//! A note document is serialized as text lines. The first line of every
//! fresh file is a whitespace placeholder reserved for later patching, and
//! the serializer may embed the document thumbnail as a single
//! `<preview>…</preview>` line. Neither line belongs in a finished file:
//! when a [`NoteFileWriter`] is closed it finalizes the sink and rewrites
//! the file to strip both.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use notestream::{NoteFileWriter, NoteStreamWriterExt};
//!
//! let mut writer = NoteFileWriter::create_gzip("notes.znb")?;
//! writer.write_str("<note>…</note>\n")?;
//! writer.close()?;
//! # Ok::<(), notestream::NoteError>(())
//! ```
//!
//! ## Architecture
//!
//! The library uses a trait-based design:
//!
//! - `NoteStreamWriter` - minimal write-only stream trait
//! - `NoteStreamWriterExt` - convenience overloads over the primitive
//! - `SinkMode` - plain vs gzip sink strategy, chosen at creation
//! - `NoteFileWriter` - concrete file writer with finalize-time cleanup
//!
//! ## Failure model
//!
//! Opening and closing return explicit `Result`s. Cleanup passes are
//! best-effort: a pass that cannot run leaves the file as the previous step
//! left it and records a [`Notification`] instead of failing the close.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod io;
pub mod notification;
pub mod preview;

// Re-export commonly used types
pub use error::{NoteError, Result};
pub use io::writer::{NoteFileWriter, NoteStreamWriter, NoteStreamWriterExt, SinkMode};
pub use notification::{Notification, NotificationCollection, NotificationType};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
