//! Error types for the notestream library

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for notestream operations
#[derive(Debug, Error)]
pub enum NoteError {
    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A file could not be opened for reading or writing
    #[error("error opening file \"{}\": {source}", .path.display())]
    Open {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying system error
        #[source]
        source: io::Error,
    },

    /// The sink could not be finalized on close
    #[error("error occurred while closing file \"{}\": {source}", .path.display())]
    Close {
        /// Path of the file being finalized
        path: PathBuf,
        /// Underlying system error
        #[source]
        source: io::Error,
    },

    /// Write attempted on a writer that has already been closed
    #[error("stream is closed")]
    StreamClosed,
}

/// Result type alias for notestream operations
pub type Result<T> = std::result::Result<T, NoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_error_display() {
        let err = NoteError::Open {
            path: PathBuf::from("/tmp/out.znb"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("error opening file"));
        assert!(msg.contains("/tmp/out.znb"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_close_error_display() {
        let err = NoteError::Close {
            path: PathBuf::from("out.znb"),
            source: io::Error::new(io::ErrorKind::Other, "disk full"),
        };
        let msg = err.to_string();
        assert!(msg.contains("while closing file"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: NoteError = io_err.into();
        assert!(matches!(err, NoteError::Io(_)));
    }
}
