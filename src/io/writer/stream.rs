//! Abstract write-only stream interface

use crate::error::Result;

/// Trait for pushing serialized note content to a backing medium.
///
/// [`write_bytes`](Self::write_bytes) is the primitive; the convenience
/// methods of [`NoteStreamWriterExt`] compute lengths and delegate to it.
/// Implementations accept an empty buffer without error unless they document
/// a stricter precondition.
pub trait NoteStreamWriter {
    /// Write a raw byte buffer.
    fn write_bytes(&mut self, data: &[u8]) -> Result<()>;

    /// Flush buffered output to the backing medium.
    fn flush(&mut self) -> Result<()>;
}

/// Extension trait for convenient writing operations
pub trait NoteStreamWriterExt: NoteStreamWriter {
    /// Write a string slice.
    fn write_str(&mut self, s: &str) -> Result<()> {
        self.write_bytes(s.as_bytes())
    }

    /// Write a string slice followed by a `\n` terminator.
    fn write_line(&mut self, s: &str) -> Result<()> {
        if !s.is_empty() {
            self.write_bytes(s.as_bytes())?;
        }
        self.write_bytes(b"\n")
    }
}

// Auto-implement the extension trait for all stream writers
impl<T: NoteStreamWriter> NoteStreamWriterExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    struct VecStream(Vec<u8>);

    impl NoteStreamWriter for VecStream {
        fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
            self.0.extend_from_slice(data);
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_str_delegates_to_primitive() {
        let mut s = VecStream(Vec::new());
        s.write_str("hello").unwrap();
        assert_eq!(s.0, b"hello");
    }

    #[test]
    fn test_write_line_appends_newline() {
        let mut s = VecStream(Vec::new());
        s.write_line("hello").unwrap();
        s.write_line("world").unwrap();
        assert_eq!(s.0, b"hello\nworld\n");
    }

    #[test]
    fn test_write_line_empty_is_bare_newline() {
        let mut s = VecStream(Vec::new());
        s.write_line("").unwrap();
        assert_eq!(s.0, b"\n");
    }
}
