//! Shared test utilities for notestream integration tests.

#![allow(dead_code)]

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

/// Resolve path into the `test_output/` directory, creating it if needed.
pub fn test_output_path(filename: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_output");
    let _ = fs::create_dir_all(&dir);
    dir.join(filename)
}

/// Read a finished plain file back as a string.
pub fn read_plain(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("Cannot read {}: {e}", path.display()))
}

/// Read a finished gzip file back as a decoded string.
pub fn read_gzip(path: &Path) -> String {
    let file = fs::File::open(path)
        .unwrap_or_else(|e| panic!("Cannot open {}: {e}", path.display()));
    let mut s = String::new();
    GzDecoder::new(file)
        .read_to_string(&mut s)
        .unwrap_or_else(|e| panic!("Cannot decode {}: {e}", path.display()));
    s
}

/// The `.tmp` sibling a rewrite pass would use for `path`.
pub fn temp_sibling(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(".tmp");
    PathBuf::from(os)
}
