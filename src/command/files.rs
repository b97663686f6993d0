//! File I/O used by the file commands and the save key.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Read a whole file as text
pub fn read_file(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Write `contents` to `path`, creating the file or truncating it first
pub fn write_file(path: &Path, contents: &str) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(contents.as_bytes())?;
    file.flush()
}

/// Overwrite an existing file; fails if `path` does not exist
pub fn overwrite_file(path: &Path, contents: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).open(path)?;
    file.write_all(contents.as_bytes())?;
    file.set_len(contents.len() as u64)?;
    file.flush()
}
