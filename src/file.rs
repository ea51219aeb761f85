// src/file.rs

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::Path,
};

/// Create `dir` (and parents) if missing.
pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!(
            "path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Append one line to `path`, creating parent directories first.
///
/// Line plus terminator go out in a single `write_all` on a file opened in
/// append mode, so an overlapping scheduled run cannot interleave inside it.
pub fn append_line(path: &Path, line: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let mut buf = String::with_capacity(line.len() + 1);
    buf.push_str(line);
    buf.push('\n');

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(buf.as_bytes())?;
    file.flush()
}
