//! Atomic file writes
//!
//! Content goes to a temporary file in the target directory first and is
//! renamed over the destination, so readers never observe a partial file.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::DeplockResult;

/// Write `content` to `path` atomically, creating parent directories
pub fn write_atomic(path: &Path, content: &[u8]) -> DeplockResult<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn write_atomic_new_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/lock.json");

        write_atomic(&path, b"{}\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}\n");
    }

    #[test]
    fn write_atomic_overwrite_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lock.json");

        fs::write(&path, "Original").unwrap();
        write_atomic(&path, b"Replaced").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Replaced");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
