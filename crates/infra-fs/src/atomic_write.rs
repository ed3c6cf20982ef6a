// Whole-file atomic writes

use deq_core::error::Result;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Serialize `value` as pretty JSON and replace `path` with it.
///
/// The document is written to a temp file in the target directory and renamed
/// over `path`, so readers see either the old or the new document, never a
/// partial one. The parent directory must already exist.
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    // Temp files are created 0600; keep the mode of the file being replaced
    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    serde_json::to_writer_pretty(&mut tmp, value)?;
    tmp.write_all(b"\n")?;
    tmp.as_file().sync_all()?;

    // Same directory, so the rename stays on one filesystem
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
