//! Filesystem glue: output directories and JSON documents.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::foundation::error::{SpriteError, SpriteResult};

/// Create `dir` and any missing parents.
pub fn make_dir(dir: &Path) -> SpriteResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| SpriteError::io(dir, e))
}

/// Remove `dir` and everything below it; a missing directory is not an error.
pub fn clear_dir(dir: &Path) -> SpriteResult<()> {
    match std::fs::remove_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(SpriteError::io(dir, e)),
    }
}

/// Create `path` for buffered writing.
pub fn create_file(path: &Path) -> SpriteResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| SpriteError::io(path, e))?;
    Ok(BufWriter::with_capacity(1 << 20, file))
}

/// Serialize `value` as JSON into `path`.
pub fn save_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> SpriteResult<()> {
    let mut writer = create_file(path)?;
    serde_json::to_writer(&mut writer, value)
        .map_err(|e| SpriteError::serde(format!("write json '{}': {e}", path.display())))?;
    writer.flush().map_err(|e| SpriteError::io(path, e))?;
    tracing::debug!(path = %path.display(), "wrote json");
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/output.rs"]
mod tests;
