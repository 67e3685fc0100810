use std::io::Write;
use std::path::Path;
use taskboard_core::{TaskboardError, TaskboardResult};

/// Writes a file through a temp file in the same directory and a rename, so
/// readers never see a half-written token.
pub struct AtomicWriter;

impl AtomicWriter {
    pub fn write_atomic(path: &Path, data: &[u8]) -> TaskboardResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(data)?;
        temp_file.flush()?;
        temp_file
            .persist(path)
            .map_err(|e| TaskboardError::Io(e.error))?;

        tracing::debug!("Atomically wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }
}
