use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use taskboard_core::TaskboardResult;

use super::{AtomicWriter, Credential, CredentialStore};

/// Keeps the token in a single file, the terminal counterpart of the
/// browser's cookie jar.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Option<Credential> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                (!token.is_empty()).then(|| Credential::new(token))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(
                    "Failed to read credential file {}: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    fn store(&self, credential: &Credential) -> TaskboardResult<()> {
        AtomicWriter::write_atomic(&self.path, credential.token().as_bytes())?;
        tracing::debug!("Stored credential in {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> TaskboardResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!("Removed credential file {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
