use parking_lot::RwLock;
use taskboard_core::TaskboardResult;

use super::{Credential, CredentialStore};

#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    credential: RwLock<Option<Credential>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            credential: RwLock::new(Some(Credential::new(token))),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Option<Credential> {
        self.credential.read().clone()
    }

    fn store(&self, credential: &Credential) -> TaskboardResult<()> {
        *self.credential.write() = Some(credential.clone());
        Ok(())
    }

    fn clear(&self) -> TaskboardResult<()> {
        *self.credential.write() = None;
        Ok(())
    }
}
