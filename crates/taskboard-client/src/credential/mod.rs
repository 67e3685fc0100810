pub mod atomic_writer;
pub mod cookie;
pub mod file_store;
pub mod memory_store;

pub use atomic_writer::AtomicWriter;
pub use cookie::{parse_set_cookie, CookieUpdate, CREDENTIAL_COOKIE};
pub use file_store::FileCredentialStore;
pub use memory_store::MemoryCredentialStore;

use std::fmt;
use taskboard_core::TaskboardResult;

/// Opaque bearer token issued by the backend.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn token(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Where the credential lives between calls: the cookie jar in a browser,
/// a file for the terminal host, memory in tests.
pub trait CredentialStore: Send + Sync {
    fn load(&self) -> Option<Credential>;

    fn store(&self, credential: &Credential) -> TaskboardResult<()>;

    fn clear(&self) -> TaskboardResult<()>;
}
