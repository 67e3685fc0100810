use taskboard_client::{Credential, CredentialStore};
use taskboard_core::{Location, PageHost};

/// Gate run before any page logic on pages that need a signed-in user.
pub struct SessionGuard<'a> {
    credentials: &'a dyn CredentialStore,
    host: &'a dyn PageHost,
}

impl<'a> SessionGuard<'a> {
    pub fn new(credentials: &'a dyn CredentialStore, host: &'a dyn PageHost) -> Self {
        Self { credentials, host }
    }

    /// The stored credential, or `None` after sending the host to the
    /// landing page. Never touches the network; the page's first fetch is
    /// what validates the credential.
    pub fn require(&self) -> Option<Credential> {
        let credential = self.credentials.load();
        if credential.is_none() {
            tracing::debug!("No credential stored, redirecting to landing page");
            self.host.navigate(Location::Landing);
        }
        credential
    }
}
