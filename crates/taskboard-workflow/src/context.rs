use std::sync::Arc;
use taskboard_client::{CredentialStore, Gateway, Transport};
use taskboard_core::PageHost;
use taskboard_domain::TaskboardApi;

use crate::session::SessionGuard;

/// What every page needs: the backend, the host, and the credential store.
#[derive(Clone)]
pub struct PageContext {
    pub api: Arc<dyn TaskboardApi>,
    pub host: Arc<dyn PageHost>,
    pub credentials: Arc<dyn CredentialStore>,
}

impl PageContext {
    pub fn new(
        api: Arc<dyn TaskboardApi>,
        host: Arc<dyn PageHost>,
        credentials: Arc<dyn CredentialStore>,
    ) -> Self {
        Self {
            api,
            host,
            credentials,
        }
    }

    /// Wire a gateway over `transport` that shares the host and the store.
    pub fn connect(
        transport: Arc<dyn Transport>,
        credentials: Arc<dyn CredentialStore>,
        host: Arc<dyn PageHost>,
    ) -> Self {
        let gateway = Gateway::new(transport, credentials.clone(), host.clone());
        Self::new(Arc::new(gateway), host, credentials)
    }

    pub fn session(&self) -> SessionGuard<'_> {
        SessionGuard::new(self.credentials.as_ref(), self.host.as_ref())
    }

    pub fn host(&self) -> &dyn PageHost {
        self.host.as_ref()
    }
}
