use anyhow::Context as _;
use std::path::PathBuf;
use std::sync::Arc;
use taskboard_client::{FileCredentialStore, ReqwestTransport};
use taskboard_core::ClientConfig;
use taskboard_workflow::PageContext;

use crate::cli::Cli;
use crate::host::TerminalHost;

/// Everything a command handler needs: the page context wired to the
/// terminal host and the configured backend.
pub struct CliContext {
    pub page: PageContext,
    pub host: Arc<TerminalHost>,
    pub credential_file: PathBuf,
}

impl CliContext {
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let config = ClientConfig::load();
        let server_url = cli
            .server
            .clone()
            .unwrap_or_else(|| config.server_url.clone());
        let credential_file = cli
            .credential_file
            .clone()
            .or_else(|| config.effective_credential_file())
            .context("no credential file configured; pass --credential-file")?;

        tracing::debug!(
            "Using server {} and credential file {}",
            server_url,
            credential_file.display()
        );

        let host = Arc::new(TerminalHost::new(cli.yes));
        let page = PageContext::connect(
            Arc::new(ReqwestTransport::new(&server_url)),
            Arc::new(FileCredentialStore::new(&credential_file)),
            host.clone(),
        );

        Ok(Self {
            page,
            host,
            credential_file,
        })
    }
}
