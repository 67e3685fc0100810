pub mod api;
pub mod credential;
pub mod feedback;
pub mod gateway;
pub mod traits;
pub mod transport;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use api::BOARD_ID_HEADER;
pub use credential::{
    Credential, CredentialStore, FileCredentialStore, MemoryCredentialStore, CREDENTIAL_COOKIE,
};
pub use feedback::OverlayGuard;
pub use gateway::{CallOptions, Gateway, Reply, JSON_CONTENT_TYPE};
pub use traits::*;
pub use transport::ReqwestTransport;
