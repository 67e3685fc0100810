use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use taskboard_core::{PageHost, TaskboardError, TaskboardResult};

use crate::credential::{parse_set_cookie, CookieUpdate, CredentialStore};
use crate::feedback::OverlayGuard;
use crate::traits::{HttpMethod, HttpRequest, HttpResponse, Transport};

pub const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";

#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
    /// Send without the stored credential, e.g. for login.
    pub anonymous: bool,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.headers.push((name.into(), value.to_string()));
        self
    }

    pub fn anonymous(mut self) -> Self {
        self.anonymous = true;
        self
    }

    pub fn json<T: serde::Serialize>(mut self, body: &T) -> TaskboardResult<Self> {
        let value =
            serde_json::to_value(body).map_err(|e| TaskboardError::Serialization(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }
}

/// A successful (200) answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub json: Option<Value>,
}

impl Reply {
    pub fn decode<T: DeserializeOwned>(self) -> TaskboardResult<T> {
        let json = self.json.ok_or_else(|| {
            TaskboardError::Serialization("expected a JSON body, got none".to_string())
        })?;
        serde_json::from_value(json).map_err(|e| TaskboardError::Serialization(e.to_string()))
    }
}

/// Issues authenticated calls to the backend and maps the answer onto
/// `TaskboardError`.
///
/// Every call shows the host's busy overlay until the transport settles,
/// attaches the stored credential as a bearer token, and applies any
/// `x-auth` cookie the backend sends back. A 401 drops the stored credential.
#[derive(Clone)]
pub struct Gateway {
    transport: Arc<dyn Transport>,
    credentials: Arc<dyn CredentialStore>,
    host: Arc<dyn PageHost>,
}

impl Gateway {
    pub fn new(
        transport: Arc<dyn Transport>,
        credentials: Arc<dyn CredentialStore>,
        host: Arc<dyn PageHost>,
    ) -> Self {
        Self {
            transport,
            credentials,
            host,
        }
    }

    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    pub fn host(&self) -> &Arc<dyn PageHost> {
        &self.host
    }

    #[tracing::instrument(skip(self, options))]
    pub async fn call(
        &self,
        method: HttpMethod,
        path: &str,
        options: CallOptions,
    ) -> TaskboardResult<Reply> {
        let request = self.build_request(method, path, options);

        let result = {
            let _overlay = OverlayGuard::show(self.host.as_ref());
            self.transport.send(request).await
        };

        let response = result.map_err(|e| {
            tracing::warn!("{} {} failed: {}", method, path, e);
            TaskboardError::OperationFailed(e.to_string())
        })?;

        self.apply_cookies(&response);
        tracing::debug!("{} {} answered {}", method, path, response.status);
        self.classify(method, path, response)
    }

    fn build_request(&self, method: HttpMethod, path: &str, options: CallOptions) -> HttpRequest {
        let mut request = HttpRequest::new(method, path);
        if let Some(credential) = self.credentials.load().filter(|_| !options.anonymous) {
            request
                .headers
                .push(("Authorization".to_string(), credential.bearer()));
        }
        if options.body.is_some() {
            request
                .headers
                .push(("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()));
        }
        request.headers.extend(options.headers);
        request.body = options.body;
        request
    }

    fn apply_cookies(&self, response: &HttpResponse) {
        for update in response.header_values("set-cookie").filter_map(parse_set_cookie) {
            let outcome = match update {
                CookieUpdate::Set(credential) => self.credentials.store(&credential),
                CookieUpdate::Clear => self.credentials.clear(),
            };
            if let Err(e) = outcome {
                tracing::warn!("Failed to update stored credential: {}", e);
            }
        }
    }

    fn classify(
        &self,
        method: HttpMethod,
        path: &str,
        response: HttpResponse,
    ) -> TaskboardResult<Reply> {
        let json: Option<Value> = if response.body.is_empty() {
            None
        } else {
            serde_json::from_slice(&response.body).ok()
        };

        match response.status {
            200 => Ok(Reply {
                status: response.status,
                json,
            }),
            400 => {
                let message = json
                    .as_ref()
                    .and_then(|v| v.get("message"))
                    .and_then(Value::as_str)
                    .map(str::to_string);
                tracing::warn!("{} {} rejected by backend", method, path);
                Err(TaskboardError::ValidationRejected { message })
            }
            401 => {
                tracing::warn!("{} {} answered 401, dropping credential", method, path);
                if let Err(e) = self.credentials.clear() {
                    tracing::warn!("Failed to clear stored credential: {}", e);
                }
                Err(TaskboardError::AuthRejected)
            }
            status => {
                tracing::warn!("{} {} answered {}", method, path, status);
                Err(TaskboardError::OperationFailed(format!(
                    "server answered {}",
                    status
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::{Credential, MemoryCredentialStore};
    use crate::testing::{HostEvent, RecordingHost};
    use crate::traits::{MockTransport, TransportError};
    use serde_json::json;

    fn gateway_with(
        transport: MockTransport,
        credentials: Arc<MemoryCredentialStore>,
    ) -> (Gateway, Arc<RecordingHost>) {
        let host = Arc::new(RecordingHost::new());
        let gateway = Gateway::new(Arc::new(transport), credentials, host.clone());
        (gateway, host)
    }

    #[tokio::test]
    async fn test_bearer_and_content_type_attached() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                req.header("authorization") == Some("Bearer token-1")
                    && req.header("content-type") == Some(JSON_CONTENT_TYPE)
                    && req.header("BoardId") == Some("7")
            })
            .times(1)
            .returning(|_| Ok(HttpResponse::new(200)));

        let credentials = Arc::new(MemoryCredentialStore::with_token("token-1"));
        let (gateway, _) = gateway_with(transport, credentials);
        let options = CallOptions::new()
            .header("BoardId", 7)
            .json(&json!({"title": "t"}))
            .unwrap();
        let reply = gateway
            .call(HttpMethod::Post, "/create_task", options)
            .await
            .unwrap();
        assert_eq!(reply.status, 200);
        assert_eq!(reply.json, None);
    }

    #[tokio::test]
    async fn test_no_bearer_or_content_type_without_credential_and_body() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| req.headers.is_empty() && req.body.is_none())
            .times(1)
            .returning(|_| Ok(HttpResponse::new(200).with_json(&json!([]))));

        let (gateway, _) = gateway_with(transport, Arc::new(MemoryCredentialStore::new()));
        let reply = gateway
            .call(HttpMethod::Get, "/user_boards", CallOptions::new())
            .await
            .unwrap();
        assert_eq!(reply.json, Some(json!([])));
    }

    #[tokio::test]
    async fn test_400_carries_backend_message() {
        let mut transport = MockTransport::new();
        transport.expect_send().returning(|_| {
            Ok(HttpResponse::new(400).with_json(&json!({"message": "Email already in use"})))
        });

        let (gateway, _) = gateway_with(transport, Arc::new(MemoryCredentialStore::new()));
        let err = gateway
            .call(HttpMethod::Put, "/change_email", CallOptions::new())
            .await
            .unwrap_err();
        assert_eq!(err.backend_message(), Some("Email already in use"));
    }

    #[tokio::test]
    async fn test_400_without_json_has_no_message() {
        let mut transport = MockTransport::new();
        transport.expect_send().returning(|_| {
            Ok(HttpResponse {
                status: 400,
                headers: Vec::new(),
                body: b"Bad Request".to_vec(),
            })
        });

        let (gateway, _) = gateway_with(transport, Arc::new(MemoryCredentialStore::new()));
        let err = gateway
            .call(HttpMethod::Post, "/create_user", CallOptions::new())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            TaskboardError::ValidationRejected { message: None }
        ));
    }

    #[tokio::test]
    async fn test_401_clears_credential() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .returning(|_| Ok(HttpResponse::new(401)));

        let credentials = Arc::new(MemoryCredentialStore::with_token("expired"));
        let (gateway, _) = gateway_with(transport, credentials.clone());
        let err = gateway
            .call(HttpMethod::Get, "/get_user", CallOptions::new())
            .await
            .unwrap_err();
        assert!(err.is_auth_rejected());
        assert!(credentials.load().is_none());
    }

    #[tokio::test]
    async fn test_other_statuses_are_operation_failures() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .returning(|_| Ok(HttpResponse::new(500)));

        let (gateway, _) = gateway_with(transport, Arc::new(MemoryCredentialStore::new()));
        let err = gateway
            .call(HttpMethod::Get, "/user_boards", CallOptions::new())
            .await
            .unwrap_err();
        assert!(matches!(err, TaskboardError::OperationFailed(_)));
    }

    #[tokio::test]
    async fn test_overlay_hidden_after_transport_failure() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .returning(|_| Err(TransportError::Request("connection refused".to_string())));

        let (gateway, host) = gateway_with(transport, Arc::new(MemoryCredentialStore::new()));
        let err = gateway
            .call(HttpMethod::Get, "/user_boards", CallOptions::new())
            .await
            .unwrap_err();
        assert!(matches!(err, TaskboardError::OperationFailed(_)));
        assert_eq!(
            host.events(),
            vec![HostEvent::OverlayShown, HostEvent::OverlayHidden]
        );
    }

    #[tokio::test]
    async fn test_set_cookie_rotates_credential() {
        let mut transport = MockTransport::new();
        transport.expect_send().returning(|_| {
            Ok(HttpResponse::new(200)
                .with_header("Set-Cookie", "x-auth=fresh; Max-Age=86400; Path=/"))
        });

        let credentials = Arc::new(MemoryCredentialStore::with_token("old"));
        let (gateway, _) = gateway_with(transport, credentials.clone());
        gateway
            .call(HttpMethod::Post, "/authorization", CallOptions::new())
            .await
            .unwrap();
        assert_eq!(credentials.load(), Some(Credential::new("fresh")));
    }

    #[test]
    fn test_decode_requires_body() {
        let reply = Reply {
            status: 200,
            json: None,
        };
        assert!(matches!(
            reply.decode::<Vec<i32>>(),
            Err(TaskboardError::Serialization(_))
        ));
    }
}
