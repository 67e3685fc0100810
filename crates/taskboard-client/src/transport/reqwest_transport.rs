use async_trait::async_trait;
use std::sync::Arc;

use crate::traits::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};

/// Transport backed by a shared `reqwest::Client`.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: Arc<str>,
}

impl ReqwestTransport {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: Arc::from(base_url.trim_end_matches('/')),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[tracing::instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), self.url(&request.path));

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = &request.body {
            let bytes =
                serde_json::to_vec(body).map_err(|e| TransportError::Encode(e.to_string()))?;
            builder = builder.body(bytes);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?
            .to_vec();

        tracing::debug!(status, bytes = body.len(), "response received");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let transport = ReqwestTransport::new("http://127.0.0.1:5000/");
        assert_eq!(transport.base_url(), "http://127.0.0.1:5000");
        assert_eq!(
            transport.url("/user_boards"),
            "http://127.0.0.1:5000/user_boards"
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_request_error() {
        // Port 9 on loopback is the discard port; nothing listens there in CI.
        let transport = ReqwestTransport::new("http://127.0.0.1:9");
        let result = transport
            .send(HttpRequest::new(HttpMethod::Get, "/user_boards"))
            .await;
        assert!(matches!(result, Err(TransportError::Request(_))));
    }
}
