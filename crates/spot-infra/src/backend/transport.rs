use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{CONTENT_TYPE, LOCATION};
use reqwest::Url;
use spot_core::ports::{BackendError, UploadError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectMethod {
    Put,
    Post,
}

/// One object write, already laid out for a specific service.
#[derive(Debug, Clone)]
pub struct ObjectRequest {
    pub method: ObjectMethod,
    pub url: Url,
    pub bearer_token: Option<String>,
    pub content_type: String,
    pub body: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectResponse {
    pub status: u16,
    pub location: Option<String>,
    pub body: String,
}

impl ObjectResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends object writes. Any HTTP status is a successful send; interpreting
/// the status is the backend's job.
#[async_trait]
pub trait ObjectTransport: Send + Sync {
    async fn send(&self, request: ObjectRequest) -> Result<ObjectResponse, UploadError>;
}

/// Opens a transport session on `connect()`; the session is dropped on
/// `disconnect()`.
#[async_trait]
pub trait TransportConnector: Send + Sync {
    async fn open(&self) -> Result<Arc<dyn ObjectTransport>, BackendError>;
}

/// Connector producing `reqwest` sessions.
pub struct ReqwestConnector {
    timeout: Duration,
}

impl ReqwestConnector {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for ReqwestConnector {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}

#[async_trait]
impl TransportConnector for ReqwestConnector {
    async fn open(&self) -> Result<Arc<dyn ObjectTransport>, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| BackendError::Session(format!("build HTTP client: {e}")))?;
        Ok(Arc::new(ReqwestTransport { client }))
    }
}

pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[async_trait]
impl ObjectTransport for ReqwestTransport {
    async fn send(&self, request: ObjectRequest) -> Result<ObjectResponse, UploadError> {
        let builder = match request.method {
            ObjectMethod::Put => self.client.put(request.url),
            ObjectMethod::Post => self.client.post(request.url),
        };
        let builder = builder
            .header(CONTENT_TYPE, request.content_type)
            .body(request.body);
        let builder = match request.bearer_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let response = builder
            .send()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .text()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        Ok(ObjectResponse {
            status,
            location,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reqwest_transport_sends_body_and_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/reports/key")
            .match_header("authorization", "Bearer token-1")
            .match_header("content-type", "image/png")
            .match_body("png-bytes")
            .with_status(201)
            .with_header("location", "https://storage.example/reports/key")
            .create_async()
            .await;

        let transport = ReqwestConnector::default().open().await.unwrap();
        let url = Url::parse(&format!("{}/reports/key", server.url())).unwrap();

        let response = transport
            .send(ObjectRequest {
                method: ObjectMethod::Put,
                url,
                bearer_token: Some("token-1".to_string()),
                content_type: "image/png".to_string(),
                body: Bytes::from_static(b"png-bytes"),
            })
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, 201);
        assert!(response.is_success());
        assert_eq!(
            response.location.as_deref(),
            Some("https://storage.example/reports/key")
        );
    }

    #[tokio::test]
    async fn test_reqwest_transport_reports_error_status_without_failing() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/o")
            .with_status(403)
            .with_body("denied")
            .create_async()
            .await;

        let transport = ReqwestConnector::default().open().await.unwrap();
        let url = Url::parse(&format!("{}/o", server.url())).unwrap();

        let response = transport
            .send(ObjectRequest {
                method: ObjectMethod::Post,
                url,
                bearer_token: None,
                content_type: "image/png".to_string(),
                body: Bytes::from_static(b"x"),
            })
            .await
            .unwrap();

        assert_eq!(response.status, 403);
        assert!(!response.is_success());
        assert_eq!(response.body, "denied");
    }
}
