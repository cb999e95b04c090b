use std::sync::Arc;

use async_trait::async_trait;
use spot_core::backend::{BackendKind, ConnectionState, KeyScheme};
use spot_core::ports::{BackendError, UploadBackendPort, UploadError, UploadReceipt};
use spot_core::report::SpotData;
use tokio::sync::Mutex;
use tracing::{debug, info, info_span, warn, Instrument};

use super::layout::ObjectLayout;
use super::transport::{ObjectRequest, ObjectTransport, TransportConnector};

/// Settings shared by the HTTP object-store backends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectStoreConfig {
    pub bucket: String,
    pub region: String,
    pub endpoint: Option<String>,
    pub access_token: Option<String>,
    pub key_scheme: KeyScheme,
}

struct Session {
    state: ConnectionState,
    configured: bool,
    transport: Option<Arc<dyn ObjectTransport>>,
}

/// HTTP object-store backend, specialised per service by `L`.
///
/// Uploads while not connected are rejected with
/// [`UploadError::NotConnected`].
pub struct ObjectStoreBackend<L: ObjectLayout> {
    layout: L,
    config: ObjectStoreConfig,
    connector: Arc<dyn TransportConnector>,
    session: Mutex<Session>,
}

impl<L: ObjectLayout + Default> ObjectStoreBackend<L> {
    pub fn new(config: ObjectStoreConfig, connector: Arc<dyn TransportConnector>) -> Self {
        Self::with_layout(L::default(), config, connector)
    }
}

impl<L: ObjectLayout> ObjectStoreBackend<L> {
    pub fn with_layout(
        layout: L,
        config: ObjectStoreConfig,
        connector: Arc<dyn TransportConnector>,
    ) -> Self {
        Self {
            layout,
            config,
            connector,
            session: Mutex::new(Session {
                state: ConnectionState::Disconnected,
                configured: false,
                transport: None,
            }),
        }
    }
}

#[async_trait]
impl<L: ObjectLayout> UploadBackendPort for ObjectStoreBackend<L> {
    fn kind(&self) -> BackendKind {
        L::KIND
    }

    async fn state(&self) -> ConnectionState {
        self.session.lock().await.state
    }

    async fn configure(&self) -> Result<(), BackendError> {
        let mut session = self.session.lock().await;
        if session.state != ConnectionState::Disconnected {
            return Err(BackendError::InvalidState(session.state));
        }
        self.layout.validate(&self.config)?;
        session.configured = true;
        debug!(backend = %L::KIND, bucket = %self.config.bucket, "backend configured");
        Ok(())
    }

    async fn connect(&self) -> Result<(), BackendError> {
        {
            let mut session = self.session.lock().await;
            match session.state {
                ConnectionState::Connected | ConnectionState::Connecting => return Ok(()),
                ConnectionState::Disconnected => {}
            }
            if !session.configured {
                return Err(BackendError::NotConfigured);
            }
            session.state = ConnectionState::Connecting;
        }

        // The lock is not held while the session opens so state() stays
        // observable and a concurrent disconnect() can win.
        let opened = self.connector.open().await;

        let mut session = self.session.lock().await;
        match opened {
            Ok(transport) if session.state == ConnectionState::Connecting => {
                session.transport = Some(transport);
                session.state = ConnectionState::Connected;
                info!(backend = %L::KIND, "backend connected");
                Ok(())
            }
            Ok(_) => {
                debug!(backend = %L::KIND, "disconnected while connecting; dropping session");
                Ok(())
            }
            Err(err) => {
                session.state = ConnectionState::Disconnected;
                warn!(backend = %L::KIND, error = %err, "backend connect failed");
                Err(err)
            }
        }
    }

    async fn disconnect(&self) -> Result<(), BackendError> {
        let mut session = self.session.lock().await;
        if session.state != ConnectionState::Disconnected {
            info!(backend = %L::KIND, "backend disconnected");
        }
        session.transport = None;
        session.state = ConnectionState::Disconnected;
        Ok(())
    }

    async fn upload(&self, data: SpotData) -> Result<UploadReceipt, UploadError> {
        let transport = {
            let session = self.session.lock().await;
            match (&session.state, &session.transport) {
                (ConnectionState::Connected, Some(transport)) => Arc::clone(transport),
                _ => {
                    warn!(backend = %L::KIND, "upload rejected: backend not connected");
                    return Err(UploadError::NotConnected);
                }
            }
        };

        let blob = data.to_blob(self.config.key_scheme);
        let span = info_span!("backend.upload", backend = %L::KIND, size = blob.size);

        async move {
            let (method, url) = self.layout.target(&self.config, &blob.key)?;
            let response = transport
                .send(ObjectRequest {
                    method,
                    url,
                    bearer_token: self.config.access_token.clone(),
                    content_type: blob.content_type.clone(),
                    body: blob.bytes.clone(),
                })
                .await
                .inspect_err(|err| warn!(error = %err, "upload transport failed"))?;

            if !response.is_success() {
                warn!(status = response.status, "upload rejected by backend");
                return Err(UploadError::Rejected {
                    status: response.status,
                    message: response.body,
                });
            }

            info!(status = response.status, "report uploaded");
            Ok(UploadReceipt {
                backend: L::KIND,
                key: blob.key,
                size: blob.size,
                location: response.location,
            })
        }
        .instrument(span)
        .await
    }
}
