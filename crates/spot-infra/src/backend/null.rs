use async_trait::async_trait;
use spot_core::backend::{BackendKind, ConnectionState};
use spot_core::ports::{BackendError, UploadBackendPort, UploadError, UploadReceipt};
use spot_core::report::SpotData;
use tokio::sync::Mutex;
use tracing::debug;

/// Disabled backend. Tracks the connection lifecycle but discards every
/// report, in any state.
///
/// Also the fallback when a real backend fails to configure.
pub struct NullUploadBackend {
    state: Mutex<ConnectionState>,
}

impl NullUploadBackend {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ConnectionState::Disconnected),
        }
    }
}

impl Default for NullUploadBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UploadBackendPort for NullUploadBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::None
    }

    async fn state(&self) -> ConnectionState {
        *self.state.lock().await
    }

    async fn configure(&self) -> Result<(), BackendError> {
        Ok(())
    }

    async fn connect(&self) -> Result<(), BackendError> {
        *self.state.lock().await = ConnectionState::Connected;
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), BackendError> {
        *self.state.lock().await = ConnectionState::Disconnected;
        Ok(())
    }

    async fn upload(&self, data: SpotData) -> Result<UploadReceipt, UploadError> {
        let key = data.device_app_info().as_str().to_string();
        let size = data.combined_image_data().len();
        debug!(size, "uploads disabled; discarding report");
        Ok(UploadReceipt {
            backend: BackendKind::None,
            key,
            size,
            location: None,
        })
    }
}
