use async_trait::async_trait;

use super::errors::{BackendError, UploadError};
use crate::backend::{BackendKind, ConnectionState};
use crate::report::SpotData;

/// Acknowledgement returned by a backend after a report was stored.
///
/// 后端存储报告后返回的确认。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub backend: BackendKind,
    pub key: String,
    pub size: usize,
    /// Location reported by the service, when it reports one.
    pub location: Option<String>,
}

/// Cloud storage capability a report is shipped through.
///
/// 报告上传所用的云存储能力端口。
///
/// # Lifecycle / 生命周期
///
/// `Disconnected → (connect) → Connected → (disconnect) → Disconnected`
///
/// - `configure()` is only valid while disconnected and must finish before
///   the first `connect()`.
/// - `connect()` and `disconnect()` are idempotent.
/// - `upload()` while not connected is rejected with
///   [`UploadError::NotConnected`] by network backends. The disabled backend
///   accepts and discards in every state.
/// - Backends never retry; failures are logged where they happen and
///   returned to the caller.
///
/// There are no provided methods: every backend spells out every operation.
#[async_trait]
pub trait UploadBackendPort: Send + Sync {
    fn kind(&self) -> BackendKind;

    async fn state(&self) -> ConnectionState;

    async fn configure(&self) -> Result<(), BackendError>;

    async fn connect(&self) -> Result<(), BackendError>;

    async fn disconnect(&self) -> Result<(), BackendError>;

    async fn upload(&self, data: SpotData) -> Result<UploadReceipt, UploadError>;
}
