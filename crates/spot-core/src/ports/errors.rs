use thiserror::Error;

use crate::backend::ConnectionState;

/// Lifecycle errors reported by upload backends.
///
/// 上传后端的生命周期错误。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("backend is missing required configuration: {0}")]
    MissingConfiguration(&'static str),

    #[error("backend configuration is invalid: {0}")]
    InvalidConfiguration(String),

    #[error("backend has not been configured")]
    NotConfigured,

    #[error("operation not allowed while {0:?}")]
    InvalidState(ConnectionState),

    #[error("failed to establish backend session: {0}")]
    Session(String),
}

/// Failures of a single upload attempt.
///
/// 单次上传尝试的失败。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("backend is not connected")]
    NotConnected,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("backend rejected upload with status {status}: {message}")]
    Rejected { status: u16, message: String },
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("invalid bitmap: {0}")]
    Raster(#[from] crate::image::RasterError),

    #[error("failed to encode image: {0}")]
    Encode(String),

    #[error("failed to decode image: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum PresentError {
    #[error("no presenting context available")]
    NoPresentingContext,

    #[error("presenter failed: {0}")]
    Failed(String),
}
