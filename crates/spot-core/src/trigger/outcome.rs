use crate::backend::BackendKind;
use crate::ports::UploadReceipt;

/// Terminal state of one `on_shake_signal` call.
///
/// 单次摇一摇信号处理的终止状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Controller is not armed; nothing happened.
    Disarmed,
    /// Another cycle is in flight; this signal was coalesced into it.
    Busy,
    /// No renderable surface, or rasterization failed.
    CaptureFailed,
    /// The presentation resource bundle could not be resolved.
    ResourcesMissing,
    /// The presenter reported an error.
    PresentationFailed,
    /// The user dismissed the review screen.
    Cancelled,
    /// Encoding or report construction failed.
    ComposeFailed,
    /// A report was handed to the upload backend.
    Dispatched,
}

/// Completion notice for a dispatched upload.
///
/// 已派发上传的完成通知。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Uploaded(UploadReceipt),
    Failed {
        backend: BackendKind,
        key: String,
        reason: String,
    },
}

impl UploadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Uploaded(_))
    }
}
