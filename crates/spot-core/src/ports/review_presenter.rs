use async_trait::async_trait;

use super::errors::PresentError;
use super::resource_bundle::ResourceBundle;
use crate::image::{Orientation, RasterImage};

/// Everything the review screen needs to show a capture.
#[derive(Debug, Clone)]
pub struct ReviewRequest {
    pub screenshot: RasterImage,
    pub resources: ResourceBundle,
    /// Orientation the review screen should stay locked to.
    pub orientation_lock: Orientation,
}

/// Result of the review screen.
///
/// 评审界面的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// User submitted the report. `overlay` holds the annotation layer, if
    /// anything was drawn.
    Confirmed { overlay: Option<RasterImage> },
    /// User dismissed the screen.
    Cancelled,
}

/// Review/annotate screen, implemented by the host UI.
///
/// 评审/标注界面端口，由宿主 UI 实现。
///
/// Resolves once the user is done; may take arbitrarily long.
#[async_trait]
pub trait ReviewPresenterPort: Send + Sync {
    async fn present(&self, request: ReviewRequest) -> Result<ReviewOutcome, PresentError>;
}
