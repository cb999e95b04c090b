//! Use case for building the final report
//! 生成最终报告的用例

use std::sync::Arc;

use spot_core::image::RasterImage;
use spot_core::ports::{ImageCompositorPort, ImageError};
use spot_core::report::{SpotData, SpotDataError};
use tracing::debug;

use super::collect_diagnostics::DiagnosticsInfo;

#[derive(Debug, thiserror::Error)]
pub enum ComposeReportError {
    #[error("failed to composite annotation over screenshot")]
    Composite,

    #[error(transparent)]
    Encode(#[from] ImageError),

    #[error(transparent)]
    Report(#[from] SpotDataError),
}

/// Flattens the annotation onto the screenshot, encodes both images and
/// wraps them with the diagnostics into a [`SpotData`].
///
/// Without an overlay the combined image is the screenshot itself and both
/// fields share the same bytes.
pub struct ComposeReport {
    compositor: Arc<dyn ImageCompositorPort>,
}

impl ComposeReport {
    pub fn new(compositor: Arc<dyn ImageCompositorPort>) -> Self {
        Self { compositor }
    }

    pub fn execute(
        &self,
        screenshot: &RasterImage,
        overlay: Option<&RasterImage>,
        diagnostics: DiagnosticsInfo,
    ) -> Result<SpotData, ComposeReportError> {
        let screenshot_png = self.compositor.encode_png(screenshot)?;

        let combined_png = match overlay {
            Some(overlay) => {
                let combined = self
                    .compositor
                    .composite(Some(screenshot), Some(overlay))
                    .ok_or(ComposeReportError::Composite)?;
                self.compositor.encode_png(&combined)?
            }
            None => screenshot_png.clone(),
        };

        debug!(
            screenshot_bytes = screenshot_png.len(),
            combined_bytes = combined_png.len(),
            annotated = overlay.is_some(),
            "report composed"
        );

        Ok(SpotData::new(
            diagnostics.app_name,
            diagnostics.device_app_info,
            combined_png.bytes,
            screenshot_png.bytes,
        )?)
    }
}
