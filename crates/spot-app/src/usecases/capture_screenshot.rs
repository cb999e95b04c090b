//! Use case for capturing the visible window
//! 截取可见窗口的用例

use std::sync::{Arc, Mutex};

use spot_core::image::{Orientation, RasterImage};
use spot_core::ports::{ImageCompositorPort, SurfaceSourcePort};
use tracing::{debug, info_span, Instrument};

/// A rasterized capture plus the orientation it was taken in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedScreenshot {
    pub image: RasterImage,
    pub orientation: Orientation,
}

/// Rasterizes the host's visible window.
///
/// ## Behavior / 行为
/// - Asks the host for the current window render
/// - Flattens it over the background colour at device-native scale and
///   rotates it upright
/// - A face-up or face-down frame is rendered with the last upright
///   orientation seen, portrait before any
/// - Returns `None` when there is no window or rasterization fails; this is
///   the only failure mode
pub struct CaptureScreenshot {
    surface: Arc<dyn SurfaceSourcePort>,
    compositor: Arc<dyn ImageCompositorPort>,
    last_upright: Mutex<Orientation>,
}

impl CaptureScreenshot {
    pub fn new(
        surface: Arc<dyn SurfaceSourcePort>,
        compositor: Arc<dyn ImageCompositorPort>,
    ) -> Self {
        Self {
            surface,
            compositor,
            last_upright: Mutex::new(Orientation::Portrait),
        }
    }

    fn upright_orientation(&self, reported: Orientation) -> Orientation {
        let mut last = self
            .last_upright
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let orientation = reported.or_last_upright(*last);
        if !reported.is_flat() && reported != Orientation::Unknown {
            *last = reported;
        }
        orientation
    }

    pub async fn execute(&self) -> Option<CapturedScreenshot> {
        let span = info_span!("usecase.capture_screenshot.execute");

        async {
            let Some(mut frame) = self.surface.current_frame().await else {
                debug!("no renderable surface");
                return None;
            };
            frame.orientation = self.upright_orientation(frame.orientation);
            let orientation = frame.orientation;

            let Some(image) = self.compositor.rasterize(&frame) else {
                debug!("surface rasterization produced no bitmap");
                return None;
            };

            debug!(
                width = image.width(),
                height = image.height(),
                ?orientation,
                "surface captured"
            );
            Some(CapturedScreenshot { image, orientation })
        }
        .instrument(span)
        .await
    }
}
