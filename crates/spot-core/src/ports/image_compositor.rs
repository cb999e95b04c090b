use super::errors::ImageError;
use crate::image::{EncodedImage, RasterImage, SurfaceFrame};

/// Pure bitmap operations used by a trigger cycle.
///
/// 触发周期使用的纯位图操作。
///
/// Implementations hold no mutable canvas state between calls.
pub trait ImageCompositorPort: Send + Sync {
    /// Flatten a host surface render into an opaque, upright, device-scale
    /// bitmap. `None` when the frame cannot be rasterized.
    fn rasterize(&self, frame: &SurfaceFrame) -> Option<RasterImage>;

    /// Layer `overlay` over `base` on a canvas the size of `base`.
    /// `None` when either input is absent.
    fn composite(
        &self,
        base: Option<&RasterImage>,
        overlay: Option<&RasterImage>,
    ) -> Option<RasterImage>;

    fn encode_png(&self, image: &RasterImage) -> Result<EncodedImage, ImageError>;

    fn decode(&self, bytes: &[u8]) -> Result<RasterImage, ImageError>;
}
