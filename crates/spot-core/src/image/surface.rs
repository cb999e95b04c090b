use super::{Orientation, RasterImage};

/// A single render of the host's visible window, as delivered by the host.
///
/// 宿主交付的可见窗口渲染帧。
///
/// `layer` is the window layer as rendered by the host. It may carry
/// transparent regions and may be at a lower resolution than the screen;
/// rasterization scales it to `logical size × scale` device pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceFrame {
    /// Window width in points.
    pub logical_width: f64,
    /// Window height in points.
    pub logical_height: f64,
    /// Device pixels per point.
    pub scale: f64,
    pub orientation: Orientation,
    pub layer: RasterImage,
}

impl SurfaceFrame {
    /// Size of the window in device-native pixels, never smaller than 1x1.
    pub fn native_size(&self) -> (u32, u32) {
        let scale = if self.scale.is_finite() && self.scale > 0.0 {
            self.scale
        } else {
            1.0
        };
        (
            to_pixels(self.logical_width * scale),
            to_pixels(self.logical_height * scale),
        )
    }
}

fn to_pixels(value: f64) -> u32 {
    if !value.is_finite() || value < 1.0 {
        return 1;
    }
    value.round().min(u32::MAX as f64) as u32
}
