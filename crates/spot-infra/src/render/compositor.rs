use std::io::Cursor;

use image::{imageops, imageops::FilterType, DynamicImage, ImageFormat, Rgba, RgbaImage};
use spot_core::image::{EncodedImage, RasterImage, SurfaceFrame};
use spot_core::ports::{ImageCompositorPort, ImageError};
use tracing::debug;

/// `image`-backed implementation of [`ImageCompositorPort`].
///
/// Every call allocates its own canvas, so one instance can be shared freely.
pub struct ImageCompositor {
    background: Rgba<u8>,
}

impl ImageCompositor {
    /// Compositor that fills transparent capture regions with `background`.
    pub fn new(background: [u8; 3]) -> Self {
        let [r, g, b] = background;
        Self {
            background: Rgba([r, g, b, 255]),
        }
    }
}

impl Default for ImageCompositor {
    fn default() -> Self {
        Self::new([0, 0, 0])
    }
}

/// Largest bitmap side the compositor will allocate.
const MAX_SIDE: u32 = 16_384;
/// Largest bitmap area the compositor will allocate (256 MiB of RGBA).
const MAX_PIXELS: u64 = 64 * 1024 * 1024;

fn within_limits(width: u32, height: u32) -> bool {
    width <= MAX_SIDE && height <= MAX_SIDE && u64::from(width) * u64::from(height) <= MAX_PIXELS
}

fn to_rgba_image(image: &RasterImage) -> Option<RgbaImage> {
    RgbaImage::from_raw(image.width(), image.height(), image.pixels().to_vec())
}

fn to_raster(image: RgbaImage) -> Result<RasterImage, ImageError> {
    let (width, height) = image.dimensions();
    Ok(RasterImage::from_rgba(width, height, image.into_raw())?)
}

fn resize_to(image: RgbaImage, width: u32, height: u32) -> RgbaImage {
    if image.dimensions() == (width, height) {
        image
    } else {
        imageops::resize(&image, width, height, FilterType::Triangle)
    }
}

impl ImageCompositorPort for ImageCompositor {
    fn rasterize(&self, frame: &SurfaceFrame) -> Option<RasterImage> {
        let (width, height) = frame.native_size();
        if !within_limits(width, height) {
            debug!(width, height, "surface too large to rasterize");
            return None;
        }
        let layer = resize_to(to_rgba_image(&frame.layer)?, width, height);

        let mut canvas = RgbaImage::from_pixel(width, height, self.background);
        imageops::overlay(&mut canvas, &layer, 0, 0);

        let upright = match frame.orientation.clockwise_quarter_turns() {
            1 => imageops::rotate90(&canvas),
            2 => imageops::rotate180(&canvas),
            3 => imageops::rotate270(&canvas),
            _ => canvas,
        };

        match to_raster(upright) {
            Ok(raster) => Some(raster),
            Err(err) => {
                debug!(error = %err, "rasterized surface produced an invalid bitmap");
                None
            }
        }
    }

    fn composite(
        &self,
        base: Option<&RasterImage>,
        overlay: Option<&RasterImage>,
    ) -> Option<RasterImage> {
        let (base, overlay) = (base?, overlay?);
        let (overlay_width, overlay_height) = overlay.dimensions();
        if !within_limits(overlay_width, overlay_height)
            || !within_limits(base.width(), base.height())
        {
            debug!(overlay_width, overlay_height, "composite inputs too large");
            return None;
        }

        let mut canvas = RgbaImage::new(base.width(), base.height());
        let stretched_base = resize_to(to_rgba_image(base)?, overlay_width, overlay_height);
        imageops::overlay(&mut canvas, &stretched_base, 0, 0);
        imageops::overlay(&mut canvas, &to_rgba_image(overlay)?, 0, 0);

        to_raster(canvas).ok()
    }

    fn encode_png(&self, image: &RasterImage) -> Result<EncodedImage, ImageError> {
        let buffer = to_rgba_image(image)
            .ok_or_else(|| ImageError::Encode("pixel buffer does not match dimensions".into()))?;
        let mut png_bytes = Vec::new();
        DynamicImage::ImageRgba8(buffer)
            .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
            .map_err(|e| ImageError::Encode(e.to_string()))?;
        Ok(EncodedImage::png(png_bytes))
    }

    fn decode(&self, bytes: &[u8]) -> Result<RasterImage, ImageError> {
        let decoded =
            image::load_from_memory(bytes).map_err(|e| ImageError::Decode(e.to_string()))?;
        to_raster(decoded.to_rgba8())
    }
}
