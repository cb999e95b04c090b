use thiserror::Error;

/// Bytes per RGBA8 pixel.
const CHANNELS: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RasterError {
    #[error("raster dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions { width: u32, height: u32 },

    #[error("pixel buffer has {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}

/// Transient in-memory RGBA8 bitmap.
///
/// 内存中的 RGBA8 位图（瞬态）。
///
/// Pixels are stored row-major, non-premultiplied, four bytes per pixel.
/// A `RasterImage` always has non-zero dimensions and a buffer whose
/// length matches them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterImage {
    /// Wrap an existing RGBA8 buffer.
    ///
    /// 包装已有的 RGBA8 缓冲区。
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::EmptyDimensions { width, height });
        }
        let expected = width as usize * height as usize * CHANNELS;
        if pixels.len() != expected {
            return Err(RasterError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a bitmap where every pixel has the same colour.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, RasterError> {
        let count = width as usize * height as usize;
        let pixels = rgba.iter().copied().cycle().take(count * CHANNELS).collect();
        Self::from_rgba(width, height, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Colour of the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let px = &self.pixels[offset..offset + CHANNELS];
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}
