//! Bitmap value types shared by capture, compositing and the report payload.

mod encoded;
mod orientation;
mod raster;
mod surface;

pub use encoded::{EncodedImage, PNG_CONTENT_TYPE};
pub use orientation::Orientation;
pub use raster::{RasterError, RasterImage};
pub use surface::SurfaceFrame;
