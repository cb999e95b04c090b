mod compositor;

pub use compositor::ImageCompositor;
