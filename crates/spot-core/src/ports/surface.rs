use async_trait::async_trait;

use crate::image::SurfaceFrame;

/// Host hook that renders the currently visible window.
///
/// 宿主提供的当前可见窗口渲染钩子。
#[async_trait]
pub trait SurfaceSourcePort: Send + Sync {
    /// Render the key window. `None` when there is no active window.
    async fn current_frame(&self) -> Option<SurfaceFrame>;
}
