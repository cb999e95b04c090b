//! # Trigger Dependencies / 触发依赖
//!
//! Dependency grouping for [`TriggerController`](crate::TriggerController)
//! construction. Not a builder: no defaults, no hidden logic, just
//! parameter grouping.

use std::sync::Arc;
use spot_core::ports::*;

/// All ports a trigger cycle touches. Every field is required.
/// 触发周期使用的全部端口，所有字段均为必需。
pub struct TriggerDeps {
    // Host-provided / 宿主提供
    pub surface: Arc<dyn SurfaceSourcePort>,
    pub presenter: Arc<dyn ReviewPresenterPort>,

    // Imaging / 图像
    pub compositor: Arc<dyn ImageCompositorPort>,

    // Platform / 平台
    pub resources: Arc<dyn ResourceBundlePort>,
    pub bundle_info: Arc<dyn BundleInfoPort>,
    pub device_model: Arc<dyn DeviceModelPort>,

    // Storage / 存储
    pub backend: Arc<dyn UploadBackendPort>,
}
