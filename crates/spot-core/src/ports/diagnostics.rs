use crate::report::BundleInfo;

/// Host application identity (name, marketing version, build number).
///
/// 宿主应用标识（名称、版本号、构建号）。
pub trait BundleInfoPort: Send + Sync {
    fn bundle_info(&self) -> BundleInfo;
}

/// Hardware/platform identifier lookup. `None` when the lookup fails.
///
/// 硬件/平台标识查询，失败时返回 `None`。
pub trait DeviceModelPort: Send + Sync {
    fn device_model(&self) -> Option<String>;
}
