//! Use case for assembling the diagnostics block
//! 组装诊断信息的用例

use std::sync::Arc;

use spot_core::ports::{BundleInfoPort, DeviceModelPort};
use spot_core::report::DeviceAppInfo;
use tracing::debug;

/// App name plus the formatted diagnostics text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticsInfo {
    pub app_name: String,
    pub device_app_info: DeviceAppInfo,
}

/// Reads bundle identity and the device model and formats them.
///
/// A failed device lookup drops the `Device` line; collection itself never
/// fails.
pub struct CollectDiagnostics {
    bundle_info: Arc<dyn BundleInfoPort>,
    device_model: Arc<dyn DeviceModelPort>,
}

impl CollectDiagnostics {
    pub fn new(
        bundle_info: Arc<dyn BundleInfoPort>,
        device_model: Arc<dyn DeviceModelPort>,
    ) -> Self {
        Self {
            bundle_info,
            device_model,
        }
    }

    pub fn execute(&self) -> DiagnosticsInfo {
        let bundle = self.bundle_info.bundle_info();
        let model = self.device_model.device_model();
        if model.is_none() {
            debug!("device model unavailable; omitting Device line");
        }

        DiagnosticsInfo {
            device_app_info: DeviceAppInfo::compose(&bundle, model.as_deref()),
            app_name: bundle.name,
        }
    }
}
