use spot_core::ports::DeviceModelPort;
use sysinfo::System;
use tracing::debug;

/// Device model identifier.
///
/// 设备型号标识。
///
/// Prefers the host-supplied override (mobile hosts know the hardware
/// identifier, e.g. `iPhone9,1`); otherwise falls back to the machine
/// architecture reported by the OS.
pub struct SystemDeviceModel {
    override_model: Option<String>,
}

impl SystemDeviceModel {
    pub fn new() -> Self {
        Self {
            override_model: None,
        }
    }

    /// Use `model` when non-empty, the system lookup otherwise.
    pub fn with_override(model: impl Into<String>) -> Self {
        let model = model.into();
        Self {
            override_model: (!model.trim().is_empty()).then_some(model),
        }
    }
}

impl Default for SystemDeviceModel {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceModelPort for SystemDeviceModel {
    fn device_model(&self) -> Option<String> {
        if let Some(model) = &self.override_model {
            return Some(model.clone());
        }
        let arch = System::cpu_arch().filter(|arch| !arch.trim().is_empty());
        if arch.is_none() {
            debug!("device model lookup returned nothing");
        }
        arch
    }
}
