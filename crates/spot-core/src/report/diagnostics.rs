use serde::{Deserialize, Serialize};

/// Host application identity.
///
/// 宿主应用标识。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleInfo {
    pub name: String,
    pub version: String,
    pub build: String,
}

/// Human-readable diagnostics block attached to every report.
///
/// 每份报告附带的可读诊断文本。
///
/// Layout:
///
/// ```text
/// Bundle name: {name}
/// Version: {version}
/// Build: {build}
/// Device: {model}
/// ```
///
/// The `Device` line is omitted when the model is unknown. Backends use this
/// text as the storage key, so the labels and their order must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceAppInfo(String);

impl DeviceAppInfo {
    pub fn compose(bundle: &BundleInfo, device_model: Option<&str>) -> Self {
        let mut text = format!(
            "Bundle name: {}\nVersion: {}\nBuild: {}\n",
            bundle.name, bundle.version, bundle.build
        );
        if let Some(model) = device_model.map(str::trim).filter(|m| !m.is_empty()) {
            text.push_str("Device: ");
            text.push_str(model);
        }
        Self(text)
    }

    /// Wrap text that was produced elsewhere (e.g. by a host-side collector).
    pub fn from_text(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for DeviceAppInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle() -> BundleInfo {
        BundleInfo {
            name: "X".to_string(),
            version: "Y".to_string(),
            build: "Z".to_string(),
        }
    }

    #[test]
    fn test_compose_with_device_line() {
        let info = DeviceAppInfo::compose(&bundle(), Some("W"));
        assert_eq!(
            info.as_str(),
            "Bundle name: X\nVersion: Y\nBuild: Z\nDevice: W"
        );
    }

    #[test]
    fn test_compose_without_device_omits_line() {
        let info = DeviceAppInfo::compose(&bundle(), None);
        assert_eq!(info.as_str(), "Bundle name: X\nVersion: Y\nBuild: Z\n");
    }

    #[test]
    fn test_compose_treats_blank_model_as_missing() {
        let info = DeviceAppInfo::compose(&bundle(), Some("  "));
        assert!(!info.as_str().contains("Device"));
    }
}
