use std::path::PathBuf;

/// Spot configuration DTO (pure data, no logic)
/// Spot 配置 DTO（纯数据，无逻辑）
///
/// Supplied out-of-band by the host (its bundled configuration file), never
/// through `start()`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotConfig {
    pub app: AppSection,
    /// Device model override, e.g. a hardware identifier the host knows
    /// better than the platform lookup. Empty means "not set".
    pub device_model: String,
    pub backend: BackendSection,
    pub resources: ResourcesSection,
    pub capture: CaptureSection,
}

/// `[app]`: host bundle identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSection {
    pub bundle_name: String,
    pub version: String,
    pub build: String,
}

/// `[backend]`: storage backend selection and credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendSection {
    /// Raw backend name (`firebase`, `aws`, `google`, `none`).
    pub kind: String,
    pub bucket: String,
    pub region: String,
    pub endpoint: String,
    pub access_token: String,
    /// Raw key scheme name (`raw`, `sanitized`).
    pub key_scheme: String,
}

/// `[resources]`: where the review UI bundle lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcesSection {
    pub bundle_name: String,
    pub embedded_dir: PathBuf,
    pub local_dir: PathBuf,
}

/// `[capture]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureSection {
    /// Fill colour beneath transparent regions of the captured window.
    pub background: [u8; 3],
}

fn str_at(value: &toml::Value, section: &str, key: &str) -> String {
    value
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}

impl SpotConfig {
    /// Create SpotConfig from TOML value
    /// 从 TOML 值创建 SpotConfig
    ///
    /// **Prohibited / 禁止**: no validation and no defaults beyond "empty".
    /// Missing sections and keys become empty values.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let background = toml_value
            .get("capture")
            .and_then(|c| c.get("background"))
            .and_then(|v| v.as_array())
            .map(|channels| {
                let mut rgb = [0u8; 3];
                for (slot, channel) in rgb.iter_mut().zip(channels) {
                    *slot = channel.as_integer().unwrap_or(0).clamp(0, 255) as u8;
                }
                rgb
            })
            .unwrap_or([0, 0, 0]);

        Ok(Self {
            app: AppSection {
                bundle_name: str_at(toml_value, "app", "bundle_name"),
                version: str_at(toml_value, "app", "version"),
                build: str_at(toml_value, "app", "build"),
            },
            device_model: str_at(toml_value, "device", "model"),
            backend: BackendSection {
                kind: str_at(toml_value, "backend", "kind"),
                bucket: str_at(toml_value, "backend", "bucket"),
                region: str_at(toml_value, "backend", "region"),
                endpoint: str_at(toml_value, "backend", "endpoint"),
                access_token: str_at(toml_value, "backend", "access_token"),
                key_scheme: str_at(toml_value, "backend", "key_scheme"),
            },
            resources: ResourcesSection {
                bundle_name: str_at(toml_value, "resources", "bundle_name"),
                embedded_dir: PathBuf::from(str_at(toml_value, "resources", "embedded_dir")),
                local_dir: PathBuf::from(str_at(toml_value, "resources", "local_dir")),
            },
            capture: CaptureSection { background },
        })
    }

    /// Create empty SpotConfig (all empty/default values)
    /// 创建空的 SpotConfig（所有字段为空/默认值）
    pub fn empty() -> Self {
        Self {
            app: AppSection {
                bundle_name: String::new(),
                version: String::new(),
                build: String::new(),
            },
            device_model: String::new(),
            backend: BackendSection {
                kind: String::new(),
                bucket: String::new(),
                region: String::new(),
                endpoint: String::new(),
                access_token: String::new(),
                key_scheme: String::new(),
            },
            resources: ResourcesSection {
                bundle_name: String::new(),
                embedded_dir: PathBuf::new(),
                local_dir: PathBuf::new(),
            },
            capture: CaptureSection {
                background: [0, 0, 0],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_parses_all_sections() {
        let toml_str = r#"
            [app]
            bundle_name = "Demo"
            version = "2.1"
            build = "77"

            [device]
            model = "iPhone9,1"

            [backend]
            kind = "aws"
            bucket = "reports"
            region = "eu-west-1"
            access_token = "secret"
            key_scheme = "sanitized"

            [resources]
            bundle_name = "Spot"
            embedded_dir = "/opt/app/Frameworks"
            local_dir = "/opt/app"

            [capture]
            background = [255, 255, 255]
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = SpotConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.app.bundle_name, "Demo");
        assert_eq!(config.app.build, "77");
        assert_eq!(config.device_model, "iPhone9,1");
        assert_eq!(config.backend.kind, "aws");
        assert_eq!(config.backend.region, "eu-west-1");
        assert_eq!(config.backend.endpoint, "");
        assert_eq!(config.backend.key_scheme, "sanitized");
        assert_eq!(
            config.resources.embedded_dir,
            PathBuf::from("/opt/app/Frameworks")
        );
        assert_eq!(config.capture.background, [255, 255, 255]);
    }

    #[test]
    fn test_from_toml_returns_empty_values_when_missing() {
        let toml_value: Value = toml::from_str("").unwrap();

        let config = SpotConfig::from_toml(&toml_value).unwrap();

        // Empty values are valid facts
        assert_eq!(config, SpotConfig::empty());
    }

    #[test]
    fn test_from_toml_clamps_background_channels() {
        let toml_str = r#"
            [capture]
            background = [300, -5]
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = SpotConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.capture.background, [255, 0, 0]);
    }
}
