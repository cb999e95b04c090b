//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Read the bundled TOML configuration file / 读取随应用打包的 TOML 配置文件
//! - ✅ Parse TOML into the SpotConfig DTO / 将 TOML 解析为 SpotConfig DTO
//! - ✅ Report I/O and parsing errors with context / 报告带上下文的 I/O 和解析错误
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No default value logic / 禁止默认值逻辑**
//!
//! Backend credentials are checked by the backend's own `configure()`, not
//! here.

use anyhow::Context;
use spot_core::config::SpotConfig;
use std::path::PathBuf;

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// Missing sections and keys become empty values; they are facts for the
/// wiring layer to interpret.
///
/// # Errors / 错误
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
pub fn load_config(config_path: PathBuf) -> anyhow::Result<SpotConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    SpotConfig::from_toml(&toml_value)
}
