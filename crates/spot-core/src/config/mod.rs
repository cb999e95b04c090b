//! # Pure Data Module / 纯数据模块
//!
//! Configuration data structures and the TOML → DTO mapping.
//!
//! > **This module contains data only, no policy, no validation.**
//! > **此模块只包含数据结构定义，禁止业务逻辑与验证逻辑。**
//!
//! Interpreting the values (which backend to build, what to do when a
//! bucket is missing) is the job of the composition root.

mod spot_config;

pub use spot_config::{AppSection, BackendSection, CaptureSection, ResourcesSection, SpotConfig};
