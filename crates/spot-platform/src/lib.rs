//! # spot-platform
//!
//! Platform-specific implementations for Spot.
//!
//! This crate contains adapters that interact with the operating system and
//! the host application's packaging.

pub mod bundle_info;
pub mod device_model;
pub mod motion;
pub mod resource_bundle;

pub use bundle_info::ConfiguredBundleInfo;
pub use device_model::SystemDeviceModel;
pub use motion::BroadcastMotionSource;
pub use resource_bundle::FsResourceBundleLocator;
