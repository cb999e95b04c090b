//! # spot-core
//!
//! Core domain models and business logic for Spot.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod backend;
pub mod config;
pub mod image;
pub mod ports;
pub mod report;
pub mod trigger;

// Re-export commonly used types at the crate root
pub use backend::{BackendKind, ConnectionState, KeyScheme};
pub use config::SpotConfig;
pub use image::{EncodedImage, Orientation, RasterImage, SurfaceFrame};
pub use report::{BundleInfo, DeviceAppInfo, ReportBlob, SpotData, SpotDataError};
pub use trigger::{CycleOutcome, MotionEvent, TriggerState, UploadOutcome};
