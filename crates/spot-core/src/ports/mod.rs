//! Port interfaces for the application layer
//!
//! Ports define the contract between the trigger use cases and the
//! implementations supplied by infrastructure, platform adapters or the host
//! application itself. The core never depends on a concrete backend,
//! renderer or presenter.
//!
//! ## Who implements what / 实现方
//!
//! - `spot-infra`: [`UploadBackendPort`], [`ImageCompositorPort`]
//! - `spot-platform`: [`DeviceModelPort`], [`BundleInfoPort`],
//!   [`ResourceBundlePort`], [`MotionSourcePort`]
//! - host application: [`SurfaceSourcePort`], [`ReviewPresenterPort`]

mod diagnostics;
pub mod errors;
mod image_compositor;
mod motion;
mod resource_bundle;
mod review_presenter;
mod surface;
mod upload_backend;

pub use diagnostics::{BundleInfoPort, DeviceModelPort};
pub use errors::{BackendError, ImageError, PresentError, UploadError};
pub use image_compositor::ImageCompositorPort;
pub use motion::MotionSourcePort;
pub use resource_bundle::{BundleOrigin, ResourceBundle, ResourceBundlePort};
pub use review_presenter::{ReviewOutcome, ReviewPresenterPort, ReviewRequest};
pub use surface::SurfaceSourcePort;
pub use upload_backend::{UploadBackendPort, UploadReceipt};
