//! # spot
//!
//! Shake-to-report for host applications: a shake captures the window,
//! shows the host's review screen and ships the annotated screenshot with
//! app/device diagnostics to a cloud storage backend.
//!
//! The host supplies the two UI-bound ports in
//! [`HostEnvironment`](bootstrap::HostEnvironment) and drives [`Spot`].

pub mod bootstrap;
mod spot;

pub use bootstrap::HostEnvironment;
pub use spot::Spot;

pub use spot_core::image::{Orientation, RasterImage, SurfaceFrame};
pub use spot_core::ports::{
    PresentError, ResourceBundle, ReviewOutcome, ReviewPresenterPort, ReviewRequest,
    SurfaceSourcePort,
};
pub use spot_core::trigger::{CycleOutcome, MotionEvent, UploadOutcome};
pub use spot_core::SpotConfig;
