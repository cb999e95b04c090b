//! # spot-infra
//!
//! Infrastructure implementations for Spot: bitmap compositing and the
//! cloud storage backends.

pub mod backend;
pub mod render;

pub use backend::{
    build_upload_backend, configure_or_disable, resolve_key_scheme, AwsBackend, FirebaseBackend,
    GoogleBackend, NullUploadBackend, ReqwestConnector,
};
pub use render::ImageCompositor;
