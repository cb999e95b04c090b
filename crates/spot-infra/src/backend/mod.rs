//! Upload backend implementations.
//!
//! Firebase, AWS and Google share one HTTP object-store backend and differ
//! only in how they lay out the target URL; see [`layout`].

mod factory;
pub mod layout;
mod null;
mod object_store;
pub mod transport;

pub use factory::{build_upload_backend, configure_or_disable, resolve_key_scheme};
pub use null::NullUploadBackend;
pub use object_store::{ObjectStoreBackend, ObjectStoreConfig};
pub use transport::{
    ObjectMethod, ObjectRequest, ObjectResponse, ObjectTransport, ReqwestConnector,
    TransportConnector,
};

pub type FirebaseBackend = ObjectStoreBackend<layout::FirebaseLayout>;
pub type AwsBackend = ObjectStoreBackend<layout::AwsLayout>;
pub type GoogleBackend = ObjectStoreBackend<layout::GoogleLayout>;
