use std::sync::Arc;

use spot_core::backend::{BackendKind, KeyScheme};
use spot_core::config::BackendSection;
use spot_core::ports::UploadBackendPort;
use tracing::{info, warn};

use super::null::NullUploadBackend;
use super::object_store::ObjectStoreConfig;
use super::transport::TransportConnector;
use super::{AwsBackend, FirebaseBackend, GoogleBackend};

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Key scheme named in `[backend]`. An unknown name is logged and treated
/// as `raw`.
///
/// Parse once and hand the result to every consumer.
pub fn resolve_key_scheme(section: &BackendSection) -> KeyScheme {
    section.key_scheme.parse::<KeyScheme>().unwrap_or_else(|err| {
        warn!(error = %err, "unrecognised key scheme; using raw keys");
        KeyScheme::Raw
    })
}

/// Build the backend named in `[backend]`, unconfigured.
///
/// An unknown backend name is logged and treated as disabled.
pub fn build_upload_backend(
    section: &BackendSection,
    key_scheme: KeyScheme,
    connector: Arc<dyn TransportConnector>,
) -> Arc<dyn UploadBackendPort> {
    let kind = section.kind.parse::<BackendKind>().unwrap_or_else(|err| {
        warn!(error = %err, "unrecognised backend; uploads disabled");
        BackendKind::None
    });

    let config = ObjectStoreConfig {
        bucket: section.bucket.trim().to_string(),
        region: section.region.trim().to_string(),
        endpoint: non_empty(&section.endpoint),
        access_token: non_empty(&section.access_token),
        key_scheme,
    };

    match kind {
        BackendKind::Firebase => Arc::new(FirebaseBackend::new(config, connector)),
        BackendKind::Aws => Arc::new(AwsBackend::new(config, connector)),
        BackendKind::Google => Arc::new(GoogleBackend::new(config, connector)),
        BackendKind::None => Arc::new(NullUploadBackend::new()),
    }
}

/// Run the one-time `configure()`; on failure swap in the disabled backend
/// so uploads degrade to no-ops.
pub async fn configure_or_disable(
    backend: Arc<dyn UploadBackendPort>,
) -> Arc<dyn UploadBackendPort> {
    match backend.configure().await {
        Ok(()) => {
            info!(backend = %backend.kind(), "upload backend ready");
            backend
        }
        Err(err) => {
            warn!(
                backend = %backend.kind(),
                error = %err,
                "upload backend configuration failed; uploads disabled"
            );
            Arc::new(NullUploadBackend::new())
        }
    }
}
