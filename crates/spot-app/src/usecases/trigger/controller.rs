//! Trigger controller
//! 触发控制器

use std::sync::Arc;

use spot_core::backend::KeyScheme;
use spot_core::ports::{
    ResourceBundlePort, ReviewOutcome, ReviewPresenterPort, ReviewRequest, UploadBackendPort,
};
use spot_core::report::SpotData;
use spot_core::trigger::{CycleOutcome, TriggerState, UploadOutcome};
use tokio::runtime::Handle;
use tokio::sync::broadcast;
use tracing::{debug, info, info_span, warn, Instrument};

use crate::deps::TriggerDeps;
use crate::usecases::{BackendLifecycle, CaptureScreenshot, CollectDiagnostics, ComposeReport};

const UPLOAD_OUTCOME_CAPACITY: usize = 16;

/// Tunables that are not ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerSettings {
    /// Name of the presentation resource bundle, without the `.bundle` suffix.
    pub resource_bundle_name: String,
    /// Scheme used to label failed uploads. The composition root resolves
    /// it once and gives the same value to the backend.
    pub key_scheme: KeyScheme,
}

impl Default for TriggerSettings {
    fn default() -> Self {
        Self {
            resource_bundle_name: "Spot".to_string(),
            key_scheme: KeyScheme::Raw,
        }
    }
}

/// Owns the armed/in-flight state and runs one capture → review → upload
/// cycle per accepted shake.
///
/// ## Behavior / 行为
/// - `start()` / `stop()` flip the armed flag and queue a backend
///   connect/disconnect without waiting for it
/// - `on_shake_signal()` is ignored while disarmed or while another cycle
///   is running
/// - Every abort path (no window, no resources, presenter error, user
///   cancel, encode failure) returns the controller to armed and idle
/// - The upload is spawned on the runtime and its result is published to
///   [`subscribe_uploads`](Self::subscribe_uploads) receivers
///
/// Constructed once by the composition root and shared behind an `Arc`.
pub struct TriggerController {
    state: TriggerState,
    settings: TriggerSettings,
    capture: CaptureScreenshot,
    diagnostics: CollectDiagnostics,
    compose: ComposeReport,
    resources: Arc<dyn ResourceBundlePort>,
    presenter: Arc<dyn ReviewPresenterPort>,
    backend: Arc<dyn UploadBackendPort>,
    lifecycle: BackendLifecycle,
    runtime: Handle,
    uploads: broadcast::Sender<UploadOutcome>,
}

impl TriggerController {
    pub fn new(deps: TriggerDeps, settings: TriggerSettings, runtime: Handle) -> Self {
        let TriggerDeps {
            surface,
            presenter,
            compositor,
            resources,
            bundle_info,
            device_model,
            backend,
        } = deps;

        let (uploads, _) = broadcast::channel(UPLOAD_OUTCOME_CAPACITY);

        Self {
            state: TriggerState::new(),
            settings,
            capture: CaptureScreenshot::new(surface, Arc::clone(&compositor)),
            diagnostics: CollectDiagnostics::new(bundle_info, device_model),
            compose: ComposeReport::new(compositor),
            resources,
            presenter,
            lifecycle: BackendLifecycle::spawn(Arc::clone(&backend), &runtime),
            backend,
            runtime,
            uploads,
        }
    }

    /// Arm the trigger and ask the backend to connect.
    pub fn start(&self) {
        self.state.arm();
        self.lifecycle.request_connect();
        info!(backend = %self.backend.kind(), "spot trigger armed");
    }

    /// Disarm the trigger and ask the backend to disconnect.
    pub fn stop(&self) {
        self.state.disarm();
        self.lifecycle.request_disconnect();
        info!("spot trigger disarmed");
    }

    pub fn is_armed(&self) -> bool {
        self.state.is_armed()
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    /// Receiver for the results of dispatched uploads.
    pub fn subscribe_uploads(&self) -> broadcast::Receiver<UploadOutcome> {
        self.uploads.subscribe()
    }

    /// React to one shake.
    ///
    /// # Returns / 返回值
    /// How far the cycle got. Only [`CycleOutcome::Dispatched`] means an
    /// upload was started.
    pub async fn on_shake_signal(&self) -> CycleOutcome {
        if !self.state.is_armed() {
            debug!("shake ignored: trigger disarmed");
            return CycleOutcome::Disarmed;
        }

        let Some(_cycle) = self.state.try_begin_cycle() else {
            debug!("shake ignored: cycle already in flight");
            return CycleOutcome::Busy;
        };

        let outcome = self
            .run_cycle()
            .instrument(info_span!("usecase.trigger.cycle"))
            .await;
        debug!(?outcome, "trigger cycle finished");
        outcome
    }

    async fn run_cycle(&self) -> CycleOutcome {
        let Some(captured) = self.capture.execute().await else {
            return CycleOutcome::CaptureFailed;
        };

        let bundle_name = &self.settings.resource_bundle_name;
        let Some(resources) = self.resources.resolve(bundle_name) else {
            warn!(bundle = %bundle_name, "presentation resources not found; aborting");
            return CycleOutcome::ResourcesMissing;
        };

        let request = ReviewRequest {
            screenshot: captured.image.clone(),
            resources,
            orientation_lock: captured.orientation,
        };
        let overlay = match self.presenter.present(request).await {
            Ok(ReviewOutcome::Confirmed { overlay }) => overlay,
            Ok(ReviewOutcome::Cancelled) => {
                info!("report cancelled by user");
                return CycleOutcome::Cancelled;
            }
            Err(err) => {
                warn!(error = %err, "review presentation failed");
                return CycleOutcome::PresentationFailed;
            }
        };

        let diagnostics = self.diagnostics.execute();

        let data = match self
            .compose
            .execute(&captured.image, overlay.as_ref(), diagnostics)
        {
            Ok(data) => data,
            Err(err) => {
                warn!(error = %err, "failed to compose report");
                return CycleOutcome::ComposeFailed;
            }
        };

        self.dispatch_upload(data);
        CycleOutcome::Dispatched
    }

    fn dispatch_upload(&self, data: SpotData) {
        let backend = Arc::clone(&self.backend);
        let uploads = self.uploads.clone();
        let key = data.storage_key(self.settings.key_scheme);
        let span = info_span!("usecase.trigger.upload", backend = %backend.kind());

        self.runtime.spawn(
            async move {
                let outcome = match backend.upload(data).await {
                    Ok(receipt) => {
                        info!(key = %receipt.key, size = receipt.size, "report uploaded");
                        UploadOutcome::Uploaded(receipt)
                    }
                    Err(err) => {
                        warn!(error = %err, "report upload failed");
                        UploadOutcome::Failed {
                            backend: backend.kind(),
                            key,
                            reason: err.to_string(),
                        }
                    }
                };
                // No receivers is fine.
                let _ = uploads.send(outcome);
            }
            .instrument(span),
        );
    }
}
