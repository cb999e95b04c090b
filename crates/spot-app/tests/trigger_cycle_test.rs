//! Trigger cycle integration tests.
//!
//! Drive a [`TriggerController`] through whole cycles with the real image
//! compositor and hand-written fakes for the host-facing ports.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use spot_app::{ShakeSubscription, TriggerController, TriggerDeps, TriggerSettings};
use spot_core::backend::{BackendKind, ConnectionState};
use spot_core::image::{Orientation, RasterImage, SurfaceFrame};
use spot_core::ports::{
    BackendError, BundleInfoPort, BundleOrigin, DeviceModelPort, ImageCompositorPort,
    PresentError, ResourceBundle, ResourceBundlePort, ReviewOutcome, ReviewPresenterPort,
    ReviewRequest, SurfaceSourcePort, UploadBackendPort, UploadError, UploadReceipt,
};
use spot_core::report::{BundleInfo, SpotData};
use spot_core::trigger::{CycleOutcome, MotionEvent, UploadOutcome};
use spot_infra::ImageCompositor;
use spot_platform::BroadcastMotionSource;
use tokio::runtime::Handle;

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

struct CountingSurface {
    frame: Option<SurfaceFrame>,
    calls: AtomicUsize,
}

#[async_trait]
impl SurfaceSourcePort for CountingSurface {
    async fn current_frame(&self) -> Option<SurfaceFrame> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.frame.clone()
    }
}

#[derive(Clone)]
enum Script {
    Confirm(Option<RasterImage>),
    Cancel,
    Fail,
    Panic,
}

struct ScriptedPresenter {
    script: Script,
    delay: Duration,
    calls: AtomicUsize,
    active: AtomicUsize,
    max_active: AtomicUsize,
    last_request: Mutex<Option<ReviewRequest>>,
}

impl ScriptedPresenter {
    fn new(script: Script) -> Self {
        Self {
            script,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            active: AtomicUsize::new(0),
            max_active: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl ReviewPresenterPort for ScriptedPresenter {
    async fn present(&self, request: ReviewRequest) -> Result<ReviewOutcome, PresentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now_active = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_active.fetch_max(now_active, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.active.fetch_sub(1, Ordering::SeqCst);

        match self.script.clone() {
            Script::Confirm(overlay) => Ok(ReviewOutcome::Confirmed { overlay }),
            Script::Cancel => Ok(ReviewOutcome::Cancelled),
            Script::Fail => Err(PresentError::NoPresentingContext),
            Script::Panic => panic!("presenter blew up"),
        }
    }
}

struct StaticResources(Option<ResourceBundle>);

impl ResourceBundlePort for StaticResources {
    fn resolve(&self, name: &str) -> Option<ResourceBundle> {
        self.0.clone().filter(|bundle| bundle.name == name)
    }
}

struct FixedBundle;

impl BundleInfoPort for FixedBundle {
    fn bundle_info(&self) -> BundleInfo {
        BundleInfo {
            name: "App".to_string(),
            version: "1.0".to_string(),
            build: "1".to_string(),
        }
    }
}

struct NoDeviceModel;

impl DeviceModelPort for NoDeviceModel {
    fn device_model(&self) -> Option<String> {
        None
    }
}

#[derive(Default)]
struct RecordingBackend {
    uploads: Mutex<Vec<SpotData>>,
    connects: AtomicUsize,
    disconnects: AtomicUsize,
}

#[async_trait]
impl UploadBackendPort for RecordingBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::None
    }

    async fn state(&self) -> ConnectionState {
        ConnectionState::Connected
    }

    async fn configure(&self) -> Result<(), BackendError> {
        Ok(())
    }

    async fn connect(&self) -> Result<(), BackendError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), BackendError> {
        self.disconnects.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn upload(&self, data: SpotData) -> Result<UploadReceipt, UploadError> {
        let receipt = UploadReceipt {
            backend: BackendKind::None,
            key: data.device_app_info().to_string(),
            size: data.combined_image_data().len(),
            location: None,
        };
        self.uploads.lock().unwrap().push(data);
        Ok(receipt)
    }
}

struct FailingBackend;

#[async_trait]
impl UploadBackendPort for FailingBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Aws
    }

    async fn state(&self) -> ConnectionState {
        ConnectionState::Disconnected
    }

    async fn configure(&self) -> Result<(), BackendError> {
        Ok(())
    }

    async fn connect(&self) -> Result<(), BackendError> {
        Err(BackendError::Session("unreachable".to_string()))
    }

    async fn disconnect(&self) -> Result<(), BackendError> {
        Ok(())
    }

    async fn upload(&self, _data: SpotData) -> Result<UploadReceipt, UploadError> {
        Err(UploadError::NotConnected)
    }
}

// ---------------------------------------------------------------------------
// Harness
// ---------------------------------------------------------------------------

struct Harness {
    controller: Arc<TriggerController>,
    surface: Arc<CountingSurface>,
    presenter: Arc<ScriptedPresenter>,
    backend: Arc<RecordingBackend>,
}

fn portrait_frame(width: u32, height: u32) -> SurfaceFrame {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[(x % 256) as u8, (y % 256) as u8, 128, 255]);
        }
    }
    SurfaceFrame {
        logical_width: width as f64,
        logical_height: height as f64,
        scale: 1.0,
        orientation: Orientation::Portrait,
        layer: RasterImage::from_rgba(width, height, pixels).unwrap(),
    }
}

fn spot_bundle() -> ResourceBundle {
    ResourceBundle {
        name: "Spot".to_string(),
        path: PathBuf::from("/app/Spot.bundle"),
        origin: BundleOrigin::Embedded,
    }
}

fn harness_with(
    frame: Option<SurfaceFrame>,
    presenter: ScriptedPresenter,
    resources: Option<ResourceBundle>,
) -> Harness {
    let surface = Arc::new(CountingSurface {
        frame,
        calls: AtomicUsize::new(0),
    });
    let presenter = Arc::new(presenter);
    let backend = Arc::new(RecordingBackend::default());

    let deps = TriggerDeps {
        surface: surface.clone(),
        presenter: presenter.clone(),
        compositor: Arc::new(ImageCompositor::default()),
        resources: Arc::new(StaticResources(resources)),
        bundle_info: Arc::new(FixedBundle),
        device_model: Arc::new(NoDeviceModel),
        backend: backend.clone(),
    };
    let controller = Arc::new(TriggerController::new(
        deps,
        TriggerSettings::default(),
        Handle::current(),
    ));

    Harness {
        controller,
        surface,
        presenter,
        backend,
    }
}

fn harness(presenter: ScriptedPresenter) -> Harness {
    harness_with(Some(portrait_frame(100, 200)), presenter, Some(spot_bundle()))
}

async fn next_upload(rx: &mut tokio::sync::broadcast::Receiver<UploadOutcome>) -> UploadOutcome {
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("upload outcome not published in time")
        .expect("upload channel closed")
}

async fn wait_until(mut condition: impl FnMut() -> bool) {
    for _ in 0..200 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("condition not reached in time");
}

// ---------------------------------------------------------------------------
// Activation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_armed_follows_last_start_or_stop() {
    let h = harness(ScriptedPresenter::new(Script::Cancel));
    assert!(!h.controller.is_armed());

    h.controller.start();
    h.controller.start();
    assert!(h.controller.is_armed());

    h.controller.stop();
    assert!(!h.controller.is_armed());
    h.controller.stop();
    assert!(!h.controller.is_armed());

    h.controller.start();
    assert!(h.controller.is_armed());
}

#[tokio::test]
async fn test_start_and_stop_reach_backend() {
    let h = harness(ScriptedPresenter::new(Script::Cancel));

    h.controller.start();
    h.controller.stop();

    let backend = h.backend.clone();
    wait_until(move || {
        backend.connects.load(Ordering::SeqCst) == 1
            && backend.disconnects.load(Ordering::SeqCst) == 1
    })
    .await;
}

#[tokio::test]
async fn test_disarmed_shake_does_nothing() {
    let h = harness(ScriptedPresenter::new(Script::Confirm(None)));

    assert_eq!(h.controller.on_shake_signal().await, CycleOutcome::Disarmed);

    h.controller.start();
    h.controller.stop();
    assert_eq!(h.controller.on_shake_signal().await, CycleOutcome::Disarmed);

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(h.surface.calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.presenter.calls.load(Ordering::SeqCst), 0);
    assert!(h.backend.uploads.lock().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Cycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_end_to_end_upload_carries_capture_and_composite() {
    // Red stroke across the top rows, transparent elsewhere.
    let mut overlay_pixels = vec![0u8; 100 * 200 * 4];
    for px in overlay_pixels.chunks_exact_mut(4).take(100 * 10) {
        px.copy_from_slice(&[255, 0, 0, 255]);
    }
    let overlay = RasterImage::from_rgba(100, 200, overlay_pixels).unwrap();

    let h = harness(ScriptedPresenter::new(Script::Confirm(Some(overlay.clone()))));
    let mut uploads = h.controller.subscribe_uploads();
    h.controller.start();

    assert_eq!(h.controller.on_shake_signal().await, CycleOutcome::Dispatched);
    assert!(next_upload(&mut uploads).await.is_success());

    let stored = h.backend.uploads.lock().unwrap();
    assert_eq!(stored.len(), 1);
    let data = &stored[0];

    let compositor = ImageCompositor::default();
    let capture = compositor.rasterize(&portrait_frame(100, 200)).unwrap();
    assert_eq!(capture.dimensions(), (100, 200));
    let combined = compositor.composite(Some(&capture), Some(&overlay)).unwrap();

    assert_eq!(
        data.screenshot_data(),
        &compositor.encode_png(&capture).unwrap().bytes
    );
    assert_eq!(
        data.combined_image_data(),
        &compositor.encode_png(&combined).unwrap().bytes
    );
    assert_eq!(data.app_name(), "App");
    assert_eq!(
        data.device_app_info().as_str(),
        "Bundle name: App\nVersion: 1.0\nBuild: 1\n"
    );

    let request = h.presenter.last_request.lock().unwrap();
    let request = request.as_ref().unwrap();
    assert_eq!(request.screenshot, capture);
    assert_eq!(request.resources, spot_bundle());
    assert_eq!(request.orientation_lock, Orientation::Portrait);
}

#[tokio::test]
async fn test_confirm_without_overlay_uploads_screenshot_twice() {
    let h = harness(ScriptedPresenter::new(Script::Confirm(None)));
    let mut uploads = h.controller.subscribe_uploads();
    h.controller.start();

    assert_eq!(h.controller.on_shake_signal().await, CycleOutcome::Dispatched);
    next_upload(&mut uploads).await;

    let stored = h.backend.uploads.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].combined_image_data(), stored[0].screenshot_data());
}

#[tokio::test]
async fn test_shake_during_cycle_is_coalesced() {
    let h = harness(
        ScriptedPresenter::new(Script::Confirm(None)).with_delay(Duration::from_millis(50)),
    );
    let mut uploads = h.controller.subscribe_uploads();
    h.controller.start();

    let (first, second, third) = tokio::join!(
        h.controller.on_shake_signal(),
        h.controller.on_shake_signal(),
        h.controller.on_shake_signal(),
    );

    let outcomes = [first, second, third];
    assert_eq!(
        outcomes
            .iter()
            .filter(|o| **o == CycleOutcome::Dispatched)
            .count(),
        1
    );
    assert_eq!(
        outcomes.iter().filter(|o| **o == CycleOutcome::Busy).count(),
        2
    );
    assert_eq!(h.presenter.max_active.load(Ordering::SeqCst), 1);
    assert_eq!(h.presenter.calls.load(Ordering::SeqCst), 1);

    next_upload(&mut uploads).await;
    assert_eq!(h.backend.uploads.lock().unwrap().len(), 1);

    // Idle again afterwards.
    assert!(!h.controller.is_busy());
    assert_eq!(h.controller.on_shake_signal().await, CycleOutcome::Dispatched);
}

#[tokio::test]
async fn test_cancel_uploads_nothing() {
    let h = harness(ScriptedPresenter::new(Script::Cancel));
    h.controller.start();

    assert_eq!(h.controller.on_shake_signal().await, CycleOutcome::Cancelled);
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert!(h.backend.uploads.lock().unwrap().is_empty());
    assert!(h.controller.is_armed());
    assert!(!h.controller.is_busy());
}

#[tokio::test]
async fn test_presenter_error_aborts_cycle() {
    let h = harness(ScriptedPresenter::new(Script::Fail));
    h.controller.start();

    assert_eq!(
        h.controller.on_shake_signal().await,
        CycleOutcome::PresentationFailed
    );
    assert!(h.backend.uploads.lock().unwrap().is_empty());
    assert!(!h.controller.is_busy());
}

#[tokio::test]
async fn test_missing_resources_abort_before_presentation() {
    let h = harness_with(
        Some(portrait_frame(10, 10)),
        ScriptedPresenter::new(Script::Confirm(None)),
        None,
    );
    h.controller.start();

    assert_eq!(
        h.controller.on_shake_signal().await,
        CycleOutcome::ResourcesMissing
    );
    assert_eq!(h.presenter.calls.load(Ordering::SeqCst), 0);
    assert!(h.backend.uploads.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_no_window_aborts_silently() {
    let h = harness_with(
        None,
        ScriptedPresenter::new(Script::Confirm(None)),
        Some(spot_bundle()),
    );
    h.controller.start();

    assert_eq!(
        h.controller.on_shake_signal().await,
        CycleOutcome::CaptureFailed
    );
    assert_eq!(h.surface.calls.load(Ordering::SeqCst), 1);
    assert_eq!(h.presenter.calls.load(Ordering::SeqCst), 0);
    assert!(h.controller.is_armed());
    assert!(!h.controller.is_busy());
}

#[tokio::test]
async fn test_presenter_panic_releases_busy_flag() {
    let h = harness(ScriptedPresenter::new(Script::Panic));
    h.controller.start();

    let controller = h.controller.clone();
    let joined = tokio::spawn(async move { controller.on_shake_signal().await }).await;

    assert!(joined.is_err());
    assert!(!h.controller.is_busy());
    assert!(h.controller.is_armed());
}

#[tokio::test]
async fn test_upload_failure_is_published() {
    let deps = TriggerDeps {
        surface: Arc::new(CountingSurface {
            frame: Some(portrait_frame(8, 8)),
            calls: AtomicUsize::new(0),
        }),
        presenter: Arc::new(ScriptedPresenter::new(Script::Confirm(None))),
        compositor: Arc::new(ImageCompositor::default()),
        resources: Arc::new(StaticResources(Some(spot_bundle()))),
        bundle_info: Arc::new(FixedBundle),
        device_model: Arc::new(NoDeviceModel),
        backend: Arc::new(FailingBackend),
    };
    let controller = TriggerController::new(deps, TriggerSettings::default(), Handle::current());
    let mut uploads = controller.subscribe_uploads();
    controller.start();

    assert_eq!(controller.on_shake_signal().await, CycleOutcome::Dispatched);

    match next_upload(&mut uploads).await {
        UploadOutcome::Failed {
            backend,
            key,
            reason,
        } => {
            assert_eq!(backend, BackendKind::Aws);
            assert_eq!(key, "Bundle name: App\nVersion: 1.0\nBuild: 1\n");
            assert_eq!(reason, UploadError::NotConnected.to_string());
        }
        other => panic!("expected failure, got {other:?}"),
    }

    // A failed upload does not block the next cycle.
    assert!(!controller.is_busy());
    assert_eq!(controller.on_shake_signal().await, CycleOutcome::Dispatched);
}

// ---------------------------------------------------------------------------
// Shake subscription
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_shake_subscription_triggers_cycle_until_unregistered() {
    let h = harness(ScriptedPresenter::new(Script::Confirm(None)));
    let mut uploads = h.controller.subscribe_uploads();
    let source = BroadcastMotionSource::new();
    h.controller.start();

    let subscription =
        ShakeSubscription::register(&source, h.controller.clone(), &Handle::current());

    assert_eq!(source.dispatch(MotionEvent::Other), 1);
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(h.presenter.calls.load(Ordering::SeqCst), 0);

    assert_eq!(source.dispatch(MotionEvent::Shake), 1);
    assert!(next_upload(&mut uploads).await.is_success());
    assert_eq!(h.presenter.calls.load(Ordering::SeqCst), 1);

    subscription.unregister().await;

    assert_eq!(source.dispatch(MotionEvent::Shake), 0);
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(h.presenter.calls.load(Ordering::SeqCst), 1);
    assert_eq!(h.backend.uploads.lock().unwrap().len(), 1);
}
