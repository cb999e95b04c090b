//! Host-facing facade.

use std::path::PathBuf;
use std::sync::Arc;

use spot_app::{ShakeSubscription, TriggerController};
use spot_core::config::SpotConfig;
use spot_core::trigger::{MotionEvent, UploadOutcome};
use spot_platform::BroadcastMotionSource;
use tokio::runtime::Handle;
use tokio::sync::broadcast;
use tracing::debug;

use crate::bootstrap::{load_config, wire_spot, HostEnvironment, WiredSpot};

/// The embeddable bug-report trigger.
///
/// Built once in the host's composition root and kept for the session.
/// `start()` and `stop()` never fail and never block; everything they set in
/// motion runs on the tokio runtime `Spot` was created on.
///
/// ```ignore
/// let spot = Spot::from_config_file("Spot.toml".into(), host).await?;
/// spot.start();
/// // from the host's "motion ended" callback:
/// spot.report_motion(MotionEvent::Shake);
/// ```
pub struct Spot {
    controller: Arc<TriggerController>,
    motion: BroadcastMotionSource,
    subscription: ShakeSubscription,
}

impl Spot {
    /// Wire Spot from an already-loaded configuration.
    ///
    /// Must be awaited inside a tokio runtime.
    pub async fn new(config: SpotConfig, host: HostEnvironment) -> Self {
        let WiredSpot {
            controller,
            motion,
            subscription,
        } = wire_spot(&config, host, Handle::current()).await;

        Self {
            controller,
            motion,
            subscription,
        }
    }

    /// Load the bundled TOML file and wire Spot from it.
    pub async fn from_config_file(path: PathBuf, host: HostEnvironment) -> anyhow::Result<Self> {
        let config = load_config(path)?;
        Ok(Self::new(config, host).await)
    }

    pub fn start(&self) {
        self.controller.start();
    }

    pub fn stop(&self) {
        self.controller.stop();
    }

    pub fn is_armed(&self) -> bool {
        self.controller.is_armed()
    }

    /// Forward one motion event from the host's event loop.
    pub fn report_motion(&self, event: MotionEvent) {
        let delivered = self.motion.dispatch(event);
        debug!(?event, delivered, "motion event forwarded");
    }

    /// The motion hub, for hosts that fan events out themselves.
    pub fn motion_source(&self) -> &BroadcastMotionSource {
        &self.motion
    }

    pub fn subscribe_uploads(&self) -> broadcast::Receiver<UploadOutcome> {
        self.controller.subscribe_uploads()
    }

    pub fn controller(&self) -> &Arc<TriggerController> {
        &self.controller
    }

    /// Disarm, disconnect and drop the shake listener.
    pub async fn shutdown(self) {
        self.controller.stop();
        self.subscription.unregister().await;
    }
}
