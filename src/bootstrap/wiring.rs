//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Create infra implementations (compositor, upload backend) / 创建 infra 层具体实现
//! - ✅ Create platform implementations (device model, resources, motion) / 创建 platform 层具体实现
//! - ✅ Inject everything into the TriggerController / 将所有依赖注入到 TriggerController
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//! - Do not decide what a shake does
//! - 不决定摇一摇之后做什么
//!
//! ## Architecture Principle / 架构原则
//!
//! > **This is the only place allowed to depend on spot-infra + spot-platform + spot-app simultaneously.**
//! > **这是唯一允许同时依赖 spot-infra、spot-platform 和 spot-app 的地方。**

use std::sync::Arc;

use spot_app::{ShakeSubscription, TriggerController, TriggerDeps, TriggerSettings};
use spot_core::backend::KeyScheme;
use spot_core::config::SpotConfig;
use spot_core::ports::{ReviewPresenterPort, SurfaceSourcePort};
use spot_infra::{
    build_upload_backend, configure_or_disable, resolve_key_scheme, ImageCompositor,
    ReqwestConnector,
};
use spot_platform::{
    BroadcastMotionSource, ConfiguredBundleInfo, FsResourceBundleLocator, SystemDeviceModel,
};
use tokio::runtime::Handle;
use tracing::{info, warn};

/// Ports only the host application can implement.
/// 只能由宿主应用实现的端口。
pub struct HostEnvironment {
    pub surface: Arc<dyn SurfaceSourcePort>,
    pub presenter: Arc<dyn ReviewPresenterPort>,
}

/// Result of wiring: the controller, the motion hub the host feeds, and
/// the live shake registration.
pub struct WiredSpot {
    pub controller: Arc<TriggerController>,
    pub motion: BroadcastMotionSource,
    pub subscription: ShakeSubscription,
}

fn trigger_settings(config: &SpotConfig, key_scheme: KeyScheme) -> TriggerSettings {
    let defaults = TriggerSettings::default();
    let resource_bundle_name = match config.resources.bundle_name.trim() {
        "" => defaults.resource_bundle_name,
        name => name.to_string(),
    };
    TriggerSettings {
        resource_bundle_name,
        key_scheme,
    }
}

/// Assemble every port and register the shake listener.
///
/// The upload backend is configured here, once; if that fails uploads are
/// disabled instead of failing the host.
pub async fn wire_spot(config: &SpotConfig, host: HostEnvironment, runtime: Handle) -> WiredSpot {
    let key_scheme = resolve_key_scheme(&config.backend);
    let backend = build_upload_backend(
        &config.backend,
        key_scheme,
        Arc::new(ReqwestConnector::default()),
    );
    let backend = configure_or_disable(backend).await;

    let device_model = match config.device_model.trim() {
        "" => SystemDeviceModel::new(),
        model => SystemDeviceModel::with_override(model),
    };

    if config.app.bundle_name.trim().is_empty() {
        warn!("[app].bundle_name is empty; reports will carry a blank bundle name");
    }

    let deps = TriggerDeps {
        surface: host.surface,
        presenter: host.presenter,
        compositor: Arc::new(ImageCompositor::new(config.capture.background)),
        resources: Arc::new(FsResourceBundleLocator::from_section(&config.resources)),
        bundle_info: Arc::new(ConfiguredBundleInfo::from_section(&config.app)),
        device_model: Arc::new(device_model),
        backend,
    };

    let settings = trigger_settings(config, key_scheme);
    info!(
        resource_bundle = %settings.resource_bundle_name,
        key_scheme = ?settings.key_scheme,
        "spot wired"
    );

    let controller = Arc::new(TriggerController::new(deps, settings, runtime.clone()));
    let motion = BroadcastMotionSource::new();
    let subscription = ShakeSubscription::register(&motion, Arc::clone(&controller), &runtime);

    WiredSpot {
        controller,
        motion,
        subscription,
    }
}
