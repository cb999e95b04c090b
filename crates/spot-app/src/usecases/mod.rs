pub mod backend_lifecycle;
pub mod capture_screenshot;
pub mod collect_diagnostics;
pub mod compose_report;
pub mod trigger;

pub use backend_lifecycle::BackendLifecycle;
pub use capture_screenshot::{CaptureScreenshot, CapturedScreenshot};
pub use collect_diagnostics::{CollectDiagnostics, DiagnosticsInfo};
pub use compose_report::{ComposeReport, ComposeReportError};
pub use trigger::{ShakeSubscription, TriggerController, TriggerSettings};
