//! Report payload: diagnostics text, the immutable `SpotData` value and the
//! blob handed to storage backends.

mod blob;
mod diagnostics;
mod spot_data;

pub use blob::ReportBlob;
pub use diagnostics::{BundleInfo, DeviceAppInfo};
pub use spot_data::{SpotData, SpotDataError};
