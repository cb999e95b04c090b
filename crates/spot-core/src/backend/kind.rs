use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Storage service a report is sent to.
///
/// 报告上传的目标存储服务。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    Firebase,
    Aws,
    Google,
    /// Uploads disabled.
    None,
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "firebase" => Ok(BackendKind::Firebase),
            "aws" | "s3" => Ok(BackendKind::Aws),
            "google" | "gcs" => Ok(BackendKind::Google),
            "" | "none" | "null" | "disabled" => Ok(BackendKind::None),
            other => Err(format!("unknown backend kind: {other}")),
        }
    }
}

impl Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Firebase => write!(f, "firebase"),
            BackendKind::Aws => write!(f, "aws"),
            BackendKind::Google => write!(f, "google"),
            BackendKind::None => write!(f, "none"),
        }
    }
}
