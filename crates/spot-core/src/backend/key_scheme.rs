use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the diagnostics text is turned into a storage key.
///
/// 诊断文本如何转换为存储键。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyScheme {
    /// Use the diagnostics text verbatim, spaces and newlines included.
    #[default]
    Raw,
    /// One path segment per line; characters outside `[A-Za-z0-9._-]` become `_`.
    Sanitized,
}

impl KeyScheme {
    pub fn apply(self, text: &str) -> String {
        match self {
            KeyScheme::Raw => text.to_string(),
            KeyScheme::Sanitized => text
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(sanitize_segment)
                .collect::<Vec<_>>()
                .join("/"),
        }
    }
}

fn sanitize_segment(line: &str) -> String {
    line.trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

impl FromStr for KeyScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "raw" => Ok(KeyScheme::Raw),
            "sanitized" => Ok(KeyScheme::Sanitized),
            other => Err(format!("unknown key scheme: {other}")),
        }
    }
}
