// Probe application identity (served separately from snapshot data)

use serde::{Deserialize, Serialize};

use super::de::null_default;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppInfo {
    #[serde(deserialize_with = "null_default")]
    pub version: String,
    #[serde(deserialize_with = "null_default")]
    pub up_time_min: f64,
}

/// Document shape `{"app": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetrics {
    #[serde(deserialize_with = "null_default")]
    pub app: AppInfo,
}
