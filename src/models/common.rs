// Building blocks shared by every traffic domain: period, top-N entry, rate histograms

use serde::{Deserialize, Serialize};
use wincode::{SchemaRead, SchemaWrite};

use super::de::{integer, null_default};

/// Time window a payload refers to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, SchemaRead, SchemaWrite)]
#[serde(default)]
pub struct PeriodPayload {
    /// Window start, Unix seconds.
    #[serde(deserialize_with = "integer")]
    pub start_ts: i64,
    /// Window length in seconds.
    #[serde(deserialize_with = "integer")]
    pub length: u64,
}

impl PeriodPayload {
    /// Exclusive end of the window, Unix seconds.
    pub fn end_ts(&self) -> i64 {
        self.start_ts.saturating_add_unsigned(self.length)
    }

    /// Window start as a UTC timestamp; `None` if out of chrono's range.
    pub fn start_time(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp(self.start_ts, 0)
    }
}

/// One entry of a top-N ranking. `estimate` may come from a probabilistic counter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, SchemaRead, SchemaWrite)]
#[serde(default)]
pub struct NameCount {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "integer")]
    pub estimate: u64,
}

impl NameCount {
    pub fn new(name: impl Into<String>, estimate: u64) -> Self {
        Self {
            name: name.into(),
            estimate,
        }
    }
}

/// Rate histogram: live value plus percentiles in the same unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, SchemaRead, SchemaWrite)]
#[serde(default)]
pub struct Rates {
    #[serde(deserialize_with = "integer")]
    pub live: u64,
    #[serde(deserialize_with = "integer")]
    pub p50: u64,
    #[serde(deserialize_with = "integer")]
    pub p90: u64,
    #[serde(deserialize_with = "integer")]
    pub p95: u64,
    #[serde(deserialize_with = "integer")]
    pub p99: u64,
}

impl Rates {
    pub fn quantiles(&self) -> Quantiles {
        Quantiles {
            p50: self.p50,
            p90: self.p90,
            p95: self.p95,
            p99: self.p99,
        }
    }

    pub fn is_monotonic(&self) -> bool {
        self.quantiles().is_monotonic()
    }
}

/// Latency percentiles without a live value (e.g. `quantiles_us`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, SchemaRead, SchemaWrite)]
#[serde(default)]
pub struct Quantiles {
    #[serde(deserialize_with = "integer")]
    pub p50: u64,
    #[serde(deserialize_with = "integer")]
    pub p90: u64,
    #[serde(deserialize_with = "integer")]
    pub p95: u64,
    #[serde(deserialize_with = "integer")]
    pub p99: u64,
}

impl Quantiles {
    /// True when every percentile is zero (no samples, or below resolution).
    pub fn is_empty(&self) -> bool {
        self.p50 == 0 && self.p90 == 0 && self.p95 == 0 && self.p99 == 0
    }

    /// p50 <= p90 <= p95 <= p99. An all-zero histogram passes.
    pub fn is_monotonic(&self) -> bool {
        self.p50 <= self.p90 && self.p90 <= self.p95 && self.p95 <= self.p99
    }
}

/// Sum of estimates in a top-N list.
pub fn top_total(list: &[NameCount]) -> u64 {
    list.iter().fold(0u64, |acc, e| acc.saturating_add(e.estimate))
}

/// Whether a top-N list is in descending `estimate` order. Producers do not guarantee it.
pub fn top_is_sorted(list: &[NameCount]) -> bool {
    list.windows(2).all(|w| w[0].estimate >= w[1].estimate)
}
