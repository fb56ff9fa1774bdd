// Protocol-agnostic packet metrics

use serde::{Deserialize, Serialize};
use wincode::{SchemaRead, SchemaWrite};

use super::de::{integer, null_default};
use super::{NameCount, PeriodPayload, Rates};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, SchemaRead, SchemaWrite)]
#[serde(default)]
pub struct PacketCardinality {
    #[serde(deserialize_with = "integer")]
    pub dst_ips_out: u64,
    #[serde(deserialize_with = "integer")]
    pub src_ips_in: u64,
}

/// Packets per second, by direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, SchemaRead, SchemaWrite)]
#[serde(default)]
pub struct PacketRates {
    #[serde(deserialize_with = "null_default")]
    pub pps_in: Rates,
    #[serde(deserialize_with = "null_default")]
    pub pps_out: Rates,
    #[serde(deserialize_with = "null_default")]
    pub pps_total: Rates,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, SchemaRead, SchemaWrite)]
#[serde(default)]
pub struct PacketPayload {
    #[serde(deserialize_with = "null_default")]
    pub cardinality: PacketCardinality,
    #[serde(deserialize_with = "integer")]
    pub ipv4: u64,
    #[serde(deserialize_with = "integer")]
    pub ipv6: u64,
    #[serde(deserialize_with = "integer")]
    pub tcp: u64,
    #[serde(deserialize_with = "integer")]
    pub total: u64,
    #[serde(deserialize_with = "integer")]
    pub udp: u64,
    #[serde(rename = "in", deserialize_with = "integer")]
    pub inbound: u64,
    #[serde(rename = "out", deserialize_with = "integer")]
    pub outbound: u64,
    #[serde(deserialize_with = "integer")]
    pub other_l4: u64,
    #[serde(deserialize_with = "integer")]
    pub deep_samples: u64,
    #[serde(deserialize_with = "null_default")]
    pub rates: PacketRates,
    #[serde(deserialize_with = "null_default")]
    pub top_ipv4: Vec<NameCount>,
    #[serde(deserialize_with = "null_default")]
    pub top_ipv6: Vec<NameCount>,
    #[serde(rename = "top_geoLoc", deserialize_with = "null_default")]
    pub top_geo_loc: Vec<NameCount>,
    #[serde(deserialize_with = "null_default")]
    pub top_asn: Vec<NameCount>,
    #[serde(deserialize_with = "null_default")]
    pub period: PeriodPayload,
}

impl PacketPayload {
    pub fn top_lists(&self) -> [(&'static str, &[NameCount]); 4] {
        [
            ("top_ipv4", self.top_ipv4.as_slice()),
            ("top_ipv6", self.top_ipv6.as_slice()),
            ("top_geoLoc", self.top_geo_loc.as_slice()),
            ("top_asn", self.top_asn.as_slice()),
        ]
    }

    pub fn rate_histograms(&self) -> [(&'static str, &Rates); 3] {
        [
            ("rates.pps_in", &self.rates.pps_in),
            ("rates.pps_out", &self.rates.pps_out),
            ("rates.pps_total", &self.rates.pps_total),
        ]
    }
}
