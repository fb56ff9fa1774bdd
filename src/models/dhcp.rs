// DHCP protocol metrics

use serde::{Deserialize, Serialize};
use wincode::{SchemaRead, SchemaWrite};

use super::de::{integer, null_default};
use super::{PeriodPayload, Rates};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, SchemaRead, SchemaWrite)]
#[serde(default)]
pub struct DhcpWirePackets {
    #[serde(deserialize_with = "integer")]
    pub filtered: u64,
    #[serde(deserialize_with = "integer")]
    pub total: u64,
    #[serde(deserialize_with = "integer")]
    pub deep_samples: u64,
    #[serde(deserialize_with = "integer")]
    pub discover: u64,
    #[serde(deserialize_with = "integer")]
    pub offer: u64,
    #[serde(deserialize_with = "integer")]
    pub request: u64,
    #[serde(deserialize_with = "integer")]
    pub ack: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, SchemaRead, SchemaWrite)]
#[serde(default)]
pub struct DhcpRates {
    #[serde(deserialize_with = "null_default")]
    pub total: Rates,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, SchemaRead, SchemaWrite)]
#[serde(default)]
pub struct DhcpPayload {
    #[serde(deserialize_with = "null_default")]
    pub wire_packets: DhcpWirePackets,
    #[serde(deserialize_with = "null_default")]
    pub rates: DhcpRates,
    #[serde(deserialize_with = "null_default")]
    pub period: PeriodPayload,
}
