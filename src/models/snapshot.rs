// Aggregate root: one observation window across all monitored protocols

use serde::{Deserialize, Serialize};
use wincode::{SchemaRead, SchemaWrite};

use super::de::null_default;
use super::{DhcpPayload, DnsPayload, PacketPayload, PcapPayload, PeriodPayload};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, SchemaRead, SchemaWrite)]
#[serde(default)]
pub struct StatSnapshot {
    #[serde(deserialize_with = "null_default")]
    pub dns: DnsPayload,
    #[serde(deserialize_with = "null_default")]
    pub dhcp: DhcpPayload,
    #[serde(deserialize_with = "null_default")]
    pub packets: PacketPayload,
    #[serde(deserialize_with = "null_default")]
    pub pcap: PcapPayload,
}

impl StatSnapshot {
    /// First non-empty period in dns, dhcp, packets order; the probe hoists the same one.
    pub fn period(&self) -> Option<&PeriodPayload> {
        [&self.dns.period, &self.dhcp.period, &self.packets.period]
            .into_iter()
            .find(|p| **p != PeriodPayload::default())
    }
}
