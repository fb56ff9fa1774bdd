// DNS protocol metrics

use serde::{Deserialize, Serialize};
use wincode::{SchemaRead, SchemaWrite};

use super::de::{integer, null_default};
use super::{NameCount, PeriodPayload, Quantiles, Rates};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, SchemaRead, SchemaWrite)]
#[serde(default)]
pub struct DnsWirePackets {
    /// Packets that did not match the configured filter(s).
    #[serde(deserialize_with = "integer")]
    pub filtered: u64,
    #[serde(deserialize_with = "integer")]
    pub ipv4: u64,
    #[serde(deserialize_with = "integer")]
    pub ipv6: u64,
    #[serde(deserialize_with = "integer")]
    pub queries: u64,
    #[serde(deserialize_with = "integer")]
    pub replies: u64,
    #[serde(deserialize_with = "integer")]
    pub tcp: u64,
    #[serde(deserialize_with = "integer")]
    pub total: u64,
    #[serde(deserialize_with = "integer")]
    pub udp: u64,
    #[serde(deserialize_with = "integer")]
    pub noerror: u64,
    #[serde(deserialize_with = "integer")]
    pub nxdomain: u64,
    #[serde(deserialize_with = "integer")]
    pub srvfail: u64,
    #[serde(deserialize_with = "integer")]
    pub refused: u64,
    #[serde(deserialize_with = "integer")]
    pub deep_samples: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, SchemaRead, SchemaWrite)]
#[serde(default)]
pub struct DnsRates {
    #[serde(deserialize_with = "null_default")]
    pub total: Rates,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, SchemaRead, SchemaWrite)]
#[serde(default)]
pub struct DnsCardinality {
    #[serde(deserialize_with = "integer")]
    pub qname: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, SchemaRead, SchemaWrite)]
#[serde(default)]
pub struct XactCounts {
    #[serde(deserialize_with = "integer")]
    pub total: u64,
    #[serde(deserialize_with = "integer")]
    pub timed_out: u64,
}

/// One direction of query/reply transactions. `in` = host is server, `out` = host is client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, SchemaRead, SchemaWrite)]
#[serde(default)]
pub struct XactDirection {
    /// Transaction time in microseconds.
    #[serde(deserialize_with = "null_default")]
    pub quantiles_us: Quantiles,
    /// Qnames of transactions slower than p90.
    #[serde(deserialize_with = "null_default")]
    pub top_slow: Vec<NameCount>,
    #[serde(deserialize_with = "integer")]
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, SchemaRead, SchemaWrite)]
#[serde(default)]
pub struct DnsXact {
    #[serde(deserialize_with = "null_default")]
    pub counts: XactCounts,
    #[serde(rename = "in", deserialize_with = "null_default")]
    pub inbound: XactDirection,
    #[serde(rename = "out", deserialize_with = "null_default")]
    pub outbound: XactDirection,
    /// Transactions still awaiting a reply when the window was rendered.
    #[serde(deserialize_with = "integer")]
    pub open: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, SchemaRead, SchemaWrite)]
#[serde(default)]
pub struct DnsPayload {
    #[serde(deserialize_with = "null_default")]
    pub wire_packets: DnsWirePackets,
    #[serde(deserialize_with = "null_default")]
    pub rates: DnsRates,
    #[serde(deserialize_with = "null_default")]
    pub cardinality: DnsCardinality,
    #[serde(deserialize_with = "null_default")]
    pub xact: DnsXact,
    #[serde(deserialize_with = "null_default")]
    pub top_qname2: Vec<NameCount>,
    #[serde(deserialize_with = "null_default")]
    pub top_qname3: Vec<NameCount>,
    #[serde(rename = "top_nxdomain", deserialize_with = "null_default")]
    pub top_nx: Vec<NameCount>,
    #[serde(deserialize_with = "null_default")]
    pub top_qtype: Vec<NameCount>,
    #[serde(deserialize_with = "null_default")]
    pub top_rcode: Vec<NameCount>,
    #[serde(deserialize_with = "null_default")]
    pub top_refused: Vec<NameCount>,
    #[serde(deserialize_with = "null_default")]
    pub top_srvfail: Vec<NameCount>,
    #[serde(deserialize_with = "null_default")]
    pub top_udp_ports: Vec<NameCount>,
    #[serde(deserialize_with = "null_default")]
    pub top_org_ids: Vec<NameCount>,
    #[serde(deserialize_with = "null_default")]
    pub period: PeriodPayload,
}

impl DnsPayload {
    /// Every top-N list with its wire key, in schema order.
    pub fn top_lists(&self) -> [(&'static str, &[NameCount]); 11] {
        [
            ("top_qname2", self.top_qname2.as_slice()),
            ("top_qname3", self.top_qname3.as_slice()),
            ("top_nxdomain", self.top_nx.as_slice()),
            ("top_qtype", self.top_qtype.as_slice()),
            ("top_rcode", self.top_rcode.as_slice()),
            ("top_refused", self.top_refused.as_slice()),
            ("top_srvfail", self.top_srvfail.as_slice()),
            ("top_udp_ports", self.top_udp_ports.as_slice()),
            ("top_org_ids", self.top_org_ids.as_slice()),
            ("xact.in.top_slow", self.xact.inbound.top_slow.as_slice()),
            ("xact.out.top_slow", self.xact.outbound.top_slow.as_slice()),
        ]
    }
}
