// Probe telemetry models, one module per traffic domain

mod app;
mod common;
mod de;
mod dhcp;
mod dns;
mod packets;
mod pcap;
mod snapshot;

pub use app::{AppInfo, AppMetrics};
pub use common::{NameCount, PeriodPayload, Quantiles, Rates, top_is_sorted, top_total};
pub use dhcp::{DhcpPayload, DhcpRates, DhcpWirePackets};
pub use dns::{
    DnsCardinality, DnsPayload, DnsRates, DnsWirePackets, DnsXact, XactCounts, XactDirection,
};
pub use packets::{PacketCardinality, PacketPayload, PacketRates};
pub use pcap::PcapPayload;
pub use snapshot::StatSnapshot;
