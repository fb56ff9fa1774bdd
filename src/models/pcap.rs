// Capture pipeline health; covers the capture session, so no period

use serde::{Deserialize, Serialize};
use wincode::{SchemaRead, SchemaWrite};

use super::de::integer;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, SchemaRead, SchemaWrite)]
#[serde(default)]
pub struct PcapPayload {
    #[serde(deserialize_with = "integer")]
    pub tcp_reassembly_errors: u64,
    /// Dropped by the network interface.
    #[serde(deserialize_with = "integer")]
    pub if_drops: u64,
    /// Dropped by the OS capture buffer.
    #[serde(deserialize_with = "integer")]
    pub os_drops: u64,
}

impl PcapPayload {
    pub fn total_drops(&self) -> u64 {
        self.if_drops.saturating_add(self.os_drops)
    }
}
