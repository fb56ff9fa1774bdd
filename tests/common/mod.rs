// Shared test fixtures: probe documents as the probe renders them

#![allow(dead_code)]

use visorstat::models::*;

pub const FULL_SNAPSHOT: &str = r#"{
  "dns": {
    "wire_packets": {
      "filtered": 3, "ipv4": 90, "ipv6": 10, "queries": 55, "replies": 45,
      "tcp": 20, "total": 100, "udp": 80, "noerror": 40, "nxdomain": 3,
      "srvfail": 1, "refused": 1, "deep_samples": 100
    },
    "rates": { "total": { "live": 12, "p50": 10, "p90": 15, "p95": 18, "p99": 25 } },
    "cardinality": { "qname": 37 },
    "xact": {
      "counts": { "total": 44, "timed_out": 2 },
      "in": {
        "quantiles_us": { "p50": 120, "p90": 800, "p95": 1500, "p99": 9000 },
        "top_slow": [ { "name": "example.com", "estimate": 42 } ],
        "total": 30
      },
      "out": {
        "quantiles_us": { "p50": 300, "p90": 900, "p95": 1000, "p99": 4000 },
        "top_slow": [],
        "total": 14
      },
      "open": 1
    },
    "top_qname2": [ { "name": ".google.com", "estimate": 20 }, { "name": ".example.com", "estimate": 7 } ],
    "top_qname3": [ { "name": ".www.google.com", "estimate": 12 } ],
    "top_nxdomain": [],
    "top_qtype": [ { "name": "A", "estimate": 40 }, { "name": "AAAA", "estimate": 15 } ],
    "top_rcode": [ { "name": "NOERROR", "estimate": 40 } ],
    "top_refused": [],
    "top_srvfail": [],
    "top_udp_ports": [ { "name": "53", "estimate": 80 } ],
    "top_org_ids": [],
    "period": { "start_ts": 1614000000, "length": 60 }
  },
  "dhcp": {
    "wire_packets": {
      "filtered": 0, "total": 8, "deep_samples": 8,
      "discover": 2, "offer": 2, "request": 2, "ack": 2
    },
    "rates": { "total": { "live": 0, "p50": 0, "p90": 1, "p95": 1, "p99": 2 } },
    "period": { "start_ts": 1614000000, "length": 60 }
  },
  "packets": {
    "cardinality": { "dst_ips_out": 14, "src_ips_in": 9 },
    "ipv4": 900, "ipv6": 100, "tcp": 600, "total": 1000, "udp": 380,
    "in": 550, "out": 450, "other_l4": 20, "deep_samples": 1000,
    "rates": {
      "pps_in": { "live": 9, "p50": 8, "p90": 12, "p95": 14, "p99": 20 },
      "pps_out": { "live": 7, "p50": 6, "p90": 10, "p95": 11, "p99": 15 },
      "pps_total": { "live": 16, "p50": 14, "p90": 22, "p95": 25, "p99": 35 }
    },
    "top_ipv4": [ { "name": "10.0.0.1", "estimate": 400 } ],
    "top_ipv6": [ { "name": "fe80::1", "estimate": 60 } ],
    "top_geoLoc": [ { "name": "NA/United States", "estimate": 300 } ],
    "top_asn": [ { "name": "15169/GOOGLE", "estimate": 250 } ],
    "period": { "start_ts": 1614000000, "length": 60 }
  },
  "pcap": { "tcp_reassembly_errors": 5, "if_drops": 0, "os_drops": 2 }
}"#;

/// Windowed rendering: the snapshot sits under the window key, with the period hoisted into it.
pub fn windowed(window: &str, snapshot: &str) -> String {
    let mut inner: serde_json::Value = serde_json::from_str(snapshot).unwrap();
    inner["period"] = serde_json::json!({"start_ts": 1614000000, "length": 60});
    let mut doc = serde_json::Map::new();
    doc.insert(window.to_string(), inner);
    serde_json::Value::Object(doc).to_string()
}

pub fn rates(live: u64, p50: u64, p90: u64, p95: u64, p99: u64) -> Rates {
    Rates {
        live,
        p50,
        p90,
        p95,
        p99,
    }
}

/// Every key of the field table present, every leaf a distinct non-zero value.
pub const DISTINCT_SNAPSHOT: &str = r#"{
  "dns": {
    "wire_packets": {
      "filtered": 1,
      "ipv4": 2,
      "ipv6": 3,
      "queries": 4,
      "replies": 5,
      "tcp": 6,
      "total": 7,
      "udp": 8,
      "noerror": 9,
      "nxdomain": 10,
      "srvfail": 11,
      "refused": 12,
      "deep_samples": 13
    },
    "rates": {
      "total": {
        "live": 14,
        "p50": 15,
        "p90": 16,
        "p95": 17,
        "p99": 18
      }
    },
    "cardinality": {
      "qname": 19
    },
    "xact": {
      "counts": {
        "total": 20,
        "timed_out": 21
      },
      "in": {
        "quantiles_us": {
          "p50": 22,
          "p90": 23,
          "p95": 24,
          "p99": 25
        },
        "top_slow": [
          {
            "name": "slow-in-a",
            "estimate": 26
          },
          {
            "name": "slow-in-b",
            "estimate": 27
          }
        ],
        "total": 28
      },
      "out": {
        "quantiles_us": {
          "p50": 29,
          "p90": 30,
          "p95": 31,
          "p99": 32
        },
        "top_slow": [
          {
            "name": "slow-out-a",
            "estimate": 33
          },
          {
            "name": "slow-out-b",
            "estimate": 34
          }
        ],
        "total": 35
      },
      "open": 36
    },
    "top_qname2": [
      {
        "name": "top_qname2-a",
        "estimate": 37
      },
      {
        "name": "top_qname2-b",
        "estimate": 38
      }
    ],
    "top_qname3": [
      {
        "name": "top_qname3-a",
        "estimate": 39
      },
      {
        "name": "top_qname3-b",
        "estimate": 40
      }
    ],
    "top_nxdomain": [
      {
        "name": "top_nxdomain-a",
        "estimate": 41
      },
      {
        "name": "top_nxdomain-b",
        "estimate": 42
      }
    ],
    "top_qtype": [
      {
        "name": "top_qtype-a",
        "estimate": 43
      },
      {
        "name": "top_qtype-b",
        "estimate": 44
      }
    ],
    "top_rcode": [
      {
        "name": "top_rcode-a",
        "estimate": 45
      },
      {
        "name": "top_rcode-b",
        "estimate": 46
      }
    ],
    "top_refused": [
      {
        "name": "top_refused-a",
        "estimate": 47
      },
      {
        "name": "top_refused-b",
        "estimate": 48
      }
    ],
    "top_srvfail": [
      {
        "name": "top_srvfail-a",
        "estimate": 49
      },
      {
        "name": "top_srvfail-b",
        "estimate": 50
      }
    ],
    "top_udp_ports": [
      {
        "name": "top_udp_ports-a",
        "estimate": 51
      },
      {
        "name": "top_udp_ports-b",
        "estimate": 52
      }
    ],
    "top_org_ids": [
      {
        "name": "top_org_ids-a",
        "estimate": 53
      },
      {
        "name": "top_org_ids-b",
        "estimate": 54
      }
    ],
    "period": {
      "start_ts": 55,
      "length": 56
    }
  },
  "dhcp": {
    "wire_packets": {
      "filtered": 57,
      "total": 58,
      "deep_samples": 59,
      "discover": 60,
      "offer": 61,
      "request": 62,
      "ack": 63
    },
    "rates": {
      "total": {
        "live": 64,
        "p50": 65,
        "p90": 66,
        "p95": 67,
        "p99": 68
      }
    },
    "period": {
      "start_ts": 69,
      "length": 70
    }
  },
  "packets": {
    "cardinality": {
      "dst_ips_out": 71,
      "src_ips_in": 72
    },
    "ipv4": 73,
    "ipv6": 74,
    "tcp": 75,
    "total": 76,
    "udp": 77,
    "in": 78,
    "out": 79,
    "other_l4": 80,
    "deep_samples": 81,
    "rates": {
      "pps_in": {
        "live": 82,
        "p50": 83,
        "p90": 84,
        "p95": 85,
        "p99": 86
      },
      "pps_out": {
        "live": 87,
        "p50": 88,
        "p90": 89,
        "p95": 90,
        "p99": 91
      },
      "pps_total": {
        "live": 92,
        "p50": 93,
        "p90": 94,
        "p95": 95,
        "p99": 96
      }
    },
    "top_ipv4": [
      {
        "name": "top_ipv4-a",
        "estimate": 97
      },
      {
        "name": "top_ipv4-b",
        "estimate": 98
      }
    ],
    "top_ipv6": [
      {
        "name": "top_ipv6-a",
        "estimate": 99
      },
      {
        "name": "top_ipv6-b",
        "estimate": 100
      }
    ],
    "top_geoLoc": [
      {
        "name": "top_geoLoc-a",
        "estimate": 101
      },
      {
        "name": "top_geoLoc-b",
        "estimate": 102
      }
    ],
    "top_asn": [
      {
        "name": "top_asn-a",
        "estimate": 103
      },
      {
        "name": "top_asn-b",
        "estimate": 104
      }
    ],
    "period": {
      "start_ts": 105,
      "length": 106
    }
  },
  "pcap": {
    "tcp_reassembly_errors": 107,
    "if_drops": 108,
    "os_drops": 109
  }
}"#;

/// `DISTINCT_SNAPSHOT`, written out field by field.
pub fn distinct_snapshot() -> StatSnapshot {
    StatSnapshot {
        dns: DnsPayload {
            wire_packets: DnsWirePackets {
                filtered: 1,
                ipv4: 2,
                ipv6: 3,
                queries: 4,
                replies: 5,
                tcp: 6,
                total: 7,
                udp: 8,
                noerror: 9,
                nxdomain: 10,
                srvfail: 11,
                refused: 12,
                deep_samples: 13,
            },
            rates: DnsRates {
                total: Rates {
                    live: 14,
                    p50: 15,
                    p90: 16,
                    p95: 17,
                    p99: 18,
                },
            },
            cardinality: DnsCardinality {
                qname: 19,
            },
            xact: DnsXact {
                counts: XactCounts {
                    total: 20,
                    timed_out: 21,
                },
                inbound: XactDirection {
                    quantiles_us: Quantiles {
                        p50: 22,
                        p90: 23,
                        p95: 24,
                        p99: 25,
                    },
                    top_slow: vec![
                        NameCount::new("slow-in-a", 26),
                        NameCount::new("slow-in-b", 27),
                    ],
                    total: 28,
                },
                outbound: XactDirection {
                    quantiles_us: Quantiles {
                        p50: 29,
                        p90: 30,
                        p95: 31,
                        p99: 32,
                    },
                    top_slow: vec![
                        NameCount::new("slow-out-a", 33),
                        NameCount::new("slow-out-b", 34),
                    ],
                    total: 35,
                },
                open: 36,
            },
            top_qname2: vec![
                NameCount::new("top_qname2-a", 37),
                NameCount::new("top_qname2-b", 38),
            ],
            top_qname3: vec![
                NameCount::new("top_qname3-a", 39),
                NameCount::new("top_qname3-b", 40),
            ],
            top_nx: vec![
                NameCount::new("top_nxdomain-a", 41),
                NameCount::new("top_nxdomain-b", 42),
            ],
            top_qtype: vec![
                NameCount::new("top_qtype-a", 43),
                NameCount::new("top_qtype-b", 44),
            ],
            top_rcode: vec![
                NameCount::new("top_rcode-a", 45),
                NameCount::new("top_rcode-b", 46),
            ],
            top_refused: vec![
                NameCount::new("top_refused-a", 47),
                NameCount::new("top_refused-b", 48),
            ],
            top_srvfail: vec![
                NameCount::new("top_srvfail-a", 49),
                NameCount::new("top_srvfail-b", 50),
            ],
            top_udp_ports: vec![
                NameCount::new("top_udp_ports-a", 51),
                NameCount::new("top_udp_ports-b", 52),
            ],
            top_org_ids: vec![
                NameCount::new("top_org_ids-a", 53),
                NameCount::new("top_org_ids-b", 54),
            ],
            period: PeriodPayload {
                start_ts: 55,
                length: 56,
            },
        },
        dhcp: DhcpPayload {
            wire_packets: DhcpWirePackets {
                filtered: 57,
                total: 58,
                deep_samples: 59,
                discover: 60,
                offer: 61,
                request: 62,
                ack: 63,
            },
            rates: DhcpRates {
                total: Rates {
                    live: 64,
                    p50: 65,
                    p90: 66,
                    p95: 67,
                    p99: 68,
                },
            },
            period: PeriodPayload {
                start_ts: 69,
                length: 70,
            },
        },
        packets: PacketPayload {
            cardinality: PacketCardinality {
                dst_ips_out: 71,
                src_ips_in: 72,
            },
            ipv4: 73,
            ipv6: 74,
            tcp: 75,
            total: 76,
            udp: 77,
            inbound: 78,
            outbound: 79,
            other_l4: 80,
            deep_samples: 81,
            rates: PacketRates {
                pps_in: Rates {
                    live: 82,
                    p50: 83,
                    p90: 84,
                    p95: 85,
                    p99: 86,
                },
                pps_out: Rates {
                    live: 87,
                    p50: 88,
                    p90: 89,
                    p95: 90,
                    p99: 91,
                },
                pps_total: Rates {
                    live: 92,
                    p50: 93,
                    p90: 94,
                    p95: 95,
                    p99: 96,
                },
            },
            top_ipv4: vec![
                NameCount::new("top_ipv4-a", 97),
                NameCount::new("top_ipv4-b", 98),
            ],
            top_ipv6: vec![
                NameCount::new("top_ipv6-a", 99),
                NameCount::new("top_ipv6-b", 100),
            ],
            top_geo_loc: vec![
                NameCount::new("top_geoLoc-a", 101),
                NameCount::new("top_geoLoc-b", 102),
            ],
            top_asn: vec![
                NameCount::new("top_asn-a", 103),
                NameCount::new("top_asn-b", 104),
            ],
            period: PeriodPayload {
                start_ts: 105,
                length: 106,
            },
        },
        pcap: PcapPayload {
            tcp_reassembly_errors: 107,
            if_drops: 108,
            os_drops: 109,
        },
    }
}
