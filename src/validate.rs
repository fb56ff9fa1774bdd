// Client-side checks for trusted input. Decoding never runs these implicitly.

use std::fmt;

use crate::models::{
    DhcpPayload, DnsPayload, NameCount, PacketPayload, PcapPayload, Quantiles, StatSnapshot,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// Top-N entry with an empty label.
    EmptyName,
    /// Percentiles not in p50 <= p90 <= p95 <= p99 order.
    NonMonotonicPercentiles,
}

/// One failed check, located by its dotted wire path (e.g. `dns.top_qname2[3].name`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ViolationKind::EmptyName => write!(f, "{}: empty name", self.path),
            ViolationKind::NonMonotonicPercentiles => {
                write!(f, "{}: percentiles not non-decreasing", self.path)
            }
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", describe(.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

fn describe(violations: &[Violation]) -> String {
    match violations {
        [] => "no violations".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{first} (and {} more)", rest.len()),
    }
}

pub trait Validate {
    /// Append every violation found, with paths under `prefix`.
    fn check(&self, prefix: &str, out: &mut Vec<Violation>);

    fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();
        self.check("", &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations })
        }
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn check_top(list: &[NameCount], path: &str, out: &mut Vec<Violation>) {
    for (i, entry) in list.iter().enumerate() {
        if entry.name.is_empty() {
            out.push(Violation {
                path: format!("{path}[{i}].name"),
                kind: ViolationKind::EmptyName,
            });
        }
    }
}

fn check_quantiles(q: &Quantiles, path: String, out: &mut Vec<Violation>) {
    if !q.is_monotonic() {
        out.push(Violation {
            path,
            kind: ViolationKind::NonMonotonicPercentiles,
        });
    }
}

impl Validate for DnsPayload {
    fn check(&self, prefix: &str, out: &mut Vec<Violation>) {
        check_quantiles(
            &self.rates.total.quantiles(),
            join(prefix, "rates.total"),
            out,
        );
        check_quantiles(
            &self.xact.inbound.quantiles_us,
            join(prefix, "xact.in.quantiles_us"),
            out,
        );
        check_quantiles(
            &self.xact.outbound.quantiles_us,
            join(prefix, "xact.out.quantiles_us"),
            out,
        );
        for (key, list) in self.top_lists() {
            check_top(list, &join(prefix, key), out);
        }
    }
}

impl Validate for DhcpPayload {
    fn check(&self, prefix: &str, out: &mut Vec<Violation>) {
        check_quantiles(
            &self.rates.total.quantiles(),
            join(prefix, "rates.total"),
            out,
        );
    }
}

impl Validate for PacketPayload {
    fn check(&self, prefix: &str, out: &mut Vec<Violation>) {
        for (key, rates) in self.rate_histograms() {
            check_quantiles(&rates.quantiles(), join(prefix, key), out);
        }
        for (key, list) in self.top_lists() {
            check_top(list, &join(prefix, key), out);
        }
    }
}

impl Validate for PcapPayload {
    // Counters only; the type already rules out negatives.
    fn check(&self, _prefix: &str, _out: &mut Vec<Violation>) {}
}

impl Validate for StatSnapshot {
    fn check(&self, prefix: &str, out: &mut Vec<Violation>) {
        self.dns.check(&join(prefix, "dns"), out);
        self.dhcp.check(&join(prefix, "dhcp"), out);
        self.packets.check(&join(prefix, "packets"), out);
        self.pcap.check(&join(prefix, "pcap"), out);
    }
}
