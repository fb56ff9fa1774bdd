// Usage: visorstat [FILE]
//   FILE  overrides input.path from the config; `-` reads stdin.

use anyhow::{Context, Result};
use std::io::Read;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;
use visorstat::models::{StatSnapshot, top_total};
use visorstat::validate::Validate;
use visorstat::*;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

fn read_input(path: &str, mut stdin: impl Read) -> Result<String> {
    if path == "-" {
        let mut s = String::new();
        stdin.read_to_string(&mut s).context("reading stdin")?;
        Ok(s)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {path}"))
    }
}

fn log_summary(snapshot: &StatSnapshot) {
    if let Some(period) = snapshot.period() {
        let start = period
            .start_time()
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| period.start_ts.to_string());
        tracing::info!(start = %start, length_secs = period.length, "window");
    }
    let dns = &snapshot.dns;
    tracing::info!(
        total = dns.wire_packets.total,
        queries = dns.wire_packets.queries,
        replies = dns.wire_packets.replies,
        nxdomain = dns.wire_packets.nxdomain,
        qname_cardinality = dns.cardinality.qname,
        xact_in_p99_us = dns.xact.inbound.quantiles_us.p99,
        top_qname2 = top_total(&dns.top_qname2),
        "dns"
    );
    let dhcp = &snapshot.dhcp.wire_packets;
    tracing::info!(
        total = dhcp.total,
        discover = dhcp.discover,
        offer = dhcp.offer,
        request = dhcp.request,
        ack = dhcp.ack,
        "dhcp"
    );
    let packets = &snapshot.packets;
    tracing::info!(
        total = packets.total,
        inbound = packets.inbound,
        outbound = packets.outbound,
        pps_live = packets.rates.pps_total.live,
        src_ips_in = packets.cardinality.src_ips_in,
        dst_ips_out = packets.cardinality.dst_ips_out,
        "packets"
    );
    let pcap = &snapshot.pcap;
    if pcap.total_drops() > 0 || pcap.tcp_reassembly_errors > 0 {
        tracing::warn!(
            if_drops = pcap.if_drops,
            os_drops = pcap.os_drops,
            tcp_reassembly_errors = pcap.tcp_reassembly_errors,
            "capture losses"
        );
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let app_config = config::AppConfig::load()?;
    tracing::debug!(name = version::NAME, version = version::VERSION, "starting");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| app_config.input.path.clone());
    let input = read_input(&path, std::io::stdin())?;

    let snapshot = match &app_config.decode.window {
        Some(window) => decode::decode_window(&input, window),
        None => decode::decode_snapshot(&input),
    }
    .with_context(|| format!("decoding {path}"))?;

    log_summary(&snapshot);

    if app_config.decode.validate
        && let Err(e) = snapshot.validate()
    {
        for v in &e.violations {
            tracing::warn!(path = %v.path, "{}", v);
        }
        return Err(e.into());
    }

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
