//! Textual rendering of a [`FlowReport`] and the report sink.
//!
//! The format is fixed: one block per flow in input order, six decimal
//! places for every derived metric, then two trailing summary lines.
//! Downstream tooling parses these blocks, so the layout is part of the
//! crate's contract.

use crate::stats::{FlowReport, FlowSummary};
use std::{
    fmt::Write as _,
    fs::File,
    io::{self, Write as _},
    path::Path,
};

fn render_flow(out: &mut String, flow: &FlowSummary) {
    _ = writeln!(
        out,
        "Flow {} ({}) proto {}",
        flow.id, flow.endpoints, flow.protocol
    );
    _ = writeln!(out, "  Tx Packets: {}", flow.tx_packets);
    _ = writeln!(out, "  Tx Bytes:   {}", flow.tx_bytes);
    _ = writeln!(out, "  TxOffered:  {:.6} Mbps", flow.tx_offered_mbps);
    _ = writeln!(out, "  Rx Bytes:   {}", flow.rx_bytes);
    _ = writeln!(out, "  Lost Packets: {}", flow.lost_packets);
    match flow.packet_loss_percent {
        Some(percent) => _ = writeln!(out, "  Packet loss: {percent:.6}%"),
        // nothing transmitted: a loss ratio is undefined
        None => _ = writeln!(out, "  Packet loss: n/a"),
    }
    if flow.rx_packets > 0 {
        _ = writeln!(out, "  Throughput: {:.6} Mbps", flow.throughput_mbps);
        _ = writeln!(out, "  Mean delay:  {:.6} ms", flow.mean_delay_ms);
        _ = writeln!(out, "  Mean jitter:  {:.6} ms", flow.mean_jitter_ms);
    } else {
        _ = writeln!(out, "  Throughput:  0 Mbps");
        _ = writeln!(out, "  Mean delay:  0 ms");
        _ = writeln!(out, "  Mean jitter: 0 ms");
    }
    _ = writeln!(out, "  Rx Packets: {}", flow.rx_packets);
}

/// Render the full report to its textual form.
pub fn render(report: &FlowReport) -> String {
    let mut out = String::new();
    for flow in &report.flows {
        render_flow(&mut out, flow);
    }
    _ = writeln!(out);
    _ = writeln!(out);
    _ = writeln!(
        out,
        "  Mean flow throughput: {:.6}",
        report.mean_throughput_mbps
    );
    _ = writeln!(out, "  Mean flow delay: {:.6}", report.mean_delay_ms);
    out
}

/// Write the rendered report to `path` in one sequential write.
///
/// Truncates any existing file. The write is flushed before returning;
/// a failure to open the sink is fatal to the surrounding run and must
/// be propagated, not retried.
pub fn write_report(path: &Path, report: &FlowReport) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(render(report).as_bytes())?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        flow::{FlowEndpoints, FlowId, FlowRecord, Protocol},
        stats::aggregate,
    };
    use std::time::Duration;

    fn report() -> FlowReport {
        let record = FlowRecord {
            id: FlowId::new(1),
            endpoints: FlowEndpoints {
                source: "1.0.0.2:49153".parse().unwrap(),
                destination: "7.0.0.1:1235".parse().unwrap(),
            },
            protocol: Protocol::Udp,
            tx_packets: 900,
            tx_bytes: 45_000,
            rx_packets: 900,
            rx_bytes: 45_000,
            delay_sum: Duration::from_millis(450),
            jitter_sum: Duration::ZERO,
        };
        aggregate(&[record], Duration::from_millis(90)).unwrap()
    }

    #[test]
    fn flow_block_layout() {
        let rendered = render(&report());
        let expected = "\
Flow 1 (1.0.0.2:49153 -> 7.0.0.1:1235) proto UDP
  Tx Packets: 900
  Tx Bytes:   45000
  TxOffered:  4.000000 Mbps
  Rx Bytes:   45000
  Lost Packets: 0
  Packet loss: 0.000000%
  Throughput: 4.000000 Mbps
  Mean delay:  0.500000 ms
  Mean jitter:  0.000000 ms
  Rx Packets: 900
";
        assert!(
            rendered.starts_with(expected),
            "unexpected flow block:\n{rendered}"
        );
    }

    #[test]
    fn trailing_summary_lines() {
        let rendered = render(&report());
        assert!(rendered.ends_with(
            "\n\n  Mean flow throughput: 4.000000\n  Mean flow delay: 0.500000\n"
        ));
    }

    #[test]
    fn zero_rx_flow_block() {
        let record = FlowRecord {
            id: FlowId::new(2),
            endpoints: FlowEndpoints {
                source: "1.0.0.2:49154".parse().unwrap(),
                destination: "7.0.0.2:1234".parse().unwrap(),
            },
            protocol: Protocol::Udp,
            tx_packets: 900,
            tx_bytes: 22_500,
            rx_packets: 0,
            rx_bytes: 0,
            delay_sum: Duration::ZERO,
            jitter_sum: Duration::ZERO,
        };
        let rendered = render(&aggregate(&[record], Duration::from_millis(90)).unwrap());

        assert!(rendered.contains("  Throughput:  0 Mbps\n"));
        assert!(rendered.contains("  Mean delay:  0 ms\n"));
        assert!(rendered.contains("  Mean jitter: 0 ms\n"));
        assert!(rendered.contains("  Packet loss: 100.000000%\n"));
    }

    #[test]
    fn zero_tx_flow_renders_loss_as_not_applicable() {
        let record = FlowRecord {
            id: FlowId::new(3),
            endpoints: FlowEndpoints {
                source: "1.0.0.2:49155".parse().unwrap(),
                destination: "7.0.0.3:1234".parse().unwrap(),
            },
            protocol: Protocol::Udp,
            tx_packets: 0,
            tx_bytes: 0,
            rx_packets: 0,
            rx_bytes: 0,
            delay_sum: Duration::ZERO,
            jitter_sum: Duration::ZERO,
        };
        let rendered = render(&aggregate(&[record], Duration::from_millis(90)).unwrap());
        assert!(rendered.contains("  Packet loss: n/a\n"));
    }

    #[test]
    fn write_report_creates_the_sink() {
        let dir = std::env::temp_dir().join("ransim-report-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("default");

        write_report(&path, &report()).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render(&report()));
    }

    #[test]
    fn write_report_to_missing_directory_fails() {
        let path = Path::new("/nonexistent-ransim-dir/default");
        assert!(write_report(path, &report()).is_err());
    }
}
