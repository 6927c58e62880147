//! Flow statistics aggregation.
//!
//! Converts the external engine's raw per-flow counters into derived
//! throughput/delay/jitter/loss metrics and the two scalar run summaries.
//! Pure over its inputs; rendering lives in [`report`](crate::report).

use crate::flow::{FlowEndpoints, FlowId, FlowRecord, Protocol};
use std::time::Duration;
use thiserror::Error;

/// Error returned when the aggregation inputs are unusable.
#[derive(Debug, Error)]
pub enum StatsError {
    /// The traffic window must be strictly positive to derive rates.
    #[error("flow duration must be positive, got {0:?}")]
    InvalidDuration(Duration),
}

/// Derived metrics for a single flow.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowSummary {
    pub id: FlowId,
    pub endpoints: FlowEndpoints,
    pub protocol: Protocol,
    pub tx_packets: u64,
    pub tx_bytes: u64,
    pub rx_packets: u64,
    pub rx_bytes: u64,
    /// `tx_packets − rx_packets`.
    pub lost_packets: u64,
    /// Loss as a percentage of transmitted packets. `None` when nothing
    /// was transmitted: a zero denominator is a data-integrity condition
    /// and is reported as not-applicable, never as a number.
    pub packet_loss_percent: Option<f64>,
    /// Offered load, from the transmitted byte count.
    pub tx_offered_mbps: f64,
    /// Achieved throughput. Exactly `0` for flows with no received packets.
    pub throughput_mbps: f64,
    /// Mean one-way delay. Exactly `0` for flows with no received packets.
    pub mean_delay_ms: f64,
    /// Mean delay variation. Exactly `0` for flows with no received packets.
    pub mean_jitter_ms: f64,
}

impl FlowSummary {
    fn derive(record: &FlowRecord, duration_secs: f64) -> Self {
        let tx_offered_mbps = record.tx_bytes as f64 * 8.0 / duration_secs / 1e6;

        let lost_packets = record.tx_packets.saturating_sub(record.rx_packets);
        let packet_loss_percent = (record.tx_packets > 0)
            .then(|| lost_packets as f64 / record.tx_packets as f64 * 100.0);

        let (throughput_mbps, mean_delay_ms, mean_jitter_ms) = if record.rx_packets > 0 {
            (
                record.rx_bytes as f64 * 8.0 / duration_secs / 1e6,
                1_000.0 * record.delay_sum.as_secs_f64() / record.rx_packets as f64,
                1_000.0 * record.jitter_sum.as_secs_f64() / record.rx_packets as f64,
            )
        } else {
            (0.0, 0.0, 0.0)
        };

        Self {
            id: record.id,
            endpoints: record.endpoints,
            protocol: record.protocol,
            tx_packets: record.tx_packets,
            tx_bytes: record.tx_bytes,
            rx_packets: record.rx_packets,
            rx_bytes: record.rx_bytes,
            lost_packets,
            packet_loss_percent,
            tx_offered_mbps,
            throughput_mbps,
            mean_delay_ms,
            mean_jitter_ms,
        }
    }
}

/// The aggregated view of a run: per-flow summaries in input order plus
/// the two scalar means.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowReport {
    pub flows: Vec<FlowSummary>,
    /// Mean of the per-flow throughputs. Flows that received nothing add
    /// nothing to the numerator but still count in the denominator.
    pub mean_throughput_mbps: f64,
    /// Mean of the per-flow mean delays. Same denominator policy as the
    /// throughput mean: the total flow count, not the contributing count.
    pub mean_delay_ms: f64,
}

/// Aggregate the raw flow counters observed over `duration` into derived
/// per-flow metrics and the run means.
///
/// Flows are summarized in the iteration order of `records`. Flows with
/// `rx_packets == 0` report zero-valued derived metrics and do not
/// contribute to the mean numerators; the means still divide by the total
/// flow count. An empty record set yields means of `0`.
///
/// # Errors
///
/// [`StatsError::InvalidDuration`] when `duration` is zero.
pub fn aggregate(records: &[FlowRecord], duration: Duration) -> Result<FlowReport, StatsError> {
    if duration.is_zero() {
        return Err(StatsError::InvalidDuration(duration));
    }
    let duration_secs = duration.as_secs_f64();

    let mut throughput_total = 0.0;
    let mut delay_total = 0.0;

    let flows: Vec<FlowSummary> = records
        .iter()
        .map(|record| {
            let summary = FlowSummary::derive(record, duration_secs);
            if record.rx_packets > 0 {
                throughput_total += summary.throughput_mbps;
                delay_total += summary.mean_delay_ms;
            }
            summary
        })
        .collect();

    // Both means divide by the total flow count, including zero-rx flows.
    // Downstream consumers depend on this exact averaging policy.
    let count = flows.len() as f64;
    let (mean_throughput_mbps, mean_delay_ms) = if flows.is_empty() {
        (0.0, 0.0)
    } else {
        (throughput_total / count, delay_total / count)
    };

    Ok(FlowReport {
        flows,
        mean_throughput_mbps,
        mean_delay_ms,
    })
}
