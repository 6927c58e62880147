//! A deterministic reference engine.
//!
//! Models an idealized downlink: every attached terminal receives its
//! class's constant-rate UDP stream in full, delayed by a fixed number
//! of scheduling slots of the serving bandwidth part. Terminals the
//! attachment scheduler skipped receive nothing. No propagation or
//! SINR modeling; the point is a reproducible counter source for the
//! reporting pipeline and the regression self-check.

use rand_chacha::ChaChaRng;
use rand_core::{Rng, SeedableRng as _};
use ransim_core::{
    FlowEndpoints, FlowId, FlowRecord, Protocol, ScenarioParameters, ScenarioPlan,
    SimulationEngine, SimulationOutcome, TrafficClass, Ue,
};
use std::{
    net::{Ipv4Addr, SocketAddrV4},
    time::Duration,
};

/// Address of the remote host all downlink flows originate from.
const REMOTE_HOST: Ipv4Addr = Ipv4Addr::new(1, 0, 0, 2);

/// First ephemeral source port; each flow claims the next one.
const FIRST_SOURCE_PORT: u16 = 49_153;

/// Fixed radio latency, in scheduling slots of the serving bandwidth part.
const RADIO_DELAY_SLOTS: u32 = 8;

/// Upper bound (exclusive) of the per-packet delay variation, in nanoseconds.
const JITTER_SPAN_NS: u64 = 2_000;

/// Deterministic constant-rate downlink engine.
///
/// All randomness (the per-packet jitter accumulation) is drawn from a
/// single [`ChaChaRng`], so two runs with the same seed and plan produce
/// identical outcomes.
pub struct StaticChannelEngine {
    rng: ChaChaRng,
}

impl StaticChannelEngine {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaChaRng::seed_from_u64(seed),
        }
    }

    fn record(
        &mut self,
        id: FlowId,
        parameters: &ScenarioParameters,
        plan: &ScenarioPlan,
        ue: &Ue,
        class: TrafficClass,
        source_port: u16,
    ) -> FlowRecord {
        let profile = class.profile();
        let window = parameters.traffic_window();

        // constant pacing: λ packets per second over the traffic window
        let tx_packets =
            profile.packets_per_second as u64 * window.as_micros() as u64 / 1_000_000;
        let tx_bytes = tx_packets * profile.packet_size as u64;

        let endpoints = FlowEndpoints {
            source: SocketAddrV4::new(REMOTE_HOST, source_port),
            destination: SocketAddrV4::new(
                Ipv4Addr::new(7, 0, 0, (ue.id().value() & 0xff) as u8),
                profile.port,
            ),
        };

        let attached = plan.attachment.serving_gnb(ue.id()).is_some();
        let (rx_packets, rx_bytes, delay_sum, jitter_sum) = if attached {
            let slot = parameters.spectrum.part(class).slot_duration();
            let delay_sum = slot * RADIO_DELAY_SLOTS * tx_packets as u32;
            let jitter_ns: u64 = (0..tx_packets)
                .map(|_| self.rng.next_u64() % JITTER_SPAN_NS)
                .sum();
            (
                tx_packets,
                tx_bytes,
                delay_sum,
                Duration::from_nanos(jitter_ns),
            )
        } else {
            (0, 0, Duration::ZERO, Duration::ZERO)
        };

        FlowRecord {
            id,
            endpoints,
            protocol: Protocol::Udp,
            tx_packets,
            tx_bytes,
            rx_packets,
            rx_bytes,
            delay_sum,
            jitter_sum,
        }
    }
}

impl SimulationEngine for StaticChannelEngine {
    fn run(
        &mut self,
        parameters: &ScenarioParameters,
        plan: &ScenarioPlan,
    ) -> anyhow::Result<SimulationOutcome> {
        let mut records = Vec::with_capacity(plan.groups.len());
        let mut id = 0u64;
        let mut source_port = FIRST_SOURCE_PORT;

        // one downlink flow per terminal, browsing clients first (they
        // are installed first), then voice
        let flows = plan
            .groups
            .browsing
            .iter()
            .map(|ue| (ue, TrafficClass::Browsing))
            .chain(plan.groups.voice.iter().map(|ue| (ue, TrafficClass::Voice)));

        for (ue, class) in flows {
            id += 1;
            let record = self.record(FlowId::new(id), parameters, plan, ue, class, source_port);
            source_port += 1;
            records.push(record);
        }

        Ok(SimulationOutcome {
            records,
            duration: parameters.traffic_window(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ransim_core::aggregate;

    fn outcome(seed: u64) -> SimulationOutcome {
        let parameters = ScenarioParameters::default();
        let plan = parameters.plan().unwrap();
        StaticChannelEngine::new(seed)
            .run(&parameters, &plan)
            .unwrap()
    }

    #[test]
    fn reference_scenario_emits_one_flow_per_terminal() {
        let outcome = outcome(0);
        assert_eq!(outcome.records.len(), 6);
        assert_eq!(outcome.duration, Duration::from_millis(90));
    }

    #[test]
    fn attached_terminals_receive_everything() {
        for record in &outcome(0).records {
            assert_eq!(record.rx_packets, record.tx_packets);
            assert_eq!(record.rx_bytes, record.tx_bytes);
            assert_eq!(record.tx_packets, 900);
        }
    }

    #[test]
    fn per_class_byte_counts() {
        let records = outcome(0).records;
        // browsing flows first: 900 × 25 bytes, then voice: 900 × 50 bytes
        assert_eq!(records[0].tx_bytes, 22_500);
        assert_eq!(records[3].tx_bytes, 45_000);
    }

    #[test]
    fn reference_means_are_analytic() {
        let outcome = outcome(0);
        let report = aggregate(&outcome.records, outcome.duration).unwrap();

        // 3 browsing flows at 2 Mbps + 3 voice flows at 4 Mbps
        assert!((report.mean_throughput_mbps - 3.0).abs() < 1e-9);
        // 3 browsing flows at 2 ms (8 × 250µs) + 3 voice at 0.5 ms (8 × 62.5µs)
        assert!((report.mean_delay_ms - 1.25).abs() < 1e-9);
    }

    #[test]
    fn same_seed_same_outcome() {
        assert_eq!(outcome(42), outcome(42));
    }

    #[test]
    fn different_seed_changes_only_jitter() {
        let a = outcome(1);
        let b = outcome(2);
        assert_ne!(a, b);
        for (x, y) in a.records.iter().zip(&b.records) {
            assert_eq!(x.rx_bytes, y.rx_bytes);
            assert_eq!(x.delay_sum, y.delay_sum);
            assert_ne!(x.jitter_sum, y.jitter_sum);
        }
    }

    #[test]
    fn skipped_terminals_receive_nothing() {
        // 2 stations, quota 1: 4 of 8 terminals stay unattached
        let parameters = ScenarioParameters {
            num_gnb: 2,
            ue_per_gnb: 4,
            ..Default::default()
        };
        let plan = parameters.plan().unwrap();
        assert_eq!(plan.attachment.skipped.len(), 4);

        let outcome = StaticChannelEngine::new(0)
            .run(&parameters, &plan)
            .unwrap();

        let silent = outcome
            .records
            .iter()
            .filter(|record| record.rx_packets == 0)
            .count();
        assert_eq!(silent, 4);
        for record in outcome
            .records
            .iter()
            .filter(|record| record.rx_packets == 0)
        {
            assert!(record.tx_packets > 0, "traffic is still offered");
            assert_eq!(record.delay_sum, Duration::ZERO);
        }
    }

    #[test]
    fn flow_endpoints_use_class_ports() {
        let records = outcome(0).records;
        assert!(records[..3]
            .iter()
            .all(|record| record.endpoints.destination.port() == 1234));
        assert!(records[3..]
            .iter()
            .all(|record| record.endpoints.destination.port() == 1235));
    }
}
