//! The boundary to the external simulation engine.
//!
//! Everything radio-physical (propagation, antenna gain, PHY/MAC
//! scheduling, core-network tunneling, packet pacing) lives behind
//! [`SimulationEngine`]. The core hands an engine the scenario plan and
//! only ever reads back the per-flow counters.

use crate::{flow::FlowRecord, scenario::{ScenarioParameters, ScenarioPlan}};
use std::time::Duration;

/// What an engine reports after a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutcome {
    /// One record per observed (source, destination) flow, in the
    /// engine's classifier order.
    pub records: Vec<FlowRecord>,
    /// The elapsed traffic window the counters cover.
    pub duration: Duration,
}

/// A radio-stack simulation engine the scenario core can drive.
///
/// Implementations are expected to honor the attachment plan exactly:
/// a terminal the scheduler left unattached must not receive traffic.
pub trait SimulationEngine {
    /// Execute the simulated traffic for the planned scenario.
    fn run(
        &mut self,
        parameters: &ScenarioParameters,
        plan: &ScenarioPlan,
    ) -> anyhow::Result<SimulationOutcome>;
}
