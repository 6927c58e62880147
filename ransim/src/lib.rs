/*!
# ransim

Reference engine and CLI runner for [`ransim_core`] scenarios.

*/

mod engine;

// convenient re-export of `ransim_core` core objects
pub use ransim_core::{
    FlowRecord, FlowReport, ScenarioError, ScenarioParameters, ScenarioPlan, SimulationEngine,
    SimulationOutcome, TrafficClass, aggregate,
};

pub use self::engine::StaticChannelEngine;
