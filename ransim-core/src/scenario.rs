//! Scenario configuration and the pre-simulation planning phase.
//!
//! A [`ScenarioParameters`] value describes the whole scenario. The
//! [`plan`](ScenarioParameters::plan) call runs the deterministic setup
//! pipeline (enumerate, partition, attach) and either yields a
//! [`ScenarioPlan`] ready to hand to an engine, or fails with a fatal
//! configuration error before any attachment is attempted.

use crate::{
    attach::{AttachmentPlan, attach},
    defaults::{
        DEFAULT_APP_START, DEFAULT_NUM_GNB, DEFAULT_QUOTA_PER_CLASS, DEFAULT_SIM_TIME,
        DEFAULT_UE_PER_GNB, MIN_GNBS, MIN_UES,
    },
    gnb::{Gnb, enumerate_gnbs},
    partition::{ClassGroups, ClassQuotas, PartitionError, partition},
    spectrum::{SpectrumError, SpectrumPlan},
    ue::enumerate_ues,
};
use std::time::Duration;
use thiserror::Error;

/// Everything that configures a scenario run.
///
/// The default value is the reference scenario: 3 base stations, 2 user
/// terminals each, per-class minimums of 2 voice / 3 browsing, one served
/// terminal per class per station, and a 100 ms run with traffic starting
/// at 10 ms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioParameters {
    /// Number of base stations.
    pub num_gnb: usize,
    /// Number of user terminals per base station.
    pub ue_per_gnb: usize,
    /// Per-class group minimums enforced by the partitioner.
    pub class_quotas: ClassQuotas,
    /// Per-station per-class serving quota used by the attachment scheduler.
    pub quota_per_class: u32,
    /// The spectrum division serving the two traffic classes.
    pub spectrum: SpectrumPlan,
    /// Simulated run length.
    pub sim_time: Duration,
    /// Traffic application start time; counters cover `app_start..sim_time`.
    pub app_start: Duration,
}

impl Default for ScenarioParameters {
    fn default() -> Self {
        Self {
            num_gnb: DEFAULT_NUM_GNB,
            ue_per_gnb: DEFAULT_UE_PER_GNB,
            class_quotas: ClassQuotas::default(),
            quota_per_class: DEFAULT_QUOTA_PER_CLASS,
            spectrum: SpectrumPlan::default(),
            sim_time: DEFAULT_SIM_TIME,
            app_start: DEFAULT_APP_START,
        }
    }
}

/// Fatal configuration error: the run must not proceed to attachment or
/// simulation.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario requires at least {MIN_GNBS} base stations, got {0}")]
    TooFewStations(usize),
    #[error("scenario requires at least {MIN_UES} user terminals, got {0}")]
    TooFewUserTerminals(usize),
    #[error("traffic must start before the run ends ({app_start:?} >= {sim_time:?})")]
    EmptyTrafficWindow {
        app_start: Duration,
        sim_time: Duration,
    },
    #[error(transparent)]
    Spectrum(#[from] SpectrumError),
    #[error(transparent)]
    Partition(#[from] PartitionError),
}

/// The pre-simulation output: classified groups and the attachment map,
/// ready to hand to a [`SimulationEngine`].
///
/// [`SimulationEngine`]: crate::engine::SimulationEngine
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioPlan {
    pub gnbs: Vec<Gnb>,
    pub groups: ClassGroups,
    pub attachment: AttachmentPlan,
}

impl ScenarioParameters {
    /// Total number of user terminals in the scenario.
    pub fn total_ues(&self) -> usize {
        self.num_gnb * self.ue_per_gnb
    }

    /// The traffic window the flow counters cover.
    pub fn traffic_window(&self) -> Duration {
        self.sim_time.saturating_sub(self.app_start)
    }

    /// Check the parameters against the configuration invariants.
    ///
    /// # Errors
    ///
    /// Any [`ScenarioError`] variant except `Partition`, which can only
    /// surface once the terminals are actually split in [`plan`].
    ///
    /// [`plan`]: ScenarioParameters::plan
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.num_gnb < MIN_GNBS {
            return Err(ScenarioError::TooFewStations(self.num_gnb));
        }
        if self.total_ues() < MIN_UES {
            return Err(ScenarioError::TooFewUserTerminals(self.total_ues()));
        }
        if self.app_start >= self.sim_time {
            return Err(ScenarioError::EmptyTrafficWindow {
                app_start: self.app_start,
                sim_time: self.sim_time,
            });
        }
        self.spectrum.validate()?;
        Ok(())
    }

    /// Run the deterministic setup pipeline: validate, enumerate the
    /// terminals and stations, partition by traffic class, attach.
    ///
    /// The result is bit-for-bit reproducible for equal parameters.
    ///
    /// # Errors
    ///
    /// Fatal [`ScenarioError`] if the configuration is invalid or a class
    /// group misses its minimum; no attachment is attempted in that case.
    pub fn plan(&self) -> Result<ScenarioPlan, ScenarioError> {
        self.validate()?;

        let ues = enumerate_ues(self.total_ues());
        let groups = partition(ues, self.class_quotas)?;

        let gnbs = enumerate_gnbs(self.num_gnb, self.quota_per_class);
        let attachment = attach(&gnbs, groups.clone());

        Ok(ScenarioPlan {
            gnbs,
            groups,
            attachment,
        })
    }
}
