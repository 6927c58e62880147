//! CLI runner: plan the scenario, drive the reference engine, and write
//! the per-flow performance report.
//!
//! Run with:
//!   cargo run -p ransim -- --gnbs 3 --ue-per-gnb 2
//!
//! Under the unmodified reference invocation the run doubles as a
//! regression check: the computed mean flow throughput and delay must
//! match the known-good values within ±0.01%.

use anyhow::{Context as _, bail};
use clap::Parser;
use ransim::{ScenarioParameters, SimulationEngine as _, StaticChannelEngine, aggregate};
use ransim_core::{partition::ClassQuotas, report};
use std::{path::PathBuf, time::Duration};
use tracing::{info, warn};

/// Known-good mean flow throughput of the reference scenario, in Mbps.
const REFERENCE_MEAN_THROUGHPUT_MBPS: f64 = 3.0;

/// Known-good mean flow delay of the reference scenario, in milliseconds.
const REFERENCE_MEAN_DELAY_MS: f64 = 1.25;

/// Relative tolerance of the regression self-check (±0.01%).
const REFERENCE_TOLERANCE: f64 = 0.0001;

/// Plan a small NR scenario, simulate its downlink traffic, and report
/// per-flow throughput, delay, jitter and loss.
#[derive(Debug, Parser)]
#[command(name = "ransim", version, about)]
struct Args {
    /// Number of base stations
    #[arg(long, default_value_t = 3)]
    gnbs: usize,

    /// Number of user terminals per base station
    #[arg(long, default_value_t = 2)]
    ue_per_gnb: usize,

    /// Per-station per-class serving quota
    #[arg(long, default_value_t = 1)]
    quota: u32,

    /// Minimum required number of voice terminals
    #[arg(long, default_value_t = 2)]
    min_voice: usize,

    /// Minimum required number of browsing terminals
    #[arg(long, default_value_t = 3)]
    min_browsing: usize,

    /// Simulated run length, in milliseconds
    #[arg(long, default_value_t = 100)]
    sim_time_ms: u64,

    /// Traffic application start time, in milliseconds
    #[arg(long, default_value_t = 10)]
    app_start_ms: u64,

    /// Seed for the engine's jitter source
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Directory the report file is written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Report file name
    #[arg(long, default_value = "default")]
    sim_tag: String,
}

impl Args {
    fn parameters(&self) -> ScenarioParameters {
        ScenarioParameters {
            num_gnb: self.gnbs,
            ue_per_gnb: self.ue_per_gnb,
            class_quotas: ClassQuotas {
                voice: self.min_voice,
                browsing: self.min_browsing,
            },
            quota_per_class: self.quota,
            spectrum: Default::default(),
            sim_time: Duration::from_millis(self.sim_time_ms),
            app_start: Duration::from_millis(self.app_start_ms),
        }
    }

    /// The self-check only covers the reference scenario; any other
    /// invocation reports success regardless of the computed means.
    fn is_reference_invocation(&self, parameters: &ScenarioParameters) -> bool {
        *parameters == ScenarioParameters::default() && self.seed == 0
    }
}

fn within_tolerance(value: f64, reference: f64) -> bool {
    let tolerance = REFERENCE_TOLERANCE * reference;
    value >= reference - tolerance && value <= reference + tolerance
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let parameters = args.parameters();

    let plan = parameters.plan().context("invalid scenario configuration")?;

    for ue in &plan.groups.voice {
        info!(ue = %ue.id(), "user terminal joins the voice group");
    }
    for ue in &plan.groups.browsing {
        info!(ue = %ue.id(), "user terminal joins the browsing group");
    }
    for attachment in &plan.attachment.attachments {
        info!(
            ue = %attachment.ue,
            gnb = %attachment.gnb,
            class = %attachment.class,
            "attached",
        );
    }
    for ue in &plan.attachment.skipped {
        warn!(ue = %ue.id(), "no station has capacity left, terminal stays unserved");
    }

    let mut engine = StaticChannelEngine::new(args.seed);
    let outcome = engine.run(&parameters, &plan)?;
    let flow_report = aggregate(&outcome.records, outcome.duration)?;

    let path = args.output_dir.join(&args.sim_tag);
    report::write_report(&path, &flow_report)
        .with_context(|| format!("can't open report sink {}", path.display()))?;
    info!(path = %path.display(), flows = flow_report.flows.len(), "report written");

    // echo the report for interactive inspection
    print!("{}", report::render(&flow_report));

    if args.is_reference_invocation(&parameters) {
        if !within_tolerance(
            flow_report.mean_throughput_mbps,
            REFERENCE_MEAN_THROUGHPUT_MBPS,
        ) {
            bail!(
                "self-check failed: mean flow throughput {} outside ±0.01% of {}",
                flow_report.mean_throughput_mbps,
                REFERENCE_MEAN_THROUGHPUT_MBPS,
            );
        }
        if !within_tolerance(flow_report.mean_delay_ms, REFERENCE_MEAN_DELAY_MS) {
            bail!(
                "self-check failed: mean flow delay {} outside ±0.01% of {}",
                flow_report.mean_delay_ms,
                REFERENCE_MEAN_DELAY_MS,
            );
        }
        info!("regression self-check passed");
    }

    Ok(())
}
