/*!
# ransim-core

Deterministic planning and reporting primitives for a small cellular
radio scenario: split user terminals into traffic-class groups, attach
them to base stations under per-class quotas, and summarize the per-flow
counters an external radio-stack engine reports after a run.

The crate never models propagation, SINR, or scheduling; that belongs
to the engine behind [`SimulationEngine`]. What it does model is exact
and reproducible: identical inputs give bit-for-bit identical plans and
reports.

## Pipeline

```text
ScenarioParameters::plan()
    ├── partition()  parity split into voice / browsing groups
    └── attach()     per-station, per-class quota attachment
          │
          ▼
   [ external engine runs the traffic ]
          │
          ▼
aggregate()  per-flow throughput/delay/jitter/loss and run means
report::render() / report::write_report()
```

## Example

```
use ransim_core::scenario::ScenarioParameters;

let plan = ScenarioParameters::default().plan()?;
assert_eq!(plan.attachment.attachments.len(), 6);
assert!(plan.attachment.skipped.is_empty());
# Ok::<(), ransim_core::scenario::ScenarioError>(())
```
*/

pub mod attach;
pub mod defaults;
pub mod engine;
pub mod flow;
pub mod gnb;
pub mod partition;
pub mod report;
pub mod scenario;
pub mod spectrum;
pub mod stats;
pub mod traffic;
pub mod ue;

pub use self::{
    attach::{Attachment, AttachmentPlan, attach},
    engine::{SimulationEngine, SimulationOutcome},
    flow::{FlowEndpoints, FlowId, FlowRecord, Protocol},
    gnb::{Gnb, GnbId},
    partition::{ClassGroups, ClassQuotas, PartitionError, partition},
    scenario::{ScenarioError, ScenarioParameters, ScenarioPlan},
    spectrum::{BandwidthPart, Frequency, SpectrumPlan},
    stats::{FlowReport, FlowSummary, StatsError, aggregate},
    traffic::{BearerKind, TrafficClass, TrafficProfile},
    ue::{Ue, UeId},
};
