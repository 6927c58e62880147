//! Cell attachment scheduler: assign each classified terminal to at most
//! one serving base station.
//!
//! Stations are filled in their enumeration order. Within one station the
//! slots alternate between the two class queues (even slot → voice, odd
//! slot → browsing) so a station's capacity interleaves both classes
//! rather than filling one class first. A terminal that no station has
//! capacity left for stays unattached; that is reportable, not fatal.

use crate::{
    gnb::{Gnb, GnbId},
    partition::ClassGroups,
    traffic::TrafficClass,
    ue::{Ue, UeId},
};
use std::collections::VecDeque;

/// One (terminal → station) assignment produced by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attachment {
    pub ue: UeId,
    pub gnb: GnbId,
    pub class: TrafficClass,
}

/// The scheduler's full output: the attachments in the order they were
/// made, plus the terminals every station's quota left unserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentPlan {
    pub attachments: Vec<Attachment>,
    pub skipped: Vec<Ue>,
}

impl AttachmentPlan {
    /// The station serving `ue`, if any.
    pub fn serving_gnb(&self, ue: UeId) -> Option<GnbId> {
        self.attachments
            .iter()
            .find(|attachment| attachment.ue == ue)
            .map(|attachment| attachment.gnb)
    }

    /// How many terminals of `class` are attached to `gnb`.
    pub fn served_count(&self, gnb: GnbId, class: TrafficClass) -> usize {
        self.attachments
            .iter()
            .filter(|attachment| attachment.gnb == gnb && attachment.class == class)
            .count()
    }
}

/// Attach the partitioned terminals to the given base stations.
///
/// Each station offers `2 × quota_per_class` slots, alternating voice /
/// browsing by slot parity. Every slot pulls the next unattached terminal
/// from the matching class queue (FIFO, original group order). When a
/// queue is exhausted the slot stays empty; the other class never
/// backfills it. After the last station, whatever remains in either queue
/// is returned as `skipped`.
///
/// Given identical station and group orderings, the output is bit-for-bit
/// reproducible.
pub fn attach(gnbs: &[Gnb], groups: ClassGroups) -> AttachmentPlan {
    let mut voice: VecDeque<Ue> = groups.voice.into();
    let mut browsing: VecDeque<Ue> = groups.browsing.into();

    let mut attachments = Vec::new();

    for gnb in gnbs {
        for slot in 0..2 * gnb.quota_per_class() {
            let queue = if slot % 2 == 0 {
                &mut voice
            } else {
                &mut browsing
            };
            let Some(ue) = queue.pop_front() else {
                // queue exhausted: the slot stays empty, no backfill
                continue;
            };
            attachments.push(Attachment {
                ue: ue.id(),
                gnb: gnb.id(),
                // the partitioner stamps every terminal before attachment
                class: ue.class().expect("attaching an unclassified terminal"),
            });
        }
    }

    let skipped = voice.into_iter().chain(browsing).collect();

    AttachmentPlan {
        attachments,
        skipped,
    }
}
