//! Scenario partitioner: split user terminals into traffic-class groups.
//!
//! The split is by position parity over the stable enumeration order:
//! even index to voice, odd index to browsing. This yields an even split
//! ±1 for any terminal count and is fully reproducible from the input
//! order alone; it is deliberately not load-based or random.

use crate::{
    defaults::{MIN_BROWSING_UES, MIN_VOICE_UES},
    traffic::TrafficClass,
    ue::Ue,
};
use thiserror::Error;

/// Minimum group sizes a valid scenario requires, per traffic class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassQuotas {
    pub voice: usize,
    pub browsing: usize,
}

impl Default for ClassQuotas {
    fn default() -> Self {
        Self {
            voice: MIN_VOICE_UES,
            browsing: MIN_BROWSING_UES,
        }
    }
}

impl ClassQuotas {
    fn minimum(&self, class: TrafficClass) -> usize {
        match class {
            TrafficClass::Voice => self.voice,
            TrafficClass::Browsing => self.browsing,
        }
    }
}

/// The partitioner's output: one group per traffic class, each in the
/// original enumeration order, every terminal stamped with its class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassGroups {
    pub voice: Vec<Ue>,
    pub browsing: Vec<Ue>,
}

impl ClassGroups {
    /// Total number of terminals across both groups.
    pub fn len(&self) -> usize {
        self.voice.len() + self.browsing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voice.is_empty() && self.browsing.is_empty()
    }
}

/// Error returned when the partitioned groups do not satisfy the scenario's
/// configured minimums. Fatal: setup must not proceed to attachment.
#[derive(Debug, Error)]
pub enum PartitionError {
    #[error("{class} group holds {len} terminal(s), the scenario requires at least {minimum}")]
    ClassBelowMinimum {
        class: TrafficClass,
        len: usize,
        minimum: usize,
    },
}

/// Split `ues` into disjoint traffic-class groups by position parity.
///
/// Iterates the terminals in their given order: even-indexed terminals are
/// stamped [`TrafficClass::Voice`], odd-indexed ones
/// [`TrafficClass::Browsing`]. Each group preserves the input order.
///
/// # Errors
///
/// [`PartitionError::ClassBelowMinimum`] when either group ends up smaller
/// than its configured minimum. The voice group is checked first.
pub fn partition(ues: Vec<Ue>, quotas: ClassQuotas) -> Result<ClassGroups, PartitionError> {
    let mut voice = Vec::with_capacity(ues.len().div_ceil(2));
    let mut browsing = Vec::with_capacity(ues.len() / 2);

    for (index, ue) in ues.into_iter().enumerate() {
        if index % 2 == 0 {
            voice.push(ue.classify(TrafficClass::Voice));
        } else {
            browsing.push(ue.classify(TrafficClass::Browsing));
        }
    }

    let groups = ClassGroups { voice, browsing };

    for (class, len) in [
        (TrafficClass::Voice, groups.voice.len()),
        (TrafficClass::Browsing, groups.browsing.len()),
    ] {
        let minimum = quotas.minimum(class);
        if len < minimum {
            return Err(PartitionError::ClassBelowMinimum {
                class,
                len,
                minimum,
            });
        }
    }

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ue::{UeId, enumerate_ues};

    #[test]
    fn groups_cover_the_input_set() {
        for n in 5..32 {
            let ues = enumerate_ues(n);
            let groups = partition(ues.clone(), ClassQuotas::default()).unwrap();

            assert_eq!(groups.len(), n);

            // disjoint, and the union is the input set in order
            let mut merged: Vec<UeId> = groups
                .voice
                .iter()
                .chain(groups.browsing.iter())
                .map(Ue::id)
                .collect();
            merged.sort();
            let input: Vec<UeId> = ues.iter().map(Ue::id).collect();
            assert_eq!(merged, input);
        }
    }

    #[test]
    fn split_is_even_plus_minus_one() {
        for n in 5..32 {
            let groups = partition(enumerate_ues(n), ClassQuotas::default()).unwrap();
            assert_eq!(groups.voice.len(), n.div_ceil(2));
            assert_eq!(groups.browsing.len(), n / 2);
        }
    }

    #[test]
    fn alternation_starts_with_voice() {
        let groups = partition(enumerate_ues(6), ClassQuotas::default()).unwrap();
        let voice: Vec<u64> = groups.voice.iter().map(|ue| ue.id().value()).collect();
        let browsing: Vec<u64> = groups.browsing.iter().map(|ue| ue.id().value()).collect();
        assert_eq!(voice, vec![1, 3, 5]);
        assert_eq!(browsing, vec![2, 4, 6]);
    }

    #[test]
    fn every_terminal_is_stamped() {
        let groups = partition(enumerate_ues(7), ClassQuotas::default()).unwrap();
        assert!(
            groups
                .voice
                .iter()
                .all(|ue| ue.class() == Some(TrafficClass::Voice))
        );
        assert!(
            groups
                .browsing
                .iter()
                .all(|ue| ue.class() == Some(TrafficClass::Browsing))
        );
    }

    #[test]
    fn identical_input_gives_identical_groups() {
        let a = partition(enumerate_ues(9), ClassQuotas::default()).unwrap();
        let b = partition(enumerate_ues(9), ClassQuotas::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn four_terminals_cannot_meet_two_plus_three() {
        // 4 terminals split 2/2; the browsing minimum of 3 cannot be met.
        let err = partition(
            enumerate_ues(4),
            ClassQuotas {
                voice: 2,
                browsing: 3,
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PartitionError::ClassBelowMinimum {
                class: TrafficClass::Browsing,
                len: 2,
                minimum: 3,
            }
        ));
    }

    #[test]
    fn voice_minimum_is_checked_first() {
        let err = partition(
            enumerate_ues(1),
            ClassQuotas {
                voice: 2,
                browsing: 0,
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PartitionError::ClassBelowMinimum {
                class: TrafficClass::Voice,
                ..
            }
        ));
    }
}
