mod id;

pub use self::id::GnbId;
use crate::defaults::DEFAULT_QUOTA_PER_CLASS;

/// A simulated base station.
///
/// A `Gnb` serves at most `quota_per_class` user terminals of each traffic
/// class. The quota is a configuration-time constant; the attachment
/// scheduler never exceeds it (see [`attach`]).
///
/// [`attach`]: crate::attach::attach
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gnb {
    id: GnbId,
    quota_per_class: u32,
}

impl Gnb {
    /// Create a base station with the default per-class serving quota.
    pub const fn new(id: GnbId) -> Self {
        Self {
            id,
            quota_per_class: DEFAULT_QUOTA_PER_CLASS,
        }
    }

    /// Create a base station with an explicit per-class serving quota.
    pub const fn with_quota(id: GnbId, quota_per_class: u32) -> Self {
        Self {
            id,
            quota_per_class,
        }
    }

    /// Returns the unique identifier of this base station.
    #[inline]
    pub fn id(&self) -> GnbId {
        self.id
    }

    /// How many user terminals of each traffic class this station may serve.
    #[inline]
    pub fn quota_per_class(&self) -> u32 {
        self.quota_per_class
    }
}

/// Enumerate `count` base stations with sequential identifiers starting at `1`,
/// each with the given per-class serving quota.
///
/// The returned order is the stable enumeration order the attachment
/// scheduler depends on.
pub fn enumerate_gnbs(count: usize, quota_per_class: u32) -> Vec<Gnb> {
    let mut id = GnbId::ZERO;
    (0..count)
        .map(|_| {
            id = id.next();
            Gnb::with_quota(id, quota_per_class)
        })
        .collect()
}
