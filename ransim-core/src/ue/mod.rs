mod id;

pub use self::id::UeId;
use crate::traffic::TrafficClass;

/// A simulated user terminal.
///
/// A `Ue` starts out unclassified. The scenario partitioner stamps the
/// traffic class exactly once (see [`partition`]); the class is immutable
/// afterwards. A `Ue` whose class is still `None` has not been through
/// the partitioner and cannot be attached to a base station.
///
/// [`partition`]: crate::partition::partition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ue {
    id: UeId,

    /// set once by the partitioner, never overwritten
    class: Option<TrafficClass>,
}

impl Ue {
    /// Create a new, unclassified user terminal.
    pub const fn new(id: UeId) -> Self {
        Self { id, class: None }
    }

    /// Returns the unique identifier of this user terminal.
    #[inline]
    pub fn id(&self) -> UeId {
        self.id
    }

    /// Returns the traffic class, if the partitioner has assigned one.
    #[inline]
    pub fn class(&self) -> Option<TrafficClass> {
        self.class
    }

    /// Stamp the traffic class on this terminal.
    ///
    /// Only the partitioner calls this, and only on unclassified terminals.
    pub(crate) fn classify(mut self, class: TrafficClass) -> Self {
        debug_assert!(self.class.is_none(), "traffic class is assigned only once");
        self.class = Some(class);
        self
    }
}

/// Enumerate `count` user terminals with sequential identifiers starting at `1`.
///
/// [`UeId::ZERO`] is reserved as a sentinel and never appears in the result.
/// The returned order is the stable enumeration order that both the
/// partitioner and the attachment scheduler depend on.
pub fn enumerate_ues(count: usize) -> Vec<Ue> {
    let mut id = UeId::ZERO;
    (0..count)
        .map(|_| {
            id = id.next();
            Ue::new(id)
        })
        .collect()
}
