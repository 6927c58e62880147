use anyhow::anyhow;
use std::{fmt, str};

/// The identifier of a base station (gNB) in the scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(C)]
pub struct GnbId(u64);

impl GnbId {
    pub const ZERO: Self = GnbId::new(0);

    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use = "function does not modify the current value"]
    pub(crate) fn next(self) -> Self {
        Self::new(self.0 + 1)
    }

    /// Returns the raw numeric value of this identifier.
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl str::FromStr for GnbId {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self).map_err(|error| anyhow!("{error}"))
    }
}

impl fmt::Display for GnbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
