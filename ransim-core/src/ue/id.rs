use anyhow::anyhow;
use std::{fmt, str};

/// The identifier of a user terminal (UE) in the scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(C)]
pub struct UeId(u64);

impl UeId {
    pub const ZERO: Self = UeId::new(0);

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

impl str::FromStr for UeId {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self).map_err(|error| anyhow!("{error}"))
    }
}

impl fmt::Display for UeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
