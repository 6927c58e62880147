use crate::spectrum::{BandwidthPart, Frequency};
use std::time::Duration;

/// Default number of base stations in the reference scenario.
pub const DEFAULT_NUM_GNB: usize = 3;

/// Default number of user terminals per base station.
///
/// The total UE count of the reference scenario is
/// `DEFAULT_NUM_GNB * DEFAULT_UE_PER_GNB`.
pub const DEFAULT_UE_PER_GNB: usize = 2;

/// Default per-station per-class serving quota.
///
/// See [`Gnb::quota_per_class`] for more details
///
/// [`Gnb::quota_per_class`]: crate::gnb::Gnb::quota_per_class
pub const DEFAULT_QUOTA_PER_CLASS: u32 = 1;

/// Minimum number of voice user terminals a valid scenario requires.
pub const MIN_VOICE_UES: usize = 2;

/// Minimum number of browsing user terminals a valid scenario requires.
pub const MIN_BROWSING_UES: usize = 3;

/// Minimum number of base stations a valid scenario requires.
pub const MIN_GNBS: usize = 2;

/// Minimum total number of user terminals a valid scenario requires.
pub const MIN_UES: usize = 5;

/// Default simulated run length.
pub const DEFAULT_SIM_TIME: Duration = Duration::from_millis(100);

/// Default traffic application start time.
///
/// Flow counters only cover the window from here to the end of the run,
/// so the reporting duration of the reference scenario is 90 ms.
pub const DEFAULT_APP_START: Duration = Duration::from_millis(10);

/// Downlink UDP payload size for browsing traffic, in bytes.
pub const PACKET_SIZE_BROWSING: u32 = 25;

/// Downlink UDP payload size for voice traffic, in bytes.
pub const PACKET_SIZE_VOICE: u32 = 50;

/// Constant downlink packet rate (λ) for both traffic classes.
pub const DEFAULT_PACKETS_PER_SECOND: u32 = 10_000;

/// Destination port the browsing sink listens on.
pub const DL_PORT_BROWSING: u16 = 1234;

/// Destination port the voice sink listens on.
pub const DL_PORT_VOICE: u16 = 1235;

/// Lower bound of the supported operating range.
pub const OPERATING_RANGE_MIN: Frequency = Frequency::from_ghz(2);

/// Upper bound of the supported operating range.
pub const OPERATING_RANGE_MAX: Frequency = Frequency::from_ghz(100);

/// Default bandwidth part serving voice traffic.
///
/// ```
/// # use ransim_core::defaults::*;
/// assert_eq!(DEFAULT_VOICE_BWP.center.to_string(), "28ghz");
/// ```
pub const DEFAULT_VOICE_BWP: BandwidthPart = BandwidthPart {
    center: Frequency::from_ghz(28),
    bandwidth: Frequency::from_mhz(50),
    numerology: 4,
};

/// Default bandwidth part serving browsing traffic.
///
/// ```
/// # use ransim_core::defaults::*;
/// assert_eq!(DEFAULT_BROWSING_BWP.center.to_string(), "28200mhz");
/// ```
pub const DEFAULT_BROWSING_BWP: BandwidthPart = BandwidthPart {
    center: Frequency::from_mhz(28_200),
    bandwidth: Frequency::from_mhz(50),
    numerology: 2,
};
