use crate::defaults::{
    DEFAULT_PACKETS_PER_SECOND, DL_PORT_BROWSING, DL_PORT_VOICE, PACKET_SIZE_BROWSING,
    PACKET_SIZE_VOICE,
};
use std::fmt;

/// The two traffic classes a user terminal can carry.
///
/// Each class is bound to a distinct bearer type and a distinct bandwidth
/// part (spectrum partition). The mapping is a configuration-time constant:
///
/// | Class | Bearer | Bandwidth part |
/// |-------|--------|----------------|
/// | `Browsing` | non-GBR, low latency | 0 |
/// | `Voice` | guaranteed bit rate | 1 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TrafficClass {
    /// Interactive voice call traffic (guaranteed bit rate).
    Voice,
    /// Best-effort web browsing traffic (non-GBR, low latency).
    Browsing,
}

/// The bearer quality carried by a traffic class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BearerKind {
    /// `GBR_CONV_VOICE`: guaranteed bit rate, conversational voice.
    GuaranteedBitRate,
    /// `NGBR_LOW_LAT_EMBB`: non-guaranteed bit rate, low-latency eMBB.
    NonGbrLowLatency,
}

impl TrafficClass {
    /// The bearer type this class's packets travel on.
    pub const fn bearer(self) -> BearerKind {
        match self {
            Self::Voice => BearerKind::GuaranteedBitRate,
            Self::Browsing => BearerKind::NonGbrLowLatency,
        }
    }

    /// The logical spectrum partition (bandwidth part index) serving this class.
    pub const fn bwp_index(self) -> u8 {
        match self {
            Self::Voice => 1,
            Self::Browsing => 0,
        }
    }

    /// The downlink traffic profile for this class.
    pub const fn profile(self) -> TrafficProfile {
        match self {
            Self::Voice => TrafficProfile {
                packet_size: PACKET_SIZE_VOICE,
                packets_per_second: DEFAULT_PACKETS_PER_SECOND,
                port: DL_PORT_VOICE,
            },
            Self::Browsing => TrafficProfile {
                packet_size: PACKET_SIZE_BROWSING,
                packets_per_second: DEFAULT_PACKETS_PER_SECOND,
                port: DL_PORT_BROWSING,
            },
        }
    }
}

impl fmt::Display for TrafficClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Voice => "voice".fmt(f),
            Self::Browsing => "browsing".fmt(f),
        }
    }
}

/// Downlink traffic shape for one traffic class.
///
/// The external engine paces the packets; the profile only describes
/// what to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrafficProfile {
    /// UDP payload size in bytes.
    pub packet_size: u32,
    /// Constant packet rate (λ), packets per second.
    pub packets_per_second: u32,
    /// Destination port the class's sink listens on.
    pub port: u16,
}
