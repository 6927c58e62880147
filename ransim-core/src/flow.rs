use anyhow::anyhow;
use std::{fmt, net::SocketAddrV4, str, time::Duration};

/// The identifier of one (source, destination) traffic flow, assigned by
/// the external engine's flow classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlowId(u64);

impl FlowId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl str::FromStr for FlowId {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self).map_err(|error| anyhow!("{error}"))
    }
}

impl fmt::Display for FlowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The transport protocol of a flow, read-only context for the report
/// header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    Tcp,
    Udp,
    /// Any other IP protocol, reported by its protocol number.
    Other(u8),
}

impl Protocol {
    /// Classify from the IP protocol number.
    pub const fn from_number(number: u8) -> Self {
        match number {
            6 => Self::Tcp,
            17 => Self::Udp,
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tcp => "TCP".fmt(f),
            Self::Udp => "UDP".fmt(f),
            Self::Other(number) => number.fmt(f),
        }
    }
}

/// The two endpoints of a flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlowEndpoints {
    pub source: SocketAddrV4,
    pub destination: SocketAddrV4,
}

impl fmt::Display for FlowEndpoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

/// Raw per-flow counters reported by the external engine after a run.
///
/// Read-only input to the statistics aggregator; the core never produces
/// or mutates these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowRecord {
    pub id: FlowId,
    pub endpoints: FlowEndpoints,
    pub protocol: Protocol,
    /// Packets handed to the sender's stack during the traffic window.
    pub tx_packets: u64,
    /// Bytes handed to the sender's stack during the traffic window.
    pub tx_bytes: u64,
    /// Packets delivered to the receiver.
    pub rx_packets: u64,
    /// Bytes delivered to the receiver.
    pub rx_bytes: u64,
    /// Sum of the per-packet one-way delays of all received packets.
    pub delay_sum: Duration,
    /// Sum of the per-packet delay variations of all received packets.
    pub jitter_sum: Duration,
}
