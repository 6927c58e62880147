use crate::{
    defaults::{
        DEFAULT_BROWSING_BWP, DEFAULT_VOICE_BWP, OPERATING_RANGE_MAX, OPERATING_RANGE_MIN,
    },
    traffic::TrafficClass,
};
use anyhow::{bail, ensure};
use logos::{Lexer, Logos};
use std::{fmt, str::FromStr, time::Duration};

/// A radio frequency, stored in Hertz.
///
/// # Example
///
/// ```
/// # use ransim_core::spectrum::Frequency;
/// let f = Frequency::from_ghz(28);
/// assert_eq!(f.to_string(), "28ghz");
/// assert_eq!("28200mhz".parse::<Frequency>().unwrap(), Frequency::from_mhz(28_200));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Frequency(u64);

const K: u64 = 1_000;
const M: u64 = 1_000_000;
const G: u64 = 1_000_000_000;

impl Frequency {
    pub const fn from_hz(hz: u64) -> Self {
        Self(hz)
    }

    pub const fn from_mhz(mhz: u64) -> Self {
        Self(mhz * M)
    }

    pub const fn from_ghz(ghz: u64) -> Self {
        Self(ghz * G)
    }

    /// Returns the frequency in Hertz.
    #[inline]
    pub const fn hz(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        let k = v / K;
        let m = v / M;
        let g = v / G;

        let v_r = v % K;
        let k_r = v % M;
        let m_r = v % G;

        if v < K || v_r != 0 {
            write!(f, "{v}hz")
        } else if v < M || k_r != 0 {
            write!(f, "{k}khz")
        } else if v < G || m_r != 0 {
            write!(f, "{m}mhz")
        } else {
            write!(f, "{g}ghz")
        }
    }
}

#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \t\n\f]+")] // Ignore this regex pattern between tokens
enum FrequencyToken {
    #[regex("hz")]
    Hz,
    #[regex("khz")]
    Khz,
    #[regex("mhz")]
    Mhz,
    #[regex("ghz")]
    Ghz,

    #[regex("[0-9]+")]
    Value,
}

impl FromStr for Frequency {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lex = Lexer::<'_, FrequencyToken>::new(s);

        let Some(Ok(FrequencyToken::Value)) = lex.next() else {
            bail!("Expecting to parse a number")
        };
        let number: u64 = lex.slice().parse()?;
        let Some(Ok(token)) = lex.next() else {
            bail!("Expecting to parse a unit")
        };
        let hz = match token {
            FrequencyToken::Hz => number,
            FrequencyToken::Khz => number * K,
            FrequencyToken::Mhz => number * M,
            FrequencyToken::Ghz => number * G,
            FrequencyToken::Value => bail!("Expecting to parse a unit (hz, khz, ...)"),
        };

        ensure!(
            lex.next().is_none(),
            "Not expecting any other tokens to parse a frequency"
        );

        Ok(Self::from_hz(hz))
    }
}

/// One bandwidth part: a contiguous slice of spectrum with its numerology.
///
/// The numerology µ sets the slot duration to `1ms / 2^µ` (3GPP TS 38.211).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BandwidthPart {
    /// Center frequency of the part.
    pub center: Frequency,
    /// Occupied bandwidth of the part.
    pub bandwidth: Frequency,
    /// Numerology µ (subcarrier spacing of `15kHz · 2^µ`).
    pub numerology: u8,
}

impl BandwidthPart {
    /// The slot duration implied by this part's numerology.
    ///
    /// ```
    /// # use ransim_core::spectrum::BandwidthPart;
    /// # use ransim_core::spectrum::Frequency;
    /// # use std::time::Duration;
    /// let bwp = BandwidthPart {
    ///     center: Frequency::from_ghz(28),
    ///     bandwidth: Frequency::from_mhz(50),
    ///     numerology: 4,
    /// };
    /// assert_eq!(bwp.slot_duration(), Duration::from_nanos(62_500));
    /// ```
    pub const fn slot_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000 >> self.numerology)
    }
}

/// Error returned when a [`SpectrumPlan`] is not usable.
#[derive(Debug, thiserror::Error)]
pub enum SpectrumError {
    /// Both bandwidth parts are centered at the same frequency.
    #[error("both bandwidth parts are centered at {center}")]
    DuplicateCenter { center: Frequency },
    /// A center frequency falls outside the supported operating range.
    #[error(
        "{class} bandwidth part centered at {center} is outside the supported operating range ({OPERATING_RANGE_MIN} ..= {OPERATING_RANGE_MAX})"
    )]
    CenterOutOfRange {
        class: TrafficClass,
        center: Frequency,
    },
}

/// The scenario's spectrum division: one bandwidth part per traffic class.
///
/// ```text
/// ------------Band1--------------|--------------Band2-----------------
/// ------------BWP0 (browsing)----|--------------BWP1 (voice)----------
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpectrumPlan {
    pub voice: BandwidthPart,
    pub browsing: BandwidthPart,
}

impl SpectrumPlan {
    /// The bandwidth part serving the given traffic class.
    pub const fn part(&self, class: TrafficClass) -> &BandwidthPart {
        match class {
            TrafficClass::Voice => &self.voice,
            TrafficClass::Browsing => &self.browsing,
        }
    }

    /// Check the plan against the configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`SpectrumError::DuplicateCenter`]: the two parts share a center
    ///   frequency.
    /// - [`SpectrumError::CenterOutOfRange`]: a center frequency is outside
    ///   the supported 2 to 100 GHz operating range.
    pub fn validate(&self) -> Result<(), SpectrumError> {
        if self.voice.center == self.browsing.center {
            return Err(SpectrumError::DuplicateCenter {
                center: self.voice.center,
            });
        }
        for (class, part) in [
            (TrafficClass::Voice, &self.voice),
            (TrafficClass::Browsing, &self.browsing),
        ] {
            if part.center < OPERATING_RANGE_MIN || part.center > OPERATING_RANGE_MAX {
                return Err(SpectrumError::CenterOutOfRange {
                    class,
                    center: part.center,
                });
            }
        }
        Ok(())
    }
}

impl Default for SpectrumPlan {
    fn default() -> Self {
        Self {
            voice: DEFAULT_VOICE_BWP,
            browsing: DEFAULT_BROWSING_BWP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_frequency() {
        macro_rules! assert_frequency {
            ($string:literal == $value:expr) => {
                assert_eq!($string.parse::<Frequency>().unwrap(), $value);
            };
        }

        assert_frequency!("0hz" == Frequency::from_hz(0));
        assert_frequency!("42hz" == Frequency::from_hz(42));
        assert_frequency!("42khz" == Frequency::from_hz(42_000));
        assert_frequency!("50mhz" == Frequency::from_mhz(50));
        assert_frequency!("28ghz" == Frequency::from_ghz(28));
    }

    #[test]
    fn print_frequency() {
        assert_eq!(Frequency::from_hz(999).to_string(), "999hz");
        assert_eq!(Frequency::from_hz(42_000).to_string(), "42khz");
        assert_eq!(Frequency::from_mhz(50).to_string(), "50mhz");
        assert_eq!(Frequency::from_ghz(28).to_string(), "28ghz");
        // 28.2 GHz has no exact ghz representation
        assert_eq!(Frequency::from_mhz(28_200).to_string(), "28200mhz");
    }

    #[test]
    fn parse_invalid_strings() {
        assert!("42".parse::<Frequency>().is_err()); // no unit
        assert!("ghz".parse::<Frequency>().is_err()); // no number
        assert!("".parse::<Frequency>().is_err()); // empty
        assert!("42ghz extra".parse::<Frequency>().is_err()); // trailing token
    }

    #[test]
    fn display_round_trip() {
        let original = Frequency::from_mhz(28_200);
        let parsed: Frequency = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn slot_duration_by_numerology() {
        let mut bwp = DEFAULT_BROWSING_BWP;
        bwp.numerology = 0;
        assert_eq!(bwp.slot_duration(), Duration::from_millis(1));
        bwp.numerology = 2;
        assert_eq!(bwp.slot_duration(), Duration::from_micros(250));
        bwp.numerology = 4;
        assert_eq!(bwp.slot_duration(), Duration::from_nanos(62_500));
    }

    #[test]
    fn default_plan_is_valid() {
        assert!(SpectrumPlan::default().validate().is_ok());
    }

    #[test]
    fn duplicate_center_is_rejected() {
        let mut plan = SpectrumPlan::default();
        plan.browsing.center = plan.voice.center;
        assert!(matches!(
            plan.validate(),
            Err(SpectrumError::DuplicateCenter { .. })
        ));
    }

    #[test]
    fn center_below_operating_range_is_rejected() {
        let mut plan = SpectrumPlan::default();
        plan.voice.center = Frequency::from_mhz(900);
        assert!(matches!(
            plan.validate(),
            Err(SpectrumError::CenterOutOfRange {
                class: TrafficClass::Voice,
                ..
            })
        ));
    }

    #[test]
    fn center_above_operating_range_is_rejected() {
        let mut plan = SpectrumPlan::default();
        plan.browsing.center = Frequency::from_ghz(120);
        assert!(matches!(
            plan.validate(),
            Err(SpectrumError::CenterOutOfRange {
                class: TrafficClass::Browsing,
                ..
            })
        ));
    }
}
