//! Validated inputs of the delay calculator.

use std::{fmt, str::FromStr};

use crate::error::{Error, Result, ensure_divisor, ensure_non_negative, ensure_positive};

/// Signal propagation speed in meters/second, kept in scientific notation.
///
/// The speed is `significant_digits * 10^exponent`. Both parts are stored as
/// given, so `2.5e8` and `250000000e0` stay distinguishable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropagationSpeed {
    significant_digits: f64,
    exponent: i32,
}

impl PropagationSpeed {
    /// Creates a propagation speed of `significant_digits * 10^exponent` m/s.
    pub fn new(significant_digits: f64, exponent: i32) -> Result<Self> {
        ensure_divisor("propagation speed significant digits", significant_digits)?;

        let speed = Self {
            significant_digits,
            exponent,
        };

        let mps = speed.meters_per_second();
        if !mps.is_finite() || mps == 0.0 {
            return Err(Error::SpeedOutOfRange {
                significant_digits,
                exponent,
            });
        }

        Ok(speed)
    }

    /// Significant digits
    pub fn significant_digits(&self) -> f64 {
        self.significant_digits
    }

    /// Power of ten
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Reconstructs the speed in meters/second.
    pub fn meters_per_second(&self) -> f64 {
        self.significant_digits * 10f64.powi(self.exponent)
    }
}

impl fmt::Display for PropagationSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}e{}", self.significant_digits, self.exponent)
    }
}

impl FromStr for PropagationSpeed {
    type Err = Error;

    /// Parses `2.5e8`, `2.5E+8` or a plain number such as `250000000`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let malformed = || Error::ParseSpeed(s.to_string());

        let (significant_digits, exponent) = match s.split_once(['e', 'E']) {
            Some((digits, exponent)) => (
                digits.parse::<f64>().map_err(|_| malformed())?,
                exponent.parse::<i32>().map_err(|_| malformed())?,
            ),
            None => (s.parse::<f64>().map_err(|_| malformed())?, 0),
        };

        Self::new(significant_digits, exponent)
    }
}

/// Link and codec parameters of a single VoIP packet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoipParameters {
    conversion_rate_kbps: f64,
    link_transmission_rate_mbps: f64,
    packet_length_bytes: f64,
    propagation_distance_km: f64,
    propagation_speed: PropagationSpeed,
}

impl VoipParameters {
    /// Creates a parameter set.
    ///
    /// Rates and packet length must be positive, the distance must not be
    /// negative. Every value must be finite.
    pub fn new(
        conversion_rate_kbps: f64,
        link_transmission_rate_mbps: f64,
        packet_length_bytes: f64,
        propagation_distance_km: f64,
        propagation_speed: PropagationSpeed,
    ) -> Result<Self> {
        Ok(Self {
            conversion_rate_kbps: ensure_divisor("conversion rate", conversion_rate_kbps)?,
            link_transmission_rate_mbps: ensure_divisor(
                "link transmission rate",
                link_transmission_rate_mbps,
            )?,
            packet_length_bytes: ensure_positive("packet length", packet_length_bytes)?,
            propagation_distance_km: ensure_non_negative(
                "propagation distance",
                propagation_distance_km,
            )?,
            propagation_speed,
        })
    }

    /// Codec bit rate, in Kbps
    pub fn conversion_rate_kbps(&self) -> f64 {
        self.conversion_rate_kbps
    }

    /// Link capacity, in Mbps
    pub fn link_transmission_rate_mbps(&self) -> f64 {
        self.link_transmission_rate_mbps
    }

    /// Packet size, in bytes
    pub fn packet_length_bytes(&self) -> f64 {
        self.packet_length_bytes
    }

    /// Link length, in kilometers
    pub fn propagation_distance_km(&self) -> f64 {
        self.propagation_distance_km
    }

    /// Propagation speed of the medium
    pub fn propagation_speed(&self) -> PropagationSpeed {
        self.propagation_speed
    }
}
