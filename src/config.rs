//! Command line and environment configuration.

use clap::Parser;

use crate::{
    error::Result,
    params::{PropagationSpeed, VoipParameters},
};

/// Computes the end-to-end delay of a single VoIP packet.
///
/// Every option can also be set through its environment variable or a
/// `.env` file. Defaults describe a 65Kbps codec on a 1.8Mbps, 712.7km link.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Codec conversion rate, in Kbps
    #[arg(long, env = "VOIP_CONVERSION_RATE_KBPS", default_value_t = 65.0)]
    pub conversion_rate_kbps: f64,

    /// Link transmission rate, in Mbps
    #[arg(long, env = "VOIP_LINK_RATE_MBPS", default_value_t = 1.8)]
    pub link_rate_mbps: f64,

    /// Packet length, in bytes
    #[arg(long, env = "VOIP_PACKET_LENGTH_BYTES", default_value_t = 65.0)]
    pub packet_length_bytes: f64,

    /// Link length, in kilometers
    #[arg(long, env = "VOIP_DISTANCE_KM", default_value_t = 712.7)]
    pub distance_km: f64,

    /// Propagation speed in m/s, in scientific notation such as 2.5e8
    #[arg(long, env = "VOIP_PROPAGATION_SPEED", default_value = "2.5e8")]
    pub propagation_speed: PropagationSpeed,

    /// Print each delay component as well as the total
    #[arg(long)]
    pub breakdown: bool,
}

impl Cli {
    /// Validates the options into a parameter set.
    pub fn parameters(&self) -> Result<VoipParameters> {
        VoipParameters::new(
            self.conversion_rate_kbps,
            self.link_rate_mbps,
            self.packet_length_bytes,
            self.distance_km,
            self.propagation_speed,
        )
    }
}
