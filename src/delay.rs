//! Closed-form delay components of a VoIP packet.
//!
//! Conversion, transmission and propagation are treated as strictly
//! sequential: a packet is fully encoded before it is sent, and fully
//! received before de-conversion starts.

use tracing::{debug, instrument, trace};

use crate::{
    common::*,
    error::{Result, ensure_divisor, ensure_finite_delay, ensure_non_negative, ensure_positive},
    params::{PropagationSpeed, VoipParameters},
};

/// Time to push a packet of `length_in_bytes` onto a `rate_in_mbps` link, in
/// seconds.
#[instrument(level = "trace")]
pub fn transmission_time_seconds(length_in_bytes: f64, rate_in_mbps: f64) -> Result<f64> {
    let packet_length_bits = ensure_positive("packet length", length_in_bytes)? * BITS_PER_BYTE;
    let rate_bps = ensure_divisor("link transmission rate", rate_in_mbps)? * BPS_PER_MBPS;

    ensure_finite_delay("transmission delay", packet_length_bits / rate_bps)
}

/// Time for a signal to travel `distance_km` at `speed`, in seconds.
#[instrument(level = "trace", skip(speed), fields(speed = %speed))]
pub fn propagation_delay_seconds(distance_km: f64, speed: PropagationSpeed) -> Result<f64> {
    let distance_meters = ensure_non_negative("propagation distance", distance_km)? * METERS_PER_KM;

    ensure_finite_delay("propagation delay", distance_meters / speed.meters_per_second())
}

/// Per-component delays of one packet, in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DelayBreakdown {
    /// Codec conversion delay
    pub conversion_s: f64,
    /// Transmission delay
    pub transmission_s: f64,
    /// Propagation delay
    pub propagation_s: f64,
}

impl DelayBreakdown {
    /// Sum of all components, in seconds.
    pub fn total_seconds(&self) -> f64 {
        self.conversion_s + self.transmission_s + self.propagation_s
    }

    /// Sum of all components, in milliseconds.
    pub fn total_ms(&self) -> f64 {
        self.total_seconds() * MS_PER_SECOND
    }
}

/// Computes every delay component of a packet described by `params`.
#[instrument(level = "trace", skip(params))]
pub fn delay_breakdown(params: &VoipParameters) -> Result<DelayBreakdown> {
    let conversion_rate_bps = params.conversion_rate_kbps() * BPS_PER_KBPS;

    let propagation_s =
        propagation_delay_seconds(params.propagation_distance_km(), params.propagation_speed())?;
    trace!(propagation_s);

    let transmission_s = transmission_time_seconds(
        params.packet_length_bytes(),
        params.link_transmission_rate_mbps(),
    )?;
    trace!(transmission_s);

    let packet_length_bits = params.packet_length_bytes() * BITS_PER_BYTE;
    let conversion_s =
        ensure_finite_delay("conversion delay", packet_length_bits / conversion_rate_bps)?;
    trace!(conversion_s);

    Ok(DelayBreakdown {
        conversion_s,
        transmission_s,
        propagation_s,
    })
}

/// End-to-end VoIP delay in milliseconds, from the start of conversion at
/// the sender to the start of de-conversion at the receiver.
pub fn end_to_end_delay_ms(params: &VoipParameters) -> Result<f64> {
    let delay_ms = ensure_finite_delay("end-to-end delay", delay_breakdown(params)?.total_ms())?;
    debug!(delay_ms, "End-to-end delay computed");

    Ok(delay_ms)
}
