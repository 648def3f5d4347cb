//! End-to-end VoIP Delay Calculator

#![forbid(unsafe_code, unused_must_use)]
#![warn(clippy::all, missing_docs)]

/// Unit conversion factors.
pub mod common;

/// Command line configuration.
pub mod config;

/// Delay components and their composition.
pub mod delay;

/// Error types.
pub mod error;

/// Validated input parameters.
pub mod params;

pub use delay::{
    DelayBreakdown, delay_breakdown, end_to_end_delay_ms, propagation_delay_seconds,
    transmission_time_seconds,
};
pub use error::{Error, Result};
pub use params::{PropagationSpeed, VoipParameters};
