/// Bits in one byte
pub static BITS_PER_BYTE: f64 = 8.0;

/// 1Kbps in bits per second
pub static BPS_PER_KBPS: f64 = 1_000.0;

/// 1Mbps in bits per second
pub static BPS_PER_MBPS: f64 = 1_000.0 * 1_000.0;

/// Meters in one kilometer
pub static METERS_PER_KM: f64 = 1_000.0;

/// Milliseconds in one second
pub static MS_PER_SECOND: f64 = 1_000.0;
