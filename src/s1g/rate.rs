//! 5 GHz to S1G data-rate rescaling.
//!
//! Rate reports from the 5 GHz-oriented shim layer are expressed for
//! 20/40/80/160 MHz channels. The S1G PHY uses the same OFDM numerology
//! clocked ten times slower over narrower channels, so the reported rate is
//! scaled by ten times the ratio of data subcarriers.

/// Scale factor used when the reported bandwidth is not one of the known
/// 5 GHz widths.
pub const DEFAULT_RATE_SCALE: u32 = 20;

/// (bandwidth MHz, 5 GHz data subcarriers, S1G data subcarriers)
const SUBCARRIERS: [(u32, u32, u32); 4] = [
    (20, 52, 24),
    (40, 108, 52),
    (80, 234, 108),
    (160, 468, 234),
];

/// Divisor applied to a 5 GHz rate reported at `legacy_bandwidth_mhz`
pub fn rate_scale_factor(legacy_bandwidth_mhz: u32) -> u32 {
    SUBCARRIERS
        .iter()
        .find(|(bw, _, _)| *bw == legacy_bandwidth_mhz)
        .map(|(_, legacy_sc, s1g_sc)| 10 * legacy_sc / s1g_sc)
        .unwrap_or(DEFAULT_RATE_SCALE)
}

/// Convert a 5 GHz MCS data rate into the equivalent S1G rate.
///
/// # Examples
/// ```rust
/// use halow_chanmap::s1g::scale_rate;
///
/// assert_eq!(scale_rate(100, 20), 4);   // scale 10 * 52 / 24 = 21
/// assert_eq!(scale_rate(100, 999), 5);  // unknown width, scale 20
/// ```
pub fn scale_rate(legacy_rate: u32, legacy_bandwidth_mhz: u32) -> u32 {
    legacy_rate / rate_scale_factor(legacy_bandwidth_mhz)
}
