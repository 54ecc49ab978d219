//! Zero-fallback channel/frequency conversions.
//!
//! These take an optional table (the result of [`select_table`]) and return
//! zero, or [`ChannelEntry::NULL`], when there is no table or no matching
//! row. They exist for callers that display or forward raw numbers and
//! treat `0` as "unknown". New code should prefer the `Option` returning
//! methods on [`CountryTable`], which keep "not found" distinct from real
//! data.
//!
//! [`select_table`]: super::select_table

use super::{ChannelEntry, CountryTable};

/// Row for a 5 GHz channel, or the null row
pub fn entry_for_legacy_channel(table: Option<&CountryTable>, legacy_channel: u32) -> ChannelEntry {
    table
        .and_then(|t| t.entry_for_legacy(legacy_channel))
        .copied()
        .unwrap_or(ChannelEntry::NULL)
}

/// Center frequency in MHz of an S1G channel, or `0.0`
pub fn freq_for_halow_channel(table: Option<&CountryTable>, halow_channel: u32) -> f64 {
    table
        .and_then(|t| t.freq_for_halow(halow_channel))
        .unwrap_or(0.0)
}

/// S1G channel centered on `freq_khz`, or `0`
pub fn halow_channel_for_freq_khz(table: Option<&CountryTable>, freq_khz: u32) -> u32 {
    table
        .and_then(|t| t.halow_channel_for_freq_khz(freq_khz))
        .unwrap_or(0)
}

/// Bandwidth class (0 = 1 MHz .. 3 = 8 MHz) of an S1G channel, or `0`
pub fn bandwidth_for_halow_channel(table: Option<&CountryTable>, halow_channel: u32) -> u8 {
    table
        .and_then(|t| t.bandwidth_for_halow(halow_channel))
        .map(|bw| bw.class())
        .unwrap_or(0)
}
