//! # S1G Channel Mapping
//!
//! Translation between conventional 5 GHz channel numbering and 802.11ah
//! (S1G / HaLow) channels for each supported regulatory domain.
//!
//! The mapping tables are compiled-in constant data. A table is selected by
//! two-letter country code, after which channels, center frequencies and
//! bandwidth classes can be looked up against it:
//!
//! ```rust
//! use halow_chanmap::s1g::{select_table, Bandwidth};
//!
//! let us = select_table("US").unwrap();
//! let entry = us.entry_for_legacy(36).unwrap();
//! assert_eq!(entry.halow_channel, 5);
//! assert_eq!(us.freq_for_halow(5), Some(904.5));
//! assert_eq!(us.bandwidth_for_halow(12), Some(Bandwidth::Mhz8));
//! ```
//!
//! Nothing in this module performs I/O or fails: an unmapped country is
//! `None`, and a channel missing from a table is `None` as well. The free
//! functions in [`convert`] keep the older zero-fallback behaviour for
//! callers that expect it.

pub mod convert;
pub mod country;
pub mod rate;
pub mod tables;

use serde::Serialize;
use std::fmt;

pub use convert::{
    bandwidth_for_halow_channel, entry_for_legacy_channel, freq_for_halow_channel,
    halow_channel_for_freq_khz,
};
pub use country::{select_table, supported_countries};
pub use rate::{rate_scale_factor, scale_rate};
pub use tables::all_tables;

/// S1G operating bandwidth of a mapped channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Bandwidth {
    Mhz1 = 0,
    Mhz2 = 1,
    Mhz4 = 2,
    Mhz8 = 3,
}

impl Bandwidth {
    /// Bandwidth class as stored in the reference tables (0..=3)
    pub const fn class(self) -> u8 {
        self as u8
    }

    /// Channel width in MHz
    pub const fn mhz(self) -> u32 {
        match self {
            Bandwidth::Mhz1 => 1,
            Bandwidth::Mhz2 => 2,
            Bandwidth::Mhz4 => 4,
            Bandwidth::Mhz8 => 8,
        }
    }

    pub const fn from_class(class: u8) -> Option<Self> {
        match class {
            0 => Some(Bandwidth::Mhz1),
            1 => Some(Bandwidth::Mhz2),
            2 => Some(Bandwidth::Mhz4),
            3 => Some(Bandwidth::Mhz8),
            _ => None,
        }
    }
}

impl fmt::Display for Bandwidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}MHz", self.mhz())
    }
}

/// One row of a country mapping table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChannelEntry {
    /// 5 GHz channel number this row stands in for
    pub legacy_channel: u32,
    /// 802.11ah channel number
    pub halow_channel: u32,
    /// Center frequency in MHz
    pub halow_freq_mhz: f64,
    pub bandwidth: Bandwidth,
}

impl ChannelEntry {
    /// All-zero row returned by the zero-fallback lookups when nothing matched.
    pub const NULL: ChannelEntry = ChannelEntry {
        legacy_channel: 0,
        halow_channel: 0,
        halow_freq_mhz: 0.0,
        bandwidth: Bandwidth::Mhz1,
    };

    pub const fn new(
        legacy_channel: u32,
        halow_channel: u32,
        halow_freq_mhz: f64,
        bandwidth: Bandwidth,
    ) -> Self {
        Self {
            legacy_channel,
            halow_channel,
            halow_freq_mhz,
            bandwidth,
        }
    }

    /// Center frequency in kHz, rounded to the nearest integer
    pub fn freq_khz(&self) -> u32 {
        (self.halow_freq_mhz * 1000.0).round() as u32
    }

    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }
}

/// Channel mapping for one regulatory domain
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CountryTable {
    /// Two-letter uppercase country code
    pub country: &'static str,
    /// Rows in declared order; first match wins on lookups
    pub entries: &'static [ChannelEntry],
}

impl CountryTable {
    pub const fn new(country: &'static str, entries: &'static [ChannelEntry]) -> Self {
        Self { country, entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Row mapped to the given 5 GHz channel
    pub fn entry_for_legacy(&self, legacy_channel: u32) -> Option<&'static ChannelEntry> {
        self.entries
            .iter()
            .find(|e| e.legacy_channel == legacy_channel)
    }

    /// Center frequency (MHz) of an S1G channel
    pub fn freq_for_halow(&self, halow_channel: u32) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.halow_channel == halow_channel)
            .map(|e| e.halow_freq_mhz)
    }

    /// S1G channel whose center frequency is exactly `freq_khz`
    ///
    /// Stored frequencies are scaled to kHz and rounded before comparison;
    /// there is no tolerance band. Where two rows share a frequency, the
    /// one declared first is returned.
    pub fn halow_channel_for_freq_khz(&self, freq_khz: u32) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.freq_khz() == freq_khz)
            .map(|e| e.halow_channel)
    }

    /// Bandwidth of an S1G channel
    pub fn bandwidth_for_halow(&self, halow_channel: u32) -> Option<Bandwidth> {
        self.entries
            .iter()
            .find(|e| e.halow_channel == halow_channel)
            .map(|e| e.bandwidth)
    }

    /// Rows operating at the given bandwidth, in declared order
    pub fn entries_with_bandwidth(
        &self,
        bandwidth: Bandwidth,
    ) -> impl Iterator<Item = &'static ChannelEntry> {
        self.entries.iter().filter(move |e| e.bandwidth == bandwidth)
    }
}

impl fmt::Display for CountryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} channels)", self.country, self.entries.len())
    }
}
