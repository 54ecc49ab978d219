//! # halow-chanmap - 5 GHz to 802.11ah Channel Translation
//!
//! Tooling written for 5 GHz Wi-Fi speaks in 5 GHz channel numbers and
//! 20-160 MHz data rates. An 802.11ah (S1G, "Wi-Fi HaLow") radio runs on
//! 1-8 MHz channels below 1 GHz, with a different channel plan in every
//! regulatory domain. This crate translates between the two.
//!
//! ## Features
//!
//! - Compiled-in 5 GHz to S1G channel maps for US, AU, NZ, EU, IN, JP, KR and SG
//! - Country code to table selection
//! - Channel to frequency, frequency to channel and channel to bandwidth lookups
//! - 5 GHz to S1G data-rate rescaling
//! - Host adapters for the driver's country parameter, MMRC throughput and
//!   `morse_cli` statistics
//!
//! ## Usage
//!
//! ```rust
//! use halow_chanmap::{select_table, scale_rate};
//!
//! let table = select_table("AU").unwrap();
//! let entry = table.entry_for_legacy(163).unwrap();
//! assert_eq!(entry.halow_channel, 44);
//! assert_eq!(entry.halow_freq_mhz, 924.0);
//!
//! assert_eq!(scale_rate(65_000, 40), 3250);
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod logging;
pub mod s1g;

pub use crate::config::HostConfig;
pub use crate::error::HalowError;
pub use crate::logging::init_logger;

// Core channel mapping
pub use s1g::{
    all_tables, bandwidth_for_halow_channel, entry_for_legacy_channel, freq_for_halow_channel,
    halow_channel_for_freq_khz, rate_scale_factor, scale_rate, select_table, supported_countries,
    Bandwidth, ChannelEntry, CountryTable,
};

// Host adapters
pub use host::{active_table, read_country_code, CountrySource, MmrcReader, MorseCli, StatSlot};
