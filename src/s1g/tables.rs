//! # Regulatory Channel Tables
//!
//! Compiled-in 5 GHz to S1G channel maps for each supported regulatory
//! domain. Each row is `(5 GHz channel, S1G channel, center MHz, bandwidth)`.
//!
//! This is regulatory data and is transcribed as published; it cannot be
//! derived from a channel formula. Rows are grouped by bandwidth in
//! declared order, and that order decides which row wins when a lookup key
//! appears more than once (e.g. JP has 2 MHz and 4 MHz channels sharing a
//! center frequency).

use once_cell::sync::Lazy;

use super::Bandwidth::{Mhz1, Mhz2, Mhz4, Mhz8};
use super::{Bandwidth, ChannelEntry, CountryTable};

const fn ch(legacy: u32, halow: u32, freq_mhz: f64, bw: Bandwidth) -> ChannelEntry {
    ChannelEntry::new(legacy, halow, freq_mhz, bw)
}

static US_CHANNELS: [ChannelEntry; 48] = [
    // 1 MHz
    ch(132, 1, 902.5, Mhz1),
    ch(136, 3, 903.5, Mhz1),
    ch(36, 5, 904.5, Mhz1),
    ch(40, 7, 905.5, Mhz1),
    ch(44, 9, 906.5, Mhz1),
    ch(48, 11, 907.5, Mhz1),
    ch(52, 13, 908.5, Mhz1),
    ch(56, 15, 909.5, Mhz1),
    ch(60, 17, 910.5, Mhz1),
    ch(64, 19, 911.5, Mhz1),
    ch(100, 21, 912.5, Mhz1),
    ch(104, 23, 913.5, Mhz1),
    ch(108, 25, 914.5, Mhz1),
    ch(112, 27, 915.5, Mhz1),
    ch(116, 29, 916.5, Mhz1),
    ch(120, 31, 917.5, Mhz1),
    ch(124, 33, 918.5, Mhz1),
    ch(128, 35, 919.5, Mhz1),
    ch(149, 37, 920.5, Mhz1),
    ch(153, 39, 921.5, Mhz1),
    ch(157, 41, 922.5, Mhz1),
    ch(161, 43, 923.5, Mhz1),
    ch(165, 45, 924.5, Mhz1),
    ch(169, 47, 925.5, Mhz1),
    ch(173, 49, 926.5, Mhz1),
    ch(177, 51, 927.5, Mhz1),
    // 2 MHz
    ch(134, 2, 903.0, Mhz2),
    ch(38, 6, 905.0, Mhz2),
    ch(46, 10, 907.0, Mhz2),
    ch(54, 14, 909.0, Mhz2),
    ch(62, 18, 911.0, Mhz2),
    ch(102, 22, 913.0, Mhz2),
    ch(110, 26, 915.0, Mhz2),
    ch(118, 30, 917.0, Mhz2),
    ch(126, 34, 919.0, Mhz2),
    ch(151, 38, 921.0, Mhz2),
    ch(159, 42, 923.0, Mhz2),
    ch(167, 46, 925.0, Mhz2),
    ch(175, 50, 927.0, Mhz2),
    // 4 MHz
    ch(42, 8, 906.0, Mhz4),
    ch(58, 16, 910.0, Mhz4),
    ch(106, 24, 914.0, Mhz4),
    ch(122, 32, 918.0, Mhz4),
    ch(155, 40, 922.0, Mhz4),
    ch(171, 48, 926.0, Mhz4),
    // 8 MHz
    ch(50, 12, 908.0, Mhz8),
    ch(114, 28, 916.0, Mhz8),
    ch(163, 44, 924.0, Mhz8),
];

static AU_CHANNELS: [ChannelEntry; 23] = [
    // 1 MHz
    ch(112, 27, 915.5, Mhz1),
    ch(116, 29, 916.5, Mhz1),
    ch(120, 31, 917.5, Mhz1),
    ch(124, 33, 918.5, Mhz1),
    ch(128, 35, 919.5, Mhz1),
    ch(149, 37, 920.5, Mhz1),
    ch(153, 39, 921.5, Mhz1),
    ch(157, 41, 922.5, Mhz1),
    ch(161, 43, 923.5, Mhz1),
    ch(165, 45, 924.5, Mhz1),
    ch(169, 47, 925.5, Mhz1),
    ch(173, 49, 926.5, Mhz1),
    ch(177, 51, 927.5, Mhz1),
    // 2 MHz
    ch(118, 30, 917.0, Mhz2),
    ch(126, 34, 919.0, Mhz2),
    ch(151, 38, 921.0, Mhz2),
    ch(159, 42, 923.0, Mhz2),
    ch(167, 46, 925.0, Mhz2),
    ch(175, 50, 927.0, Mhz2),
    // 4 MHz
    ch(122, 32, 918.0, Mhz4),
    ch(155, 40, 922.0, Mhz4),
    ch(171, 48, 926.0, Mhz4),
    // 8 MHz
    ch(163, 44, 924.0, Mhz8),
];

static NZ_CHANNELS: [ChannelEntry; 23] = [
    // 1 MHz
    ch(112, 27, 915.5, Mhz1),
    ch(116, 29, 916.5, Mhz1),
    ch(120, 31, 917.5, Mhz1),
    ch(124, 33, 918.5, Mhz1),
    ch(128, 35, 919.5, Mhz1),
    ch(149, 37, 920.5, Mhz1),
    ch(153, 39, 921.5, Mhz1),
    ch(157, 41, 922.5, Mhz1),
    ch(161, 43, 923.5, Mhz1),
    ch(165, 45, 924.5, Mhz1),
    ch(169, 47, 925.5, Mhz1),
    ch(173, 49, 926.5, Mhz1),
    ch(177, 51, 927.5, Mhz1),
    // 2 MHz
    ch(118, 30, 917.0, Mhz2),
    ch(126, 34, 919.0, Mhz2),
    ch(151, 38, 921.0, Mhz2),
    ch(159, 42, 923.0, Mhz2),
    ch(167, 46, 925.0, Mhz2),
    ch(175, 50, 927.0, Mhz2),
    // 4 MHz
    ch(122, 32, 918.0, Mhz4),
    ch(155, 40, 922.0, Mhz4),
    ch(171, 48, 926.0, Mhz4),
    // 8 MHz
    ch(163, 44, 924.0, Mhz8),
];

static EU_CHANNELS: [ChannelEntry; 8] = [
    // 1 MHz
    ch(132, 1, 863.5, Mhz1),
    ch(136, 3, 864.5, Mhz1),
    ch(36, 5, 865.5, Mhz1),
    ch(40, 7, 866.5, Mhz1),
    ch(44, 9, 867.5, Mhz1),
    ch(120, 31, 916.9, Mhz1),
    ch(124, 33, 917.9, Mhz1),
    ch(128, 35, 918.9, Mhz1),
];

static IN_CHANNELS: [ChannelEntry; 3] = [
    // 1 MHz
    ch(36, 5, 865.5, Mhz1),
    ch(40, 7, 866.5, Mhz1),
    ch(44, 9, 867.5, Mhz1),
];

static JP_CHANNELS: [ChannelEntry; 11] = [
    // 1 MHz
    ch(36, 13, 923.0, Mhz1),
    ch(40, 15, 924.0, Mhz1),
    ch(44, 17, 925.0, Mhz1),
    ch(48, 19, 926.0, Mhz1),
    ch(64, 21, 927.0, Mhz1),
    // 2 MHz
    ch(38, 2, 923.5, Mhz2),
    ch(46, 6, 925.5, Mhz2),
    ch(54, 4, 924.5, Mhz2),
    ch(62, 8, 926.5, Mhz2),
    // 4 MHz
    ch(42, 36, 924.5, Mhz4),
    ch(58, 38, 925.5, Mhz4),
];

static KR_CHANNELS: [ChannelEntry; 10] = [
    // 1 MHz
    ch(132, 1, 918.0, Mhz1),
    ch(136, 3, 919.0, Mhz1),
    ch(36, 5, 920.0, Mhz1),
    ch(40, 7, 921.0, Mhz1),
    ch(44, 9, 922.0, Mhz1),
    ch(48, 11, 923.0, Mhz1),
    // 2 MHz
    ch(134, 2, 918.5, Mhz2),
    ch(38, 6, 920.5, Mhz2),
    ch(46, 10, 922.5, Mhz2),
    // 4 MHz
    ch(42, 8, 921.5, Mhz4),
];

static SG_CHANNELS: [ChannelEntry; 12] = [
    // 1 MHz
    ch(40, 7, 866.5, Mhz1),
    ch(44, 9, 867.5, Mhz1),
    ch(48, 11, 868.5, Mhz1),
    ch(149, 37, 920.5, Mhz1),
    ch(153, 39, 921.5, Mhz1),
    ch(157, 41, 922.5, Mhz1),
    ch(161, 43, 923.5, Mhz1),
    ch(165, 45, 924.5, Mhz1),
    // 2 MHz
    ch(46, 10, 868.0, Mhz2),
    ch(151, 38, 921.0, Mhz2),
    ch(159, 42, 923.0, Mhz2),
    // 4 MHz
    ch(155, 40, 922.0, Mhz4),
];
/// Registry of all country tables, in selection order.
///
/// The end of the list terminates a country search; there is no catch-all
/// entry, so an unknown country code selects nothing.
pub static REGISTRY: Lazy<Vec<CountryTable>> = Lazy::new(|| {
    vec![
        CountryTable::new("US", &US_CHANNELS),
        CountryTable::new("AU", &AU_CHANNELS),
        CountryTable::new("NZ", &NZ_CHANNELS),
        CountryTable::new("EU", &EU_CHANNELS),
        CountryTable::new("IN", &IN_CHANNELS),
        CountryTable::new("JP", &JP_CHANNELS),
        CountryTable::new("KR", &KR_CHANNELS),
        CountryTable::new("SG", &SG_CHANNELS),
    ]
});

/// All compiled-in country tables, in registry order
pub fn all_tables() -> &'static [CountryTable] {
    REGISTRY.as_slice()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_order_and_sizes() {
        let summary: Vec<(&str, usize)> = all_tables()
            .iter()
            .map(|t| (t.country, t.entries.len()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("US", 48),
                ("AU", 23),
                ("NZ", 23),
                ("EU", 8),
                ("IN", 3),
                ("JP", 11),
                ("KR", 10),
                ("SG", 12),
            ]
        );
    }

    #[test]
    fn test_country_codes_are_uppercase_pairs() {
        for table in all_tables() {
            assert_eq!(table.country.len(), 2);
            assert!(table.country.bytes().all(|b| b.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_channels_unique_within_table() {
        for table in all_tables() {
            let legacy: HashSet<u32> = table.entries.iter().map(|e| e.legacy_channel).collect();
            let halow: HashSet<u32> = table.entries.iter().map(|e| e.halow_channel).collect();
            assert_eq!(legacy.len(), table.len(), "{} legacy channels", table.country);
            assert_eq!(halow.len(), table.len(), "{} S1G channels", table.country);
        }
    }

    #[test]
    fn test_rows_grouped_by_bandwidth() {
        for table in all_tables() {
            let classes: Vec<u8> = table.entries.iter().map(|e| e.bandwidth.class()).collect();
            assert!(
                classes.windows(2).all(|w| w[0] <= w[1]),
                "{} rows out of bandwidth order",
                table.country
            );
        }
    }

    #[test]
    fn test_au_and_nz_share_plan() {
        let au = &all_tables()[1];
        let nz = &all_tables()[2];
        assert_eq!(au.entries, nz.entries);
    }

    #[test]
    fn test_frequencies_in_sub_ghz_bands() {
        for table in all_tables() {
            for entry in table.entries {
                assert!(
                    (863.0..=928.0).contains(&entry.halow_freq_mhz),
                    "{} channel {} at {} MHz",
                    table.country,
                    entry.halow_channel,
                    entry.halow_freq_mhz
                );
            }
        }
    }
}
