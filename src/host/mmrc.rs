//! # MMRC Throughput
//!
//! The Morse Micro rate control (MMRC) algorithm publishes its rate table in
//! debugfs at `<debugfs>/ieee80211/<phy>/morse/mmrc_table`. Each rate row
//! names its MCS, bandwidth and guard interval; the row currently in use is
//! flagged with an `A` past the rate description, and the average
//! throughput in Mbit/s starts at a fixed column.
//!
//! Throughput is reported in kbps. A measured zero is reported as 1 kbps so
//! that "no traffic" stays distinguishable from "unknown" in station lists.

use log::{debug, warn};
use nom::{
    character::complete::multispace0, number::complete::double, sequence::preceded, IResult,
};

use crate::config::HostConfig;
use crate::error::HalowError;

/// Byte offset where the active-rate flag search starts
const ACTIVE_FLAG_OFFSET: usize = 17;
/// Byte offset of the average throughput column
const THROUGHPUT_OFFSET: usize = 55;

/// Whether a table line is the rate currently selected by MMRC
pub fn is_active_row(line: &str) -> bool {
    if !line.contains("MCS") || !line.contains("MHz") {
        return false;
    }
    if !line.contains("SGI") && !line.contains("LGI") {
        return false;
    }
    line.get(ACTIVE_FLAG_OFFSET..)
        .map_or(false, |rest| rest.contains('A'))
}

fn throughput_column(input: &str) -> IResult<&str, f64> {
    preceded(multispace0, double)(input)
}

/// Average throughput of a rate row, rounded to the nearest kbps.
pub fn row_throughput_kbps(line: &str) -> Option<u32> {
    let column = line.get(THROUGHPUT_OFFSET..)?;
    let (_, mbps) = throughput_column(column).ok()?;
    if !mbps.is_finite() || mbps < 0.0 {
        return None;
    }
    Some((mbps * 1000.0).round() as u32)
}

/// Throughput of the first active row in a dumped rate table.
///
/// Returns `None` if no row is active or the active row has no readable
/// throughput column. A zero reading is raised to 1.
pub fn parse_mmrc_table(text: &str) -> Option<u32> {
    let line = text.lines().find(|line| is_active_row(line))?;
    row_throughput_kbps(line).map(|kbps| kbps.max(1))
}

/// Reads MMRC throughput for a phy from debugfs
#[derive(Debug, Clone)]
pub struct MmrcReader {
    config: HostConfig,
}

impl MmrcReader {
    pub fn new(config: HostConfig) -> Self {
        Self { config }
    }

    /// Raw rate table contents for a phy
    pub async fn read_table(&self, phyname: &str) -> Result<String, HalowError> {
        let path = self.config.mmrc_table_path(phyname);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| HalowError::io(path, e))
    }

    /// Average throughput in kbps, or `None` if unavailable
    pub async fn throughput(&self, phyname: &str) -> Option<u32> {
        let table = match self.read_table(phyname).await {
            Ok(table) => table,
            Err(e) => {
                warn!("{e}");
                return None;
            }
        };
        let kbps = parse_mmrc_table(&table);
        debug!("{phyname}: mmrc throughput {kbps:?} kbps");
        kbps
    }

    /// Average throughput in kbps, `-1` if unavailable
    pub async fn throughput_kbps(&self, phyname: &str) -> i32 {
        match self.throughput(phyname).await {
            Some(kbps) => i32::try_from(kbps).unwrap_or(i32::MAX),
            None => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate_row(desc: &str, flags: &str, mbps: &str) -> String {
        format!("{desc:<17}{flags:<38}{mbps}   95.2")
    }

    #[test]
    fn test_active_row_detection() {
        assert!(is_active_row(&rate_row("MCS7 2MHz SGI", " A  ", "6.5")));
        assert!(is_active_row(&rate_row("MCS0 1MHz LGI", "  A ", "0.3")));
        // no active flag
        assert!(!is_active_row(&rate_row("MCS7 2MHz SGI", "    ", "6.5")));
        // flag inside the description does not count
        assert!(!is_active_row(&rate_row("MCS7 2MHz SGI A", "    ", "6.5")));
        // missing guard interval
        assert!(!is_active_row(&rate_row("MCS7 2MHz", " A  ", "6.5")));
        assert!(!is_active_row("MCS MHz SGI A"));
    }

    #[test]
    fn test_row_throughput() {
        assert_eq!(row_throughput_kbps(&rate_row("MCS7 2MHz SGI", " A", "6.5")), Some(6500));
        assert_eq!(row_throughput_kbps(&rate_row("MCS7 2MHz SGI", " A", "  12.25")), Some(12250));
        assert_eq!(row_throughput_kbps(&rate_row("MCS7 2MHz SGI", " A", "n/a")), None);
        assert_eq!(row_throughput_kbps("short line"), None);
    }

    #[test]
    fn test_row_throughput_keeps_last_kbps() {
        // 1.001 * 1000.0 is 1000.999... in binary floating point
        for (mbps, kbps) in [("1.001", 1001), ("1.005", 1005), ("0.001", 1), ("99.999", 99999)] {
            assert_eq!(
                row_throughput_kbps(&rate_row("MCS1 1MHz LGI", " A", mbps)),
                Some(kbps),
                "{mbps} Mbit/s"
            );
        }
    }

    #[test]
    fn test_parse_table_first_active_row() {
        let table = [
            "rate             flags            ...".to_string(),
            rate_row("MCS2 1MHz LGI", "    ", "1.1"),
            rate_row("MCS3 2MHz SGI", " A  ", "3.4"),
            rate_row("MCS4 2MHz SGI", " A  ", "4.8"),
        ]
        .join("\n");
        assert_eq!(parse_mmrc_table(&table), Some(3400));
    }

    #[test]
    fn test_zero_throughput_is_floored() {
        let table = rate_row("MCS0 1MHz LGI", " A", "0.0");
        assert_eq!(parse_mmrc_table(&table), Some(1));
    }

    #[test]
    fn test_no_active_row() {
        let table = rate_row("MCS0 1MHz LGI", "", "5.0");
        assert_eq!(parse_mmrc_table(&table), None);
        assert_eq!(parse_mmrc_table(""), None);
    }

    #[tokio::test]
    async fn test_missing_table_is_unavailable() {
        let config = HostConfig {
            debugfs_root: "/nonexistent/ieee80211".into(),
            ..HostConfig::default()
        };
        let reader = MmrcReader::new(config);
        assert_eq!(reader.throughput("phy0").await, None);
        assert_eq!(reader.throughput_kbps("phy0").await, -1);
    }
}
